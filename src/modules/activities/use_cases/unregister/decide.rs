use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::modules::activities::use_cases::unregister::decision::{DecideError, Decision};

/// Removes the email from the roster, keeping everyone else in order.
pub fn decide_unregister(activity: &Activity, command: &Unregister) -> Decision {
    if !activity.is_registered(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }
    let participants = activity
        .participants
        .iter()
        .filter(|p| **p != command.email)
        .cloned()
        .collect();
    Decision::Accepted { participants }
}
