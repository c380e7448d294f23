// Pure decision function for signing up.
//
// - Reject an email that is already on the roster.
// - Otherwise append it. max_participants is not consulted.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decision::{DecideError, Decision};

pub fn decide_sign_up(activity: &Activity, command: &SignUp) -> Decision {
    if activity.is_registered(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    let mut participants = activity.participants.clone();
    participants.push(command.email.clone());
    Decision::Accepted { participants }
}
