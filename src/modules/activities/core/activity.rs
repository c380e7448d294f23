use serde::{Deserialize, Serialize};

/// An extracurricular offering. The activity name is the key it is stored
/// under, so it is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory only. Sign-ups are accepted past this number.
    pub max_participants: u32,
    /// Participant emails in sign-up order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
