#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { participants: Vec<String> },
    Rejected { reason: DecideError },
}
