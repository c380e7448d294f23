#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { participants: Vec<String> },
    Rejected { reason: DecideError },
}
