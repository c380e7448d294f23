#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub activity_name: String,
    pub email: String,
}
