#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregister {
    pub activity_name: String,
    pub email: String,
}
