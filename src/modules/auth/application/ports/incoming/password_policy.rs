#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least 8 characters")]
    TooShort,

    #[error("Password must be at most 128 characters")]
    TooLong,

    #[error("Password cannot be only whitespace")]
    Blank,
}

pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError>;
}
