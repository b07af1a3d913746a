use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.trim().is_empty() {
            return Err(PasswordPolicyError::Blank);
        }

        let len = password.chars().count();

        if len < PASSWORD_MIN_LEN {
            return Err(PasswordPolicyError::TooShort);
        }

        if len > PASSWORD_MAX_LEN {
            return Err(PasswordPolicyError::TooLong);
        }

        Ok(())
    }
}
