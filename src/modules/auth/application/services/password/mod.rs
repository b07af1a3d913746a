pub mod basic_password_policy;

pub use basic_password_policy::BasicPasswordPolicy;
