use std::env;

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET needs at least 32 characters for HS256")]
    WeakSecret,

    #[error("{0} is not a whole number of seconds")]
    NotANumber(&'static str),

    #[error("JWT_ACCESS_EXPIRY must be within 1..=86400 seconds")]
    AccessTtlOutOfRange,

    #[error("JWT_REFRESH_EXPIRY must outlive JWT_ACCESS_EXPIRY")]
    RefreshNotLongerThanAccess,
}

/// Signing settings for the HS256 token pair.
///
/// Lifetimes are in seconds. The refresh lifetime doubles as the lifetime of
/// the session row stored on the user.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, JwtConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, JwtConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(JwtConfigError::MissingSecret)?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::WeakSecret);
        }

        let seconds = |key: &'static str, fallback: i64| match lookup(key) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::NotANumber(key)),
            None => Ok(fallback),
        };

        let access_token_expiry = seconds("JWT_ACCESS_EXPIRY", 30 * 60)?;
        let refresh_token_expiry = seconds("JWT_REFRESH_EXPIRY", 7 * 24 * 60 * 60)?;

        if !(1..=MAX_ACCESS_TTL_SECS).contains(&access_token_expiry) {
            return Err(JwtConfigError::AccessTtlOutOfRange);
        }
        if refresh_token_expiry <= access_token_expiry {
            return Err(JwtConfigError::RefreshNotLongerThanAccess);
        }

        Ok(Self {
            secret_key,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "FilmNerd".to_string()),
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
