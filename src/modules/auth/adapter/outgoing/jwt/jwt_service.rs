use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN, REFRESH_TOKEN,
};

use super::jwt_config::JwtConfig;

/// Clock skew tolerated on `exp` and `nbf`, in seconds.
const LEEWAY_SECS: u64 = 30;

/// HS256 issuer and verifier for the access/refresh token pair.
#[derive(Clone)]
pub struct JwtTokenService {
    issuer: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.issuer)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret_key.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;
        validation.validate_nbf = true;
        validation.set_issuer(&[config.issuer.as_str()]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl: Duration::seconds(config.access_token_expiry),
            refresh_ttl: Duration::seconds(config.refresh_token_expiry),
            issuer: config.issuer,
            validation,
        }
    }

    fn sign(&self, subject: Uuid, kind: &str, ttl: Duration) -> Result<String, TokenError> {
        let issued_at = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject,
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at + ttl.num_seconds(),
            iss: self.issuer.clone(),
            token_type: kind.to_owned(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

/// Collapses jsonwebtoken failures onto the port's error set.
fn classify(err: JwtError) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => {
            debug!("Rejected expired token");
            TokenError::TokenExpired
        }
        ErrorKind::ImmatureSignature => {
            warn!("Rejected token used before nbf");
            TokenError::TokenNotYetValid
        }
        ErrorKind::InvalidSignature => {
            error!("Rejected token with a bad signature");
            TokenError::InvalidSignature
        }
        ErrorKind::InvalidIssuer => {
            warn!("Rejected token from a foreign issuer");
            TokenError::InvalidSignature
        }
        other => {
            warn!(kind = ?other, "Rejected malformed token");
            TokenError::MalformedToken
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.sign(user_id, ACCESS_TOKEN, self.access_ttl)
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.sign(user_id, REFRESH_TOKEN, self.refresh_ttl)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)
    }

    fn refresh_token_lifetime(&self) -> Duration {
        self.refresh_ttl
    }
}
