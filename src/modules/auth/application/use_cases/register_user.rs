use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::{
    AccountView, AuthSession, UserId, Username, UsernameError,
};
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository,
    UserRepositoryError,
};

pub const NAME_MAX_LEN: usize = 150;

// ========================= Register Request =========================
/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    username: Username,
    email: String,
    name: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("{0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Name must be at most 150 characters")]
    NameTooLong,
}

impl RegisterUserRequest {
    pub fn new(
        username: String,
        email: String,
        name: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = Username::parse(&username)?;

        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        let name = name.trim();
        if name.chars().count() > NAME_MAX_LEN {
            return Err(RegisterRequestError::NameTooLong);
        }

        Ok(Self {
            username,
            email: email.to_lowercase(),
            name: name.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("{0}")]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterUserRequest)
        -> Result<AuthSession, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<AuthSession, RegisterUserError> {
        self.password_policy.validate(&request.password)?;

        let existing = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::UsernameAlreadyExists);
        }

        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let expires_at = Utc::now() + self.token_provider.refresh_token_lifetime();

        // The pre-checks above race with concurrent registrations; the unique
        // indexes make the insert the final word.
        let created = self
            .repository
            .create_user(CreateUserData {
                username: request.username.into_inner(),
                email: request.email,
                name: request.name,
                password_hash,
                token_expiration: expires_at,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameAlreadyExists => {
                    RegisterUserError::UsernameAlreadyExists
                }
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => {
                    warn!("User insert failed: {}", other);
                    RegisterUserError::RepositoryError(other.to_string())
                }
            })?;

        let access_token = self
            .token_provider
            .generate_access_token(created.id)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(created.id)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        debug!(user_id = %created.id, "Registered user");

        Ok(AuthSession {
            user: AccountView {
                id: UserId::from(created.id),
                username: created.username,
                email: created.email,
                name: created.name,
                token_expiration: created.token_expiration,
            },
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use uuid::Uuid;

    use crate::auth::application::ports::outgoing::{
        HashError, UserQueryError, UserQueryResult, UserResult,
    };
    use crate::auth::application::services::password::BasicPasswordPolicy;
    use crate::tests::support::auth_helper::test_token_provider;

    /* --------------------------------------------------
     * Mocks
     * -------------------------------------------------- */

    #[derive(Default)]
    struct MockUserQuery {
        by_username: Option<UserQueryResult>,
        by_email: Option<UserQueryResult>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!("not used in register tests")
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(self.by_username.clone())
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            Ok(self.by_email.clone())
        }
    }

    mock! {
        pub UserRepositoryMock {}
        #[async_trait]
        impl UserRepository for UserRepositoryMock {
            async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
            async fn set_token_expiration(
                &self,
                user_id: Uuid,
                expires_at: DateTime<Utc>,
            ) -> Result<(), UserRepositoryError>;
        }
    }

    struct PrefixHasher;

    #[async_trait]
    impl PasswordHasher for PrefixHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    fn existing_user() -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: "hashed:whatever".to_string(),
            token_expiration: None,
            created_at: Utc::now(),
        }
    }

    fn request() -> RegisterUserRequest {
        RegisterUserRequest::new(
            "alice".to_string(),
            "Alice@Example.com".to_string(),
            "Alice".to_string(),
            "popcorn-time".to_string(),
        )
        .unwrap()
    }

    fn use_case(
        query: MockUserQuery,
        repo: MockUserRepositoryMock,
    ) -> RegisterUserUseCase<MockUserQuery, MockUserRepositoryMock> {
        RegisterUserUseCase::new(
            query,
            repo,
            Arc::new(PrefixHasher),
            Arc::new(BasicPasswordPolicy),
            test_token_provider(),
        )
    }

    /* --------------------------------------------------
     * Request validation
     * -------------------------------------------------- */

    #[test]
    fn request_normalizes_email() {
        assert_eq!(request().email(), "alice@example.com");
    }

    #[test]
    fn request_rejects_bad_email() {
        let err = RegisterUserRequest::new(
            "alice".to_string(),
            "not-an-email".to_string(),
            String::new(),
            "popcorn-time".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, RegisterRequestError::InvalidEmailFormat);
    }

    #[test]
    fn request_rejects_bad_username() {
        let err = RegisterUserRequest::new(
            "a b".to_string(),
            "a@example.com".to_string(),
            String::new(),
            "popcorn-time".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, RegisterRequestError::InvalidUsername(_)));
    }

    /* --------------------------------------------------
     * Execute
     * -------------------------------------------------- */

    #[tokio::test]
    async fn registers_and_issues_tokens() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user()
            .withf(|data| {
                data.username == "alice"
                    && data.email == "alice@example.com"
                    && data.password_hash == "hashed:popcorn-time"
                    && data.token_expiration > Utc::now() + chrono::Duration::days(6)
            })
            .times(1)
            .returning(|data| {
                Ok(UserResult {
                    id: Uuid::new_v4(),
                    username: data.username,
                    email: data.email,
                    name: data.name,
                    token_expiration: Some(data.token_expiration),
                })
            });

        let session = use_case(MockUserQuery::default(), repo)
            .execute(request())
            .await
            .unwrap();

        assert_eq!(session.user.username, "alice");
        assert!(session.user.token_expiration.is_some());
        assert!(!session.access_token.is_empty());
        assert!(!session.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn rejects_weak_password_before_touching_store() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user().never();

        let weak = RegisterUserRequest::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            String::new(),
            "short".to_string(),
        )
        .unwrap();

        let err = use_case(MockUserQuery::default(), repo)
            .execute(weak)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RegisterUserError::WeakPassword(PasswordPolicyError::TooShort)
        ));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user().never();

        let query = MockUserQuery {
            by_username: Some(existing_user()),
            by_email: None,
        };

        let err = use_case(query, repo).execute(request()).await.unwrap_err();
        assert!(matches!(err, RegisterUserError::UsernameAlreadyExists));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user().never();

        let query = MockUserQuery {
            by_username: None,
            by_email: Some(existing_user()),
        };

        let err = use_case(query, repo).execute(request()).await.unwrap_err();
        assert!(matches!(err, RegisterUserError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn insert_race_maps_to_conflict() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user()
            .returning(|_| Err(UserRepositoryError::EmailAlreadyExists));

        let err = use_case(MockUserQuery::default(), repo)
            .execute(request())
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterUserError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn database_error_is_repository_error() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_create_user()
            .returning(|_| Err(UserRepositoryError::DatabaseError("db down".to_string())));

        let err = use_case(MockUserQuery::default(), repo)
            .execute(request())
            .await
            .unwrap_err();

        assert!(matches!(err, RegisterUserError::RepositoryError(msg) if msg.contains("db down")));
    }
}
