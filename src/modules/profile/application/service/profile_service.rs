use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PublicProfile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetPublicProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

pub struct ProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> ProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicProfileUseCase for ProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<PublicProfile, GetProfileError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(GetProfileError::NotFound);
        }

        self.query
            .find_by_username(username)
            .await
            .map_err(|e| match e {
                ProfileQueryError::DatabaseError(msg) => GetProfileError::QueryFailed(msg),
            })?
            .ok_or(GetProfileError::NotFound)
    }
}
