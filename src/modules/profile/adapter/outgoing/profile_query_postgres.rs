use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::entities::{ProfileCounts, PublicProfile};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

#[derive(Debug, FromQueryResult)]
struct ProfileRow {
    id: Uuid,
    username: String,
    name: String,
    reviews: i64,
    lists: i64,
    followers: i64,
    following: i64,
}

impl From<ProfileRow> for PublicProfile {
    fn from(row: ProfileRow) -> Self {
        let count = |n: i64| n.max(0) as u64;
        PublicProfile {
            id: UserId::from(row.id),
            username: row.username,
            name: row.name,
            counts: ProfileCounts {
                reviews: count(row.reviews),
                lists: count(row.lists),
                followers: count(row.followers),
                following: count(row.following),
            },
        }
    }
}

const PROFILE_SELECT: &str = r#"
    SELECT u.id, u.username, u.name,
           (SELECT COUNT(*) FROM reviews r WHERE r.user_id = u.id) AS reviews,
           (SELECT COUNT(*) FROM movie_lists l WHERE l.user_id = u.id) AS lists,
           (SELECT COUNT(*) FROM follows f WHERE f.to_user_id = u.id) AS followers,
           (SELECT COUNT(*) FROM follows f WHERE f.from_user_id = u.id) AS following
      FROM users u
     WHERE u.username = $1
"#;

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<PublicProfile>, ProfileQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            PROFILE_SELECT,
            vec![username.into()],
        );

        let row = ProfileRow::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(|e| {
                error!("Profile lookup for {} failed: {}", username, e);
                ProfileQueryError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(PublicProfile::from))
    }
}
