use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::domain::entities::{FollowView, PublicUser};
use crate::modules::social::application::ports::outgoing::{SocialQuery, SocialQueryError};

#[derive(Debug, FromQueryResult)]
struct FollowRow {
    id: Uuid,
    username: String,
    name: String,
    followed_at: DateTimeWithTimeZone,
}

impl From<FollowRow> for FollowView {
    fn from(row: FollowRow) -> Self {
        FollowView {
            user: PublicUser {
                id: UserId::from(row.id),
                username: row.username,
                name: row.name,
            },
            followed_at: row.followed_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    user_id: Uuid,
}

#[derive(Clone)]
pub struct SocialQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SocialQueryError {
        SocialQueryError::DatabaseError(e.to_string())
    }

    /// `other` is the column naming the user on the far end of the edge,
    /// `own` the column matched against the subject.
    async fn edges(
        &self,
        user: UserId,
        own: &str,
        other: &str,
    ) -> Result<Vec<FollowView>, SocialQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT u.id, u.username, u.name, f.created_at AS followed_at
                  FROM follows f
                  JOIN users u ON u.id = f.{other}
                 WHERE f.{own} = $1
                 ORDER BY f.created_at DESC
                "#
            ),
            vec![user.value().into()],
        );

        let rows = FollowRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(FollowView::from).collect())
    }

    async fn edge_ids(
        &self,
        user: UserId,
        own: &str,
        other: &str,
    ) -> Result<HashSet<UserId>, SocialQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("SELECT {other} AS user_id FROM follows WHERE {own} = $1"),
            vec![user.value().into()],
        );

        let rows = IdRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(|r| UserId::from(r.user_id)).collect())
    }
}

#[async_trait]
impl SocialQuery for SocialQueryPostgres {
    async fn followers(&self, user: UserId) -> Result<Vec<FollowView>, SocialQueryError> {
        self.edges(user, "to_user_id", "from_user_id").await
    }

    async fn following(&self, user: UserId) -> Result<Vec<FollowView>, SocialQueryError> {
        self.edges(user, "from_user_id", "to_user_id").await
    }

    async fn follower_ids(&self, user: UserId) -> Result<HashSet<UserId>, SocialQueryError> {
        self.edge_ids(user, "to_user_id", "from_user_id").await
    }

    async fn following_ids(&self, user: UserId) -> Result<HashSet<UserId>, SocialQueryError> {
        self.edge_ids(user, "from_user_id", "to_user_id").await
    }

    async fn users_by_ids(&self, ids: Vec<UserId>) -> Result<Vec<PublicUser>, SocialQueryError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.into_iter().map(|id| id.value())))
            .order_by_asc(users::Column::Username)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models
            .into_iter()
            .map(|m| PublicUser {
                id: UserId::from(m.id),
                username: m.username,
                name: m.name,
            })
            .collect())
    }
}
