use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::membership::application::domain::entities::{MembershipEntry, MembershipKind};
use crate::modules::membership::application::ports::outgoing::{
    MembershipRepository, MembershipRepositoryError,
};
use crate::shared::movie_id::MovieId;

use super::sea_orm_entity::{favourites, watchlist_items};

#[derive(Clone)]
pub struct MembershipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================
    // Table names come from `MembershipKind::table`, never from input.

    fn insert_stmt(kind: MembershipKind, user: Uuid, movie_id: &MovieId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                INSERT INTO {} (id, user_id, movie_id, created_at)
                VALUES ($1, $2, $3, now())
                ON CONFLICT (user_id, movie_id) DO NOTHING
                "#,
                kind.table()
            ),
            vec![Uuid::new_v4().into(), user.into(), movie_id.as_str().into()],
        )
    }

    fn exists_stmt(kind: MembershipKind, user: Uuid, movie_id: &MovieId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "SELECT EXISTS (SELECT 1 FROM {} WHERE user_id = $1 AND movie_id = $2) AS present",
                kind.table()
            ),
            vec![user.into(), movie_id.as_str().into()],
        )
    }

    fn delete_stmt(kind: MembershipKind, user: Uuid, movie_id: &MovieId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "DELETE FROM {} WHERE user_id = $1 AND movie_id = $2",
                kind.table()
            ),
            vec![user.into(), movie_id.as_str().into()],
        )
    }

    fn map_db_err(e: DbErr) -> MembershipRepositoryError {
        error!("Membership store error: {}", e);
        MembershipRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryPostgres {
    async fn add(
        &self,
        kind: MembershipKind,
        user: UserId,
        movie_id: &MovieId,
    ) -> Result<bool, MembershipRepositoryError> {
        let result = self
            .db
            .execute(Self::insert_stmt(kind, user.value(), movie_id))
            .await
            .map_err(Self::map_db_err)?;

        Ok(result.rows_affected() == 1)
    }

    async fn exists(
        &self,
        kind: MembershipKind,
        user: UserId,
        movie_id: &MovieId,
    ) -> Result<bool, MembershipRepositoryError> {
        let row = self
            .db
            .query_one(Self::exists_stmt(kind, user.value(), movie_id))
            .await
            .map_err(Self::map_db_err)?;

        let present = row
            .map(|r| r.try_get::<bool>("", "present"))
            .transpose()
            .map_err(Self::map_db_err)?;

        Ok(present.unwrap_or(false))
    }

    async fn remove(
        &self,
        kind: MembershipKind,
        user: UserId,
        movie_id: &MovieId,
    ) -> Result<(), MembershipRepositoryError> {
        self.db
            .execute(Self::delete_stmt(kind, user.value(), movie_id))
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn list(
        &self,
        kind: MembershipKind,
        user: UserId,
    ) -> Result<Vec<MembershipEntry>, MembershipRepositoryError> {
        let entries = match kind {
            MembershipKind::Favourite => favourites::Entity::find()
                .filter(favourites::Column::UserId.eq(user.value()))
                .order_by_desc(favourites::Column::CreatedAt)
                .all(&*self.db)
                .await
                .map_err(Self::map_db_err)?
                .into_iter()
                .map(|m| MembershipEntry {
                    id: m.id,
                    movie_id: m.movie_id,
                    created_at: m.created_at.with_timezone(&Utc),
                })
                .collect(),

            MembershipKind::Watchlist => watchlist_items::Entity::find()
                .filter(watchlist_items::Column::UserId.eq(user.value()))
                .order_by_desc(watchlist_items::Column::CreatedAt)
                .all(&*self.db)
                .await
                .map_err(Self::map_db_err)?
                .into_iter()
                .map(|m| MembershipEntry {
                    id: m.id,
                    movie_id: m.movie_id,
                    created_at: m.created_at.with_timezone(&Utc),
                })
                .collect(),
        };

        Ok(entries)
    }
}
