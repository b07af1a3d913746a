use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::social::application::ports::outgoing::{
    FollowRepository, FollowRepositoryError,
};
use crate::shared::db_errors::is_foreign_key_violation;

#[derive(Clone)]
pub struct FollowRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts nothing when the target is unknown or the edge exists.
    fn guarded_insert_stmt(from: Uuid, to: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO follows (id, from_user_id, to_user_id, created_at)
            SELECT $1, $2, $3, now()
             WHERE EXISTS (SELECT 1 FROM users WHERE id = $3)
            ON CONFLICT (from_user_id, to_user_id) DO NOTHING
            "#,
            vec![Uuid::new_v4().into(), from.into(), to.into()],
        )
    }

    fn user_exists_stmt(user: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT EXISTS (SELECT 1 FROM users WHERE id = $1) AS user_exists",
            vec![user.into()],
        )
    }

    fn map_db_err(e: DbErr) -> FollowRepositoryError {
        error!("Follow store error: {}", e);
        FollowRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryPostgres {
    async fn follow(&self, from: UserId, to: UserId) -> Result<bool, FollowRepositoryError> {
        let result = self
            .db
            .execute(Self::guarded_insert_stmt(from.value(), to.value()))
            .await
            .map_err(|e| {
                // target deleted between the EXISTS check and the insert
                if is_foreign_key_violation(&e) {
                    FollowRepositoryError::TargetNotFound
                } else {
                    Self::map_db_err(e)
                }
            })?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        // 0 affected => edge already there, or no such target
        let target_exists = self
            .db
            .query_one(Self::user_exists_stmt(to.value()))
            .await
            .map_err(Self::map_db_err)?
            .map(|row| row.try_get::<bool>("", "user_exists"))
            .transpose()
            .map_err(Self::map_db_err)?
            .unwrap_or(false);

        if target_exists {
            Ok(false)
        } else {
            Err(FollowRepositoryError::TargetNotFound)
        }
    }

    async fn unfollow(&self, from: UserId, to: UserId) -> Result<(), FollowRepositoryError> {
        self.db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM follows WHERE from_user_id = $1 AND to_user_id = $2",
                vec![from.value().into(), to.value().into()],
            ))
            .await
            .map_err(Self::map_db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn exists_row(v: bool) -> BTreeMap<String, Value> {
        BTreeMap::from([("user_exists".to_string(), Value::Bool(Some(v)))])
    }

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn new_edge_is_created() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();
        let repo = FollowRepositoryPostgres::new(Arc::new(db));

        assert!(repo.follow(user(), user()).await.unwrap());
    }

    #[tokio::test]
    async fn existing_edge_is_not_created_again() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .append_query_results([vec![exists_row(true)]])
            .into_connection();
        let repo = FollowRepositoryPostgres::new(Arc::new(db));

        assert!(!repo.follow(user(), user()).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_target_is_target_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .append_query_results([vec![exists_row(false)]])
            .into_connection();
        let repo = FollowRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.follow(user(), user()).await.unwrap_err(),
            FollowRepositoryError::TargetNotFound
        );
    }

    #[tokio::test]
    async fn unfollow_without_edge_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();
        let repo = FollowRepositoryPostgres::new(Arc::new(db));

        assert!(repo.unfollow(user(), user()).await.is_ok());
    }

    #[test]
    fn insert_is_guarded_and_conflict_tolerant() {
        let stmt = FollowRepositoryPostgres::guarded_insert_stmt(Uuid::new_v4(), Uuid::new_v4());
        assert!(stmt.sql.contains("WHERE EXISTS (SELECT 1 FROM users"));
        assert!(stmt.sql.contains("ON CONFLICT (from_user_id, to_user_id) DO NOTHING"));
    }

    #[tokio::test]
    async fn undecodable_target_check_is_a_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .append_query_results([vec![BTreeMap::from([(
                "unexpected".to_string(),
                Value::Bool(Some(true)),
            )])]])
            .into_connection();
        let repo = FollowRepositoryPostgres::new(Arc::new(db));

        let err = repo.follow(user(), user()).await.unwrap_err();
        assert!(matches!(err, FollowRepositoryError::DatabaseError(_)));
    }
}
