use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryResult, QuerySelect, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::{error, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::UNRATED;
use crate::modules::review::application::ports::outgoing::review_repository::{
    PatchReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult, SubmitReviewData,
    UpsertOutcome,
};
use crate::shared::db_errors::is_unique_violation;

use super::sea_orm_entity::reviews::{
    ActiveModel as ReviewActiveModel, Entity as ReviewEntity, Model as ReviewModel,
};

#[derive(Clone)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Inserts only when the (user_id, movie_id) pair is free.
    /// Returns no row when the caller already reviewed the movie.
    fn insert_if_absent_stmt(review_id: Uuid, data: &SubmitReviewData) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO reviews (id, user_id, movie_id, rating, text, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            ON CONFLICT (user_id, movie_id) DO NOTHING
            RETURNING *
            "#,
            vec![
                review_id.into(),
                data.user_id.value().into(),
                data.movie_id.as_str().into(),
                data.rating.map(|r| r.value()).unwrap_or(UNRATED).into(),
                data.text.clone().unwrap_or_default().into(),
            ],
        )
    }

    /// NULL parameters keep the stored column.
    fn overwrite_stmt(data: &SubmitReviewData) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE reviews
               SET rating = COALESCE($3, rating),
                   text = COALESCE($4, text),
                   updated_at = now()
             WHERE user_id = $1
               AND movie_id = $2
            RETURNING *
            "#,
            vec![
                data.user_id.value().into(),
                data.movie_id.as_str().into(),
                data.rating.map(|r| r.value()).into(),
                data.text.clone().into(),
            ],
        )
    }

    fn owned_delete_stmt(owner: Uuid, review_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "DELETE FROM reviews WHERE id = $1 AND user_id = $2",
            vec![review_id.into(), owner.into()],
        )
    }

    fn exists_stmt(review_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE id = $1) AS review_exists",
            vec![review_id.into()],
        )
    }

    // =====================================================
    // Mapping
    // =====================================================

    fn map_to_result(model: ReviewModel) -> ReviewResult {
        ReviewResult {
            id: model.id,
            user_id: UserId::from(model.user_id),
            movie_id: model.movie_id,
            rating: model.rating,
            text: model.text,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }

    fn row_to_result(row: &QueryResult) -> Result<ReviewResult, DbErr> {
        ReviewModel::from_query_result(row, "").map(Self::map_to_result)
    }

    fn map_db_err(e: DbErr) -> ReviewRepositoryError {
        error!("Review store error: {}", e);
        ReviewRepositoryError::DatabaseError(e.to_string())
    }

    // =====================================================
    // Upsert
    // =====================================================

    async fn upsert_with<C>(conn: &C, data: &SubmitReviewData) -> Result<UpsertOutcome, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(row) = conn
            .query_one(Self::insert_if_absent_stmt(Uuid::new_v4(), data))
            .await?
        {
            return Ok(UpsertOutcome {
                review: Self::row_to_result(&row)?,
                created: true,
            });
        }

        let row = conn
            .query_one(Self::overwrite_stmt(data))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("review vanished during upsert".to_string()))?;

        Ok(UpsertOutcome {
            review: Self::row_to_result(&row)?,
            created: false,
        })
    }

    async fn upsert_once(&self, data: &SubmitReviewData) -> Result<UpsertOutcome, DbErr> {
        let txn = self.db.begin().await?;

        match Self::upsert_with(&txn, data).await {
            Ok(outcome) => {
                txn.commit().await?;
                Ok(outcome)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    // =====================================================
    // Patch
    // =====================================================

    async fn patch_with<C>(
        conn: &C,
        owner: Uuid,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError>
    where
        C: ConnectionTrait,
    {
        let current = ReviewEntity::find_by_id(review_id)
            .lock_exclusive()
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ReviewRepositoryError::NotFound)?;

        if current.user_id != owner {
            return Err(ReviewRepositoryError::NotOwner);
        }

        if data.is_empty() {
            return Ok(Self::map_to_result(current));
        }

        let mut active: ReviewActiveModel = current.into();
        if let Some(rating) = data.rating {
            active.rating = Set(rating.value());
        }
        if let Some(text) = data.text.resolve(String::new()) {
            active.text = Set(text);
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(conn).await.map_err(Self::map_db_err)?;
        Ok(Self::map_to_result(updated))
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn upsert_review(
        &self,
        data: SubmitReviewData,
    ) -> Result<UpsertOutcome, ReviewRepositoryError> {
        match self.upsert_once(&data).await {
            Ok(outcome) => Ok(outcome),
            Err(e) if is_unique_violation(&e) => {
                warn!(
                    user_id = %data.user_id,
                    movie_id = %data.movie_id,
                    "Unique violation while upserting review, retrying once"
                );
                self.upsert_once(&data).await.map_err(Self::map_db_err)
            }
            Err(e) => Err(Self::map_db_err(e)),
        }
    }

    async fn patch_review(
        &self,
        owner: UserId,
        review_id: Uuid,
        data: PatchReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::patch_with(&txn, owner.value(), review_id, data).await {
            Ok(result) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(result)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_review(
        &self,
        owner: UserId,
        review_id: Uuid,
    ) -> Result<(), ReviewRepositoryError> {
        let result = self
            .db
            .execute(Self::owned_delete_stmt(owner.value(), review_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // 0 affected => missing, or someone else's review
        let row = self
            .db
            .query_one(Self::exists_stmt(review_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                ReviewRepositoryError::DatabaseError("Existence probe returned no rows".to_string())
            })?;

        let exists: bool = row
            .try_get("", "review_exists")
            .map_err(Self::map_db_err)?;
        if exists {
            Err(ReviewRepositoryError::NotOwner)
        } else {
            Err(ReviewRepositoryError::NotFound)
        }
    }
}
