use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::ports::outgoing::review_query::{
    RatingTotals, ReviewListFilter, ReviewQuery, ReviewQueryError, ReviewView,
};
use crate::shared::movie_id::MovieId;
use crate::shared::pagination::{PageRequest, PageResult};

/// Review joined with its author.
#[derive(Debug, FromQueryResult)]
struct ReviewViewRow {
    id: Uuid,
    user_id: Uuid,
    user_username: String,
    movie_id: String,
    rating: f64,
    text: String,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl From<ReviewViewRow> for ReviewView {
    fn from(row: ReviewViewRow) -> Self {
        ReviewView {
            id: row.id,
            user_id: UserId::from(row.user_id),
            user_username: row.user_username,
            movie_id: row.movie_id,
            rating: row.rating,
            text: row.text,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }
}

const VIEW_SELECT: &str = r#"
    SELECT r.id, r.user_id, u.username AS user_username, r.movie_id,
           r.rating, r.text, r.created_at, r.updated_at
      FROM reviews r
      JOIN users u ON u.id = r.user_id
"#;

// NULL parameters disable the corresponding filter.
const FILTER_CLAUSE: &str = r#"
     WHERE ($1::varchar IS NULL OR r.movie_id = $1)
       AND ($2::uuid IS NULL OR r.user_id = $2)
"#;

#[derive(Clone)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ReviewQueryError {
        ReviewQueryError::DatabaseError(e.to_string())
    }

    /// Every review counts; unrated ones are stored as 0 and pull the average down.
    fn totals_stmt(movie_id: &MovieId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT COUNT(*) AS review_count,
                   COALESCE(SUM(rating), 0)::float8 AS rating_sum
              FROM reviews
             WHERE movie_id = $1
            "#,
            vec![movie_id.as_str().into()],
        )
    }

    fn filter_values(filter: &ReviewListFilter) -> Vec<sea_orm::Value> {
        vec![
            filter
                .movie_id
                .as_ref()
                .map(|m| m.as_str().to_string())
                .into(),
            filter.user_id.map(|u| u.value()).into(),
        ]
    }
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<ReviewView>, ReviewQueryError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("{VIEW_SELECT} WHERE r.id = $1"),
            vec![review_id.into()],
        );

        let row = ReviewViewRow::find_by_statement(stmt)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(row.map(ReviewView::from))
    }

    async fn list_reviews(
        &self,
        filter: ReviewListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ReviewView>, ReviewQueryError> {
        let count_stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("SELECT COUNT(*) AS total FROM reviews r {FILTER_CLAUSE}"),
            Self::filter_values(&filter),
        );

        let total: i64 = self
            .db
            .query_one(count_stmt)
            .await
            .map_err(Self::map_db_err)?
            .map(|row| row.try_get::<i64>("", "total"))
            .transpose()
            .map_err(Self::map_db_err)?
            .unwrap_or(0);

        if total == 0 {
            return Ok(PageResult::empty(page));
        }

        let mut values = Self::filter_values(&filter);
        values.push(i64::try_from(page.per_page).unwrap_or(i64::MAX).into());
        values.push(i64::try_from(page.offset()).unwrap_or(i64::MAX).into());

        let page_stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "{VIEW_SELECT} {FILTER_CLAUSE} ORDER BY r.created_at DESC, r.id DESC LIMIT $3 OFFSET $4"
            ),
            values,
        );

        let rows = ReviewViewRow::find_by_statement(page_stmt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(PageResult {
            items: rows.into_iter().map(ReviewView::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total: total as u64,
        })
    }

    async fn rating_totals(&self, movie_id: &MovieId) -> Result<RatingTotals, ReviewQueryError> {
        let stmt = Self::totals_stmt(movie_id);

        let Some(row) = self.db.query_one(stmt).await.map_err(Self::map_db_err)? else {
            return Ok(RatingTotals::default());
        };

        let count: i64 = row.try_get("", "review_count").map_err(Self::map_db_err)?;
        let sum: f64 = row.try_get("", "rating_sum").map_err(Self::map_db_err)?;

        Ok(RatingTotals {
            count: count.max(0) as u64,
            sum,
        })
    }
}
