use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::{
    ListName, MovieList, MovieListItem,
};
use crate::modules::movie_list::application::ports::outgoing::{
    MovieListRepository, MovieListRepositoryError,
};
use crate::shared::db_errors::is_unique_violation;
use crate::shared::movie_id::MovieId;

use super::movie_list_query_postgres::{to_item, to_movie_list};
use super::sea_orm_entity::{movie_list_items, movie_lists};

type RepoResult<T> = Result<T, MovieListRepositoryError>;

#[derive(Clone)]
pub struct MovieListRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieListRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MovieListRepositoryError {
        error!("Movie list store error: {}", e);
        MovieListRepositoryError::DatabaseError(e.to_string())
    }

    fn insert_item_stmt(list_id: Uuid, movie_id: &MovieId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO movie_list_items (id, list_id, movie_id, added_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (list_id, movie_id) DO NOTHING
            RETURNING id, list_id, movie_id, added_at
            "#,
            vec![Uuid::new_v4().into(), list_id.into(), movie_id.as_str().into()],
        )
    }

    async fn finish<T>(txn: DatabaseTransaction, result: RepoResult<T>) -> RepoResult<T> {
        match result {
            Ok(value) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(value)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    // =====================================================
    // Steps run inside the list-row lock
    // =====================================================

    /// `SELECT ... FOR UPDATE` on the list, then the ownership check.
    async fn lock_owned<C>(conn: &C, owner: Uuid, list_id: Uuid) -> RepoResult<movie_lists::Model>
    where
        C: ConnectionTrait,
    {
        let list = movie_lists::Entity::find_by_id(list_id)
            .lock_exclusive()
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(MovieListRepositoryError::ListNotFound)?;

        if list.user_id != owner {
            return Err(MovieListRepositoryError::NotOwner);
        }
        Ok(list)
    }

    async fn load_items<C>(conn: &C, list_id: Uuid) -> RepoResult<Vec<MovieListItem>>
    where
        C: ConnectionTrait,
    {
        let rows = movie_list_items::Entity::find()
            .filter(movie_list_items::Column::ListId.eq(list_id))
            .order_by_asc(movie_list_items::Column::AddedAt)
            .all(conn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(to_item).collect())
    }

    async fn rename_with<C>(
        conn: &C,
        owner: Uuid,
        list_id: Uuid,
        name: &ListName,
    ) -> RepoResult<MovieList>
    where
        C: ConnectionTrait,
    {
        let current = Self::lock_owned(conn, owner, list_id).await?;

        let list = if current.name == name.as_str() {
            current
        } else {
            let mut active: movie_lists::ActiveModel = current.into();
            active.name = Set(name.as_str().to_string());
            active.update(conn).await.map_err(|e| {
                if is_unique_violation(&e) {
                    MovieListRepositoryError::NameTaken
                } else {
                    Self::map_db_err(e)
                }
            })?
        };

        let items = Self::load_items(conn, list.id).await?;
        Ok(to_movie_list(list, items))
    }

    async fn delete_with<C>(conn: &C, owner: Uuid, list_id: Uuid) -> RepoResult<()>
    where
        C: ConnectionTrait,
    {
        Self::lock_owned(conn, owner, list_id).await?;

        // items go with the list via ON DELETE CASCADE
        movie_lists::Entity::delete_by_id(list_id)
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;
        Ok(())
    }

    async fn add_item_with<C>(
        conn: &C,
        owner: Uuid,
        list_id: Uuid,
        movie_id: &MovieId,
    ) -> RepoResult<MovieListItem>
    where
        C: ConnectionTrait,
    {
        Self::lock_owned(conn, owner, list_id).await?;

        let row = conn
            .query_one(Self::insert_item_stmt(list_id, movie_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(MovieListRepositoryError::AlreadyInList)?;

        let model =
            movie_list_items::Model::from_query_result(&row, "").map_err(Self::map_db_err)?;
        Ok(to_item(model))
    }

    async fn remove_item_with<C>(
        conn: &C,
        owner: Uuid,
        list_id: Uuid,
        movie_id: &MovieId,
    ) -> RepoResult<()>
    where
        C: ConnectionTrait,
    {
        Self::lock_owned(conn, owner, list_id).await?;

        let result = movie_list_items::Entity::delete_many()
            .filter(movie_list_items::Column::ListId.eq(list_id))
            .filter(movie_list_items::Column::MovieId.eq(movie_id.as_str()))
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MovieListRepositoryError::ItemNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MovieListRepository for MovieListRepositoryPostgres {
    async fn create_list(&self, owner: UserId, name: &ListName) -> RepoResult<MovieList> {
        let active = movie_lists::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            name: Set(name.as_str().to_string()),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        };

        let model = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                MovieListRepositoryError::NameTaken
            } else {
                Self::map_db_err(e)
            }
        })?;

        Ok(to_movie_list(model, vec![]))
    }

    async fn rename_list(
        &self,
        owner: UserId,
        list_id: Uuid,
        name: &ListName,
    ) -> RepoResult<MovieList> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;
        let result = Self::rename_with(&txn, owner.value(), list_id, name).await;
        Self::finish(txn, result).await
    }

    async fn delete_list(&self, owner: UserId, list_id: Uuid) -> RepoResult<()> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;
        let result = Self::delete_with(&txn, owner.value(), list_id).await;
        Self::finish(txn, result).await
    }

    async fn add_item(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: &MovieId,
    ) -> RepoResult<MovieListItem> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;
        let result = Self::add_item_with(&txn, owner.value(), list_id, movie_id).await;
        Self::finish(txn, result).await
    }

    async fn remove_item(&self, owner: UserId, list_id: Uuid, movie_id: &MovieId) -> RepoResult<()> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;
        let result = Self::remove_item_with(&txn, owner.value(), list_id, movie_id).await;
        Self::finish(txn, result).await
    }
}
