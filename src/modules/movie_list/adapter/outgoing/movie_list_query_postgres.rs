use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::movie_list::application::domain::entities::{MovieList, MovieListItem};
use crate::modules::movie_list::application::ports::outgoing::{
    MovieListQuery, MovieListQueryError,
};

use super::sea_orm_entity::{movie_list_items, movie_lists};

pub(super) fn to_item(model: movie_list_items::Model) -> MovieListItem {
    MovieListItem {
        id: model.id,
        movie_id: model.movie_id,
        added_at: model.added_at.with_timezone(&Utc),
    }
}

pub(super) fn to_movie_list(model: movie_lists::Model, items: Vec<MovieListItem>) -> MovieList {
    MovieList {
        id: model.id,
        user_id: UserId::from(model.user_id),
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        items,
    }
}

#[derive(Clone)]
pub struct MovieListQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MovieListQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> MovieListQueryError {
        MovieListQueryError::DatabaseError(e.to_string())
    }

    /// Items of all given lists in one `IN (...)` query.
    async fn items_of(
        &self,
        list_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<MovieListItem>>, MovieListQueryError> {
        let rows = movie_list_items::Entity::find()
            .filter(movie_list_items::Column::ListId.is_in(list_ids))
            .order_by_asc(movie_list_items::Column::AddedAt)
            .order_by_asc(movie_list_items::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut grouped: HashMap<Uuid, Vec<MovieListItem>> = HashMap::new();
        for row in rows {
            grouped.entry(row.list_id).or_default().push(to_item(row));
        }
        Ok(grouped)
    }
}

#[async_trait]
impl MovieListQuery for MovieListQueryPostgres {
    async fn find_by_id(&self, list_id: Uuid) -> Result<Option<MovieList>, MovieListQueryError> {
        let Some(list) = movie_lists::Entity::find_by_id(list_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
        else {
            return Ok(None);
        };

        let items = self
            .items_of(vec![list.id])
            .await?
            .remove(&list.id)
            .unwrap_or_default();

        Ok(Some(to_movie_list(list, items)))
    }

    async fn lists_of(&self, owner: UserId) -> Result<Vec<MovieList>, MovieListQueryError> {
        let lists = movie_lists::Entity::find()
            .filter(movie_lists::Column::UserId.eq(owner.value()))
            .order_by_desc(movie_lists::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if lists.is_empty() {
            return Ok(vec![]);
        }

        let mut items = self.items_of(lists.iter().map(|l| l.id).collect()).await?;

        Ok(lists
            .into_iter()
            .map(|list| {
                let list_items = items.remove(&list.id).unwrap_or_default();
                to_movie_list(list, list_items)
            })
            .collect())
    }
}
