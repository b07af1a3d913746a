use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::shared::db_errors::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            username: model.username,
            email: model.email,
            name: model.name,
            token_expiration: model.token_expiration.map(|t| t.with_timezone(&Utc)),
        }
    }

    /// The constraint name tells which unique column was hit (`users_email_key`).
    fn map_insert_error(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            if e.to_string().to_lowercase().contains("email") {
                return UserRepositoryError::EmailAlreadyExists;
            }
            return UserRepositoryError::UsernameAlreadyExists;
        }
        error!("Failed to insert user: {}", e);
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            name: Set(user.name),
            password_hash: Set(user.password_hash),
            token_expiration: Set(Some(user.token_expiration.into())),
            created_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn set_token_expiration(
        &self,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(
                UserColumn::TokenExpiration,
                sea_orm::sea_query::Expr::value(Some(expires_at.fixed_offset())),
            )
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
