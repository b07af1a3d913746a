use std::sync::Arc;

use crate::modules::movie_list::application::ports::incoming::use_cases::{
    AddListItemUseCase, CreateListUseCase, DeleteListUseCase, GetListUseCase,
    ListUserListsUseCase, RemoveListItemUseCase, RenameListUseCase,
};

#[derive(Clone)]
pub struct MovieListUseCases {
    pub create: Arc<dyn CreateListUseCase + Send + Sync>,
    pub get: Arc<dyn GetListUseCase + Send + Sync>,
    pub list_for_user: Arc<dyn ListUserListsUseCase + Send + Sync>,
    pub rename: Arc<dyn RenameListUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteListUseCase + Send + Sync>,
    pub add_item: Arc<dyn AddListItemUseCase + Send + Sync>,
    pub remove_item: Arc<dyn RemoveListItemUseCase + Send + Sync>,
}
