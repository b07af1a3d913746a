pub mod add_list_item;
pub mod create_list;
pub mod delete_list;
pub mod get_list;
pub mod list_user_lists;
pub mod remove_list_item;
pub mod rename_list;

pub use add_list_item::{AddListItemError, AddListItemUseCase};
pub use create_list::{CreateListError, CreateListUseCase};
pub use delete_list::{DeleteListError, DeleteListUseCase};
pub use get_list::{GetListError, GetListUseCase};
pub use list_user_lists::{ListUserListsError, ListUserListsUseCase};
pub use remove_list_item::{RemoveListItemError, RemoveListItemUseCase};
pub use rename_list::{RenameListError, RenameListUseCase};
