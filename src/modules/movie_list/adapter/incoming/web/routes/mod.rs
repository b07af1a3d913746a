mod create_list;
mod delete_list;
mod dto;
mod get_list;
mod list_items;
mod my_lists;
mod rename_list;

pub use create_list::create_list_handler;
pub use delete_list::delete_list_handler;
pub use dto::{AddListItemRequestDto, ListNameRequestDto, MovieListDto, MovieListItemDto};
pub use get_list::get_list_handler;
pub use list_items::{
    add_list_item_by_path_handler, add_list_item_handler, remove_list_item_handler,
};
pub use my_lists::my_lists_handler;
pub use rename_list::rename_list_handler;

pub use create_list::__path_create_list_handler;
pub use delete_list::__path_delete_list_handler;
pub use get_list::__path_get_list_handler;
pub use list_items::{
    __path_add_list_item_by_path_handler, __path_add_list_item_handler,
    __path_remove_list_item_handler,
};
pub use my_lists::__path_my_lists_handler;
pub use rename_list::__path_rename_list_handler;
