pub mod movie_list_items;
pub mod movie_lists;
