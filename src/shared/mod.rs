pub mod api;
pub mod db_errors;
pub mod movie_id;
pub mod pagination;
pub mod patch_field;
