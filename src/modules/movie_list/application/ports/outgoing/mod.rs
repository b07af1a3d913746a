pub mod movie_list_query;
pub mod movie_list_repository;

pub use movie_list_query::{MovieListQuery, MovieListQueryError};
pub use movie_list_repository::{MovieListRepository, MovieListRepositoryError};
