pub mod movie_list_query_postgres;
pub mod movie_list_repository_postgres;
pub mod sea_orm_entity;

pub use movie_list_query_postgres::MovieListQueryPostgres;
pub use movie_list_repository_postgres::MovieListRepositoryPostgres;
