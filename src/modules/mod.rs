pub mod auth;
pub mod membership;
pub mod movie_list;
pub mod profile;
pub mod review;
pub mod social;
