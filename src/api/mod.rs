pub mod openapi;
pub mod schemas;
