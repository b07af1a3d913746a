mod auth;

pub use auth::{resolve_owner_id_or_response, AuthenticatedUser};
