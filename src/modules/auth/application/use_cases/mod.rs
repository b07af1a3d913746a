pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
