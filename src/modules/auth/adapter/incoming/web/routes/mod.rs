mod dto;
mod fetch_me;
mod login_user;
mod refresh_token;
mod register_user;

pub use dto::{AccountDto, AuthSessionDto};
pub use fetch_me::fetch_me_handler;
pub use login_user::{login_user_handler, LoginRequestDto};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseDto};
pub use register_user::{register_user_handler, RegisterUserRequestDto};

// utoipa's path macros generate hidden `__path_*` items next to each handler.
pub use fetch_me::__path_fetch_me_handler;
pub use login_user::__path_login_user_handler;
pub use refresh_token::__path_refresh_token_handler;
pub use register_user::__path_register_user_handler;
