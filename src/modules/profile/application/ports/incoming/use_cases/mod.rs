pub mod get_profile;

pub use get_profile::{GetProfileError, GetPublicProfileUseCase};
