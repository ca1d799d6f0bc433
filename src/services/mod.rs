pub mod auth;
pub mod favorites;
pub mod password;
pub mod providers;

pub use auth::AuthService;
pub use favorites::FavoritesService;
pub use password::CredentialHasher;
