pub mod favorites;
pub mod postgres;
pub mod users;

pub use favorites::{FavoriteRepository, PgFavoriteRepository};
pub use postgres::create_pool;
pub use users::{PgUserRepository, UserRepository};
