pub mod favorite;
pub mod media;
pub mod user;

pub use favorite::{Favorite, FavoriteStatus};
pub use media::{DiscoverQuery, MediaKind, MediaPage};
pub use user::{User, UserProfile};
