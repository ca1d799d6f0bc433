pub mod auth;
pub mod favorites;
pub mod media;
pub mod routes;
pub mod state;
pub mod users;

pub use routes::create_router;
pub use state::AppState;
