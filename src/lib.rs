pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

pub use config::Config;
pub use error::ApiError;
pub use models::*;
pub use routes::{create_router, ApiDoc};
pub use state::AppState;
pub use utils::{compute_countdown, day_bounds};
