pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;

use config::Config;
use dictionary::Dictionary;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Dictionary,
}
