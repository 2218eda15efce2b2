pub mod config;
pub mod logging;
pub mod panels;
pub mod state;
pub mod views;

pub use config::{AppConfig, ConfigError, ConfigOverrides};
pub use state::AppState;
