pub mod config;
pub mod paths;

pub use config::{Config, LoggingConfig, NfoConfig};
pub use paths::{container_base_path, PathManager};
