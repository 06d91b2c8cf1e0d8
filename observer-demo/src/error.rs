use config::ConfigError;
use log::{ParseLevelError, SetLoggerError};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(#[from] ParseLevelError),
    #[error("Unable to initialize logger: {0}")]
    Logger(#[from] SetLoggerError),
}
