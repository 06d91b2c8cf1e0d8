use log::{LevelFilter, SetLoggerError};

/// `RUST_LOG` takes precedence over the configured level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
}
