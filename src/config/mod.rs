//! Configuration: TOML file, defaults and command-line overrides.

mod cli;
mod loader;
mod types;

pub use cli::Cli;
pub use loader::{ConfigError, MAX_LIMIT};
pub use types::{BasketConfig, Config, LoggingConfig, SourceConfig, UiConfig};
