use clap::Parser;
use std::path::PathBuf;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Browse a product catalog, filter it and fill a basket.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "product-catalog", version, about)]
pub struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the product API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the number of products fetched
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Refuse to add out-of-stock products to the basket
    #[arg(long)]
    pub reject_out_of_stock: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use the bundled sample catalog instead of the network
    #[arg(long)]
    pub offline: bool,
}

impl Cli {
    /// Load the config file named on the command line (or the default one)
    /// and apply command-line overrides on top. Validation runs once, on
    /// the merged result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::parse_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Command-line values win over file values.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(limit) = self.limit {
            config.source.limit = limit;
        }
        if self.reject_out_of_stock {
            config.basket.reject_out_of_stock = true;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
