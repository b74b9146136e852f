use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use product_catalog::config::Cli;
use product_catalog::logging::init_tracing;
use product_catalog::source::{HttpProductSource, ProductSource, StaticProductSource};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;

    match init_tracing(&config.logging) {
        Ok(path) => tracing::info!("Logging to {}", path.display()),
        Err(err) => eprintln!("Warning: logging disabled: {}", err),
    }

    let source: Arc<dyn ProductSource> = if cli.offline {
        Arc::new(StaticProductSource::sample().context("bundled sample catalog is invalid")?)
    } else {
        Arc::new(HttpProductSource::new(&config.source)?)
    };
    tracing::info!(source = source.name(), "Starting catalog page");

    product_catalog::ui::run(&config, source).context("terminal UI failed")?;
    Ok(())
}
