use std::path::PathBuf;

use clap::Parser;
use sensorflow::config::{Config, ConfigStore};
use sensorflow::logging::init_tracing;
use sensorflow::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "sensorflow")]
#[command(about = "Terminal dashboard for the SensorFlow sensor API")]
#[command(version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override `[api] base_url`
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Write logs to this file (also settable via SENSORFLOW_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    let store = match load_config(&cli) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    tracing::debug!(path = %store.path().display(), "Config loaded");

    if let Err(err) = runtime::run(store.get()) {
        tracing::error!(error = %err, "Dashboard exited with error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::new(Config::load_from(&path)?, path);
    if let Some(url) = &cli.api_url {
        store.update(|config| config.api.base_url = url.clone());
    }
    store.get().validate()?;
    Ok(store)
}
