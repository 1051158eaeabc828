//! Seufz Backend Binary
//!
//! Serves the counter page, or overwrites a counter and exits when one of the
//! `--set-*` flags is given.

use anyhow::{Context, Result};
use clap::Parser;
use seufz_backend_lib::{
    api::create_app,
    assets::migrate_legacy_assets,
    config::{Config, LogFormat},
    data::Counter,
    log::initialize_logging,
    models::CounterKind,
    services::Services,
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "seufz")]
#[command(about = "Jönis Counter Web App", long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Override server host
    #[arg(long)]
    host: Option<String>,

    /// Override server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the directory holding the counter files
    #[arg(long)]
    data_dir: Option<String>,

    /// Override the directory served under /sounds and /static
    #[arg(long)]
    static_dir: Option<String>,

    /// Override the legacy directory sound files are migrated from
    #[arg(long)]
    templates_dir: Option<String>,

    /// Override the cooldown between two actions on the same counter
    #[arg(long)]
    cooldown_secs: Option<u64>,

    /// Log output format: auto, json or text
    #[arg(long, env = "SEUFZ_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Set the Seufz counter to a specific value and exit
    #[arg(long, allow_negative_numbers = true)]
    set_seufz: Option<i64>,

    /// Set the Stöhn counter to a specific value and exit
    #[arg(long, allow_negative_numbers = true)]
    set_stoehn: Option<i64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    initialize_logging(config.log_format);

    let overrides = [
        (CounterKind::Seufz, args.set_seufz),
        (CounterKind::Stoehn, args.set_stoehn),
    ];
    if overrides.iter().any(|(_, value)| value.is_some()) {
        for (kind, value) in overrides {
            if let Some(value) = value {
                let counter = Counter::open(config.counter_path(kind));
                counter.set(value);
                println!("{} Counter set to {}.", kind.label(), counter.get());
            }
        }
        return Ok(());
    }

    info!("Starting Seufz Backend");

    migrate_legacy_assets(&config.templates_dir, &config.static_dir);

    let services = Services::from_config(&config);
    info!(
        data_dir = %config.data_dir.display(),
        cooldown_secs = config.cooldown_secs,
        "Counters ready"
    );

    // Start server
    let app = create_app(services, &config.static_dir);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .context("Failed to bind TCP listener")?;

    info!("Server listening on http://{}:{}", config.host, config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to read config file: {}", path))?,
        None => {
            debug!("No config file specified, using defaults");
            Config::default()
        }
    };

    // Apply CLI overrides
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.into();
    }
    if let Some(static_dir) = &args.static_dir {
        config.static_dir = static_dir.into();
    }
    if let Some(templates_dir) = &args.templates_dir {
        config.templates_dir = templates_dir.into();
    }
    if let Some(cooldown_secs) = args.cooldown_secs {
        config.cooldown_secs = cooldown_secs;
    }
    if let Some(log_format) = args.log_format {
        config.log_format = log_format;
    }

    Ok(config)
}
