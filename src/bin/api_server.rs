use std::sync::Arc;

use clap::Parser;
use math_ops::adapters::http;
use math_ops::core::ServerSettings;
use math_ops::utils::{logger, validation::Validate};
use math_ops::{AppState, DecimalCalculator, ServerConfig};

#[derive(Parser)]
#[command(name = "math-api")]
#[command(about = "HTTP API for performing basic math operations")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "math-api.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override listen host from config
    #[arg(long)]
    host: Option<String>,

    /// Override listen port from config
    #[arg(long)]
    port: Option<u16>,

    /// Validate configuration and exit without serving
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match ServerConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.apply_env_overrides() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 應用命令列覆蓋設定
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.verbose {
        config.logging.level = "debug".to_string();
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    logger::init_server_logger(&config.logging.level, config.json_logging());

    tracing::info!("🚀 Starting {} v{}", config.api.title, config.api.version);
    display_config_summary(&config, &args);

    if args.check {
        tracing::info!("🔍 CHECK MODE - configuration is valid, not serving");
        return Ok(());
    }

    let state = AppState::new(Arc::new(DecimalCalculator::new()), config.api.clone());
    let router = http::build_router(state);

    let listener = http::bind(&config.bind_address()).await?;
    http::serve(listener, router, shutdown_signal()).await?;

    Ok(())
}

fn display_config_summary(config: &ServerConfig, args: &Args) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Config file: {}", args.config);
    tracing::info!("  Listen: {}", config.bind_address());
    tracing::info!(
        "  Logging: {} ({})",
        config.logging.level,
        config.logging.format
    );
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
