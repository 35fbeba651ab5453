use snyk_mcp::config::SnykConfig;
use snyk_mcp::stdio_service;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol; logs go to stderr.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init();

    // MCP hosts may probe stdio servers with `--version`/`--help` before starting a session.
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        info!("version={}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        info!("snyk-mcp (MCP stdio server); requires SNYK_API_KEY; usage: snyk-mcp [--version|--help]");
        return Ok(());
    }

    let config = match SnykConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    stdio_service::run(config).await
}
