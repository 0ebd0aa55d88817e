use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins over the built-in filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚀 Starting HBnB directory service");

    let config = Config::from_env()?;
    info!(
        "📋 Configuration: backend={} data_file={} address={}",
        config.store_backend,
        config.data_file,
        config.api_address()
    );

    api_server::serve(&config).await
}
