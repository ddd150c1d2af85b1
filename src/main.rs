use portal_gate::config::{AppConfig, ConfigError};
use portal_gate::locale::MessageBundles;
use portal_gate::locale::bundle::BundleError;
use portal_gate::{routes, state};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Bundles(#[from] BundleError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = AppConfig::from_env()?;
    let bundles = match &config.bundle_dir {
        Some(dir) => MessageBundles::load(dir, &config.locales)?,
        None => MessageBundles::empty(&config.locales),
    };

    let state = state::AppState::new(&config, bundles);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    let port = config.port;
    tracing::info!(%port, default_locale = %config.locales.default_locale(), "portal-gate listening");
    axum::serve(listener, app).await?;
    Ok(())
}
