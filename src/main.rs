//! Backend entry-point: config load, tracing init, server run.

use ortho_config::OrthoConfig as _;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use motolog_backend::server::{ServerSettings, run};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;

    run(settings).await
}
