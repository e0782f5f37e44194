//! Server bootstrap: configuration, dependency wiring, and the actix run loop.

pub mod config;

use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use chrono::Duration;
use diesel::Connection as _;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use rand::RngCore as _;
use tracing::{info, warn};

use crate::domain::{Argon2SecretHasher, TokenConfig, TokenService};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::{HttpState, HttpStatePorts, configure};
use crate::outbound::persistence::{
    DbPool, DieselMotoRepository, DieselNotificationRepository, DieselRevisionRepository,
    DieselUserRepository, MemoryStore, PoolConfig,
};

pub use config::ServerSettings;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Resolve the token signing secret from settings.
///
/// Without a configured secret the server only starts when the ephemeral
/// fallback is explicitly allowed (or in debug builds); issued tokens then
/// stop verifying across restarts.
fn resolve_token_config(settings: &ServerSettings) -> io::Result<TokenConfig> {
    let secret: Vec<u8> = match &settings.token_secret {
        Some(secret) => secret.clone().into_bytes(),
        None => {
            if !(cfg!(debug_assertions) || settings.allow_ephemeral_secret()) {
                return Err(io::Error::other(
                    "MOTOLOG_TOKEN_SECRET is not set and the ephemeral fallback is disabled",
                ));
            }
            warn!("using ephemeral token secret (dev only)");
            let mut secret = vec![0_u8; 32];
            rand::thread_rng().fill_bytes(&mut secret);
            secret
        }
    };

    Ok(TokenConfig::new(secret).with_ttl(Duration::hours(settings.token_ttl_hours)))
}

/// Run pending migrations over a blocking connection before the pool starts.
fn run_migrations(database_url: &str) -> io::Result<()> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| io::Error::other(format!("failed to connect for migrations: {err}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| io::Error::other(format!("failed to run migrations: {err}")))?;
    Ok(())
}

async fn build_ports(settings: &ServerSettings, tokens: TokenService) -> io::Result<HttpStatePorts> {
    match &settings.database_url {
        Some(url) => {
            run_migrations(url)?;
            let pool = DbPool::new(PoolConfig::new(url.clone()))
                .await
                .map_err(|err| io::Error::other(err.to_string()))?;
            Ok(HttpStatePorts {
                users: Arc::new(DieselUserRepository::new(pool.clone())),
                motos: Arc::new(DieselMotoRepository::new(pool.clone())),
                revisions: Arc::new(DieselRevisionRepository::new(pool.clone())),
                notifications: Arc::new(DieselNotificationRepository::new(pool)),
                hasher: Arc::new(Argon2SecretHasher),
                tokens,
            })
        }
        None => {
            warn!("MOTOLOG_DATABASE_URL is not set; using the in-memory store (dev only)");
            let store = Arc::new(MemoryStore::new());
            Ok(HttpStatePorts {
                users: Arc::clone(&store) as _,
                motos: Arc::clone(&store) as _,
                revisions: Arc::clone(&store) as _,
                notifications: store as _,
                hasher: Arc::new(Argon2SecretHasher),
                tokens,
            })
        }
    }
}

/// Bind and run the HTTP server until shutdown.
pub async fn run(settings: ServerSettings) -> io::Result<()> {
    let tokens = TokenService::new(resolve_token_config(&settings)?);
    let ports = build_ports(&settings, tokens).await?;
    let state = web::Data::new(HttpState::assemble(ports));

    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let bind_addr = settings.bind_addr();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .configure(configure)
    })
    .bind(bind_addr.as_str())?;

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    server.run().await
}
