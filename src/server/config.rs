//! Server configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_owned()
}

/// Configuration values controlling the HTTP server and its dependencies.
///
/// Values come from CLI flags, `MOTOLOG_*` environment variables, or a config
/// file, in that precedence order.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOTOLOG")]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. When absent the server runs against the
    /// in-memory store (development only; nothing survives a restart).
    pub database_url: Option<String>,
    /// Token signing secret. Required outside development.
    pub token_secret: Option<String>,
    /// Allow generating an ephemeral signing secret when none is configured.
    /// Tokens stop verifying across restarts; never enable in production.
    ///
    /// Not exposed as a CLI flag: ortho_config's generated bool flag always
    /// materialises `false` when absent, which would shadow the
    /// `MOTOLOG_ALLOW_EPHEMERAL_SECRET` environment layer. Env/file layers
    /// are authoritative for this toggle.
    #[ortho_config(skip_cli)]
    pub allow_ephemeral_secret: Option<bool>,
    /// Token validity window in hours.
    #[ortho_config(default = 2)]
    pub token_ttl_hours: i64,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> String {
        self.bind_addr.clone().unwrap_or_else(default_bind_addr)
    }

    /// Whether the ephemeral signing secret fallback is allowed. Off unless
    /// explicitly enabled.
    pub fn allow_ephemeral_secret(&self) -> bool {
        self.allow_ephemeral_secret.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("motolog-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("MOTOLOG_BIND_ADDR", None::<String>),
            ("MOTOLOG_DATABASE_URL", None::<String>),
            ("MOTOLOG_TOKEN_SECRET", None::<String>),
            ("MOTOLOG_ALLOW_EPHEMERAL_SECRET", None::<String>),
            ("MOTOLOG_TOKEN_TTL_HOURS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080");
        assert!(settings.database_url.is_none());
        assert!(settings.token_secret.is_none());
        assert!(!settings.allow_ephemeral_secret());
        assert_eq!(settings.token_ttl_hours, 2);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("MOTOLOG_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "MOTOLOG_DATABASE_URL",
                Some("postgres://localhost/motolog".to_owned()),
            ),
            ("MOTOLOG_TOKEN_SECRET", Some("hunter2hunter2".to_owned())),
            ("MOTOLOG_ALLOW_EPHEMERAL_SECRET", Some("true".to_owned())),
            ("MOTOLOG_TOKEN_TTL_HOURS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/motolog")
        );
        assert_eq!(settings.token_secret.as_deref(), Some("hunter2hunter2"));
        assert!(settings.allow_ephemeral_secret());
        assert_eq!(settings.token_ttl_hours, 4);
    }

    #[rstest]
    fn ephemeral_secret_env_toggle_survives_without_cli_flag() {
        let _guard = lock_env([
            ("MOTOLOG_BIND_ADDR", None::<String>),
            ("MOTOLOG_DATABASE_URL", None),
            ("MOTOLOG_TOKEN_SECRET", None),
            ("MOTOLOG_ALLOW_EPHEMERAL_SECRET", Some("true".to_owned())),
            ("MOTOLOG_TOKEN_TTL_HOURS", None),
        ]);

        // No CLI flag on the argument list; only the environment layer may
        // set the toggle.
        let settings = load_from_empty_args();
        assert_eq!(settings.allow_ephemeral_secret, Some(true));
        assert!(settings.allow_ephemeral_secret());
    }
}
