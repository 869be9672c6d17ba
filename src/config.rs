use std::{env, net::SocketAddr};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://trips.db?mode=rwc".to_string());
        let listen_addr: SocketAddr = lookup("APP_LISTEN_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let max_connections: u32 = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid DB_MAX_CONNECTIONS: {err}")))?,
            None => 10,
        };
        // sqlx panics on a pool without capacity
        if max_connections == 0 {
            return Err(AppError::Config(
                "invalid DB_MAX_CONNECTIONS: must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite://trips.db?mode=rwc");
        assert_eq!(config.listen_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("APP_LISTEN_ADDR", "0.0.0.0:9000"),
            ("DB_MAX_CONNECTIONS", "3"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn rejects_bad_listen_addr() {
        let err = load(&[("APP_LISTEN_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.starts_with("invalid APP_LISTEN_ADDR")));
    }

    #[test]
    fn rejects_non_numeric_max_connections() {
        let err = load(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.starts_with("invalid DB_MAX_CONNECTIONS")));
    }

    #[test]
    fn rejects_zero_max_connections() {
        let err = load(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(
            matches!(err, AppError::Config(msg) if msg == "invalid DB_MAX_CONNECTIONS: must be at least 1")
        );
    }
}
