use serde::{Deserialize, Serialize};
use std::str::FromStr;

use tg_shared::config::{DatabaseConfig, EmailConfig, Environment, QuotaConfig, ServerConfig};

/// Identity store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    MySql,
    /// Process-local store, lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(StoreBackend::MySql),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("Unknown store backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub quota: QuotaConfig,
    pub store_backend: StoreBackend,
}

impl Config {
    pub fn from_env() -> Self {
        let store_backend = match std::env::var("STORE_BACKEND") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("{}, using mysql", e);
                StoreBackend::MySql
            }),
            Err(_) => StoreBackend::default(),
        };

        Config {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            quota: QuotaConfig::from_env(),
            store_backend,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
