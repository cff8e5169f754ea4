use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Sources, later ones win:
// 1. Built-in defaults
// 2. TOML file named by CUSTOMER_SERVICE_CONFIG (optional)
// 3. Environment overrides (CUSTOMER_SERVICE_HOST, CUSTOMER_SERVICE_PORT,
//    CUSTOMER_SERVICE_BACKEND, DATABASE_URL)
//
// ============================================================================

pub const CONFIG_PATH_ENV: &str = "CUSTOMER_SERVICE_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Number of actix workers; `None` uses one per CPU core
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// Which data-access implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Memory,
    Postgres,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::Postgres => "postgres",
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "list" => Ok(Backend::Memory),
            "postgres" | "postgresql" | "jdbc" => Ok(Backend::Postgres),
            other => bail!("Unknown data-access backend: {}", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: Backend,
    /// PostgreSQL connection string, required for the postgres backend
    pub url: Option<String>,
    pub max_connections: u32,
    /// Start the in-memory backend with two demo customers
    pub seed_demo_data: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            url: None,
            max_connections: 5,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional file and the process environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply environment-style overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CUSTOMER_SERVICE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CUSTOMER_SERVICE_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid CUSTOMER_SERVICE_PORT: {}", port))?;
        }
        if let Some(backend) = lookup("CUSTOMER_SERVICE_BACKEND") {
            self.database.backend = backend.parse()?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.backend == Backend::Postgres && self.database.url.is_none() {
            bail!("The postgres backend requires database.url or DATABASE_URL");
        }
        if self.database.max_connections == 0 {
            bail!("database.max_connections must be at least 1");
        }
        Ok(())
    }
}
