//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables son opcionales; un valor presente pero inválido es un
//! error de arranque.

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be one of trace, debug, info, warn, error; got '{value}'")]
    InvalidLogLevel { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Archivo JSON con los vehículos iniciales del store
    pub seed_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            seed_path: None,
            log_level: Level::DEBUG,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => defaults.port,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel { name: "LOG_LEVEL", value })?,
            None => defaults.log_level,
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: var("HOST").unwrap_or(defaults.host),
            cors_origins,
            seed_path: var("VEHICLES_SEED_PATH").map(PathBuf::from),
            log_level,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `CORS_ORIGINS` incluye el comodín `*`
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
