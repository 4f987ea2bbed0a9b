use serde::{Deserialize, Serialize};

use crate::utils::constants::{BACKEND_URL, DEFAULT_ASSET_PATH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    /// Ruta relativa al backend desde la que se sirven las imágenes
    pub asset_path: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Imagen de cabecera del listado (solo pantallas grandes)
    pub hero_image: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:4000".to_string(),
            asset_path: DEFAULT_ASSET_PATH.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            hero_image: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: BACKEND_URL.trim_end_matches('/').to_string(),
            asset_path: normalize_asset_path(option_env!("ASSET_PATH").unwrap_or(DEFAULT_ASSET_PATH)),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL").unwrap_or("info").to_string(),
            hero_image: option_env!("HERO_IMAGE")
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm-logger; `info` si el valor no es válido
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Garantiza `/` inicial y ningún `/` final: `api/` -> `/api`
fn normalize_asset_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:4000");
        assert_eq!(config.asset_path(), "/api");
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Info);
        assert!(config.hero_image.is_none());
    }

    #[test]
    fn test_invalid_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "verbose".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_normalize_asset_path() {
        assert_eq!(normalize_asset_path("/api"), "/api");
        assert_eq!(normalize_asset_path("api/"), "/api");
        assert_eq!(normalize_asset_path("/static/img/"), "/static/img");
        assert_eq!(normalize_asset_path(""), "");
    }
}
