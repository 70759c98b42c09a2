use serde::{Deserialize, Serialize};

const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    pub app_name: String,
    pub upload: UploadConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "debug".to_string(),
            app_name: "Synchrone AI".to_string(),
            upload: UploadConfig::default(),
        }
    }
}

/// Parámetros del simulador de subida y de los avisos de la zona de carga
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub tick_interval_ms: u32,
    /// Límite superior (exclusivo) del incremento aleatorio por tick
    pub max_increment: f64,
    pub processing_delay_ms: u32,
    pub advisory_max_bytes: u64,
    pub accepted_extension: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            max_increment: 15.0,
            processing_delay_ms: 1000,
            advisory_max_bytes: DEFAULT_MAX_BYTES,
            accepted_extension: ".pdf".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = UploadConfig::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("debug").to_string(),
            app_name: option_env!("APP_NAME")
                .unwrap_or("Synchrone AI").to_string(),
            upload: UploadConfig {
                tick_interval_ms: parse_or(option_env!("UPLOAD_TICK_INTERVAL_MS"), defaults.tick_interval_ms),
                max_increment: parse_or(option_env!("UPLOAD_MAX_INCREMENT"), defaults.max_increment),
                processing_delay_ms: parse_or(option_env!("UPLOAD_PROCESSING_DELAY_MS"), defaults.processing_delay_ms),
                advisory_max_bytes: parse_or(option_env!("UPLOAD_MAX_BYTES"), defaults.advisory_max_bytes),
                accepted_extension: option_env!("UPLOAD_ACCEPT")
                    .map(str::to_string)
                    .unwrap_or(defaults.accepted_extension),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log efectivo. En producción nunca se baja de `info`.
    pub fn log_level(&self) -> log::Level {
        let level = self.log_level.parse().unwrap_or(log::Level::Debug);
        if self.is_production() && level > log::Level::Info {
            log::Level::Info
        } else {
            level
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulator_timings() {
        let config = AppConfig::default();
        assert_eq!(config.upload.tick_interval_ms, 200);
        assert_eq!(config.upload.processing_delay_ms, 1000);
        assert_eq!(config.upload.max_increment, 15.0);
        assert_eq!(config.upload.advisory_max_bytes, 10 * 1024 * 1024);
        assert_eq!(config.upload.accepted_extension, ".pdf");
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("250"), 200u32), 250);
        assert_eq!(parse_or(Some("abc"), 200u32), 200);
        assert_eq!(parse_or(None, 1.5f64), 1.5);
    }

    #[test]
    fn production_caps_log_level_at_info() {
        let config = AppConfig {
            environment: "production".to_string(),
            log_level: "trace".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let dev = AppConfig {
            log_level: "warn".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(dev.log_level(), log::Level::Warn);
    }
}
