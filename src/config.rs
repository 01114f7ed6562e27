use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Clave de localStorage con el registro de sesión serializado
    pub session_storage_key: String,
    pub pass_phrase: String,
    pub easter_egg_token: String,
    pub root_element_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            session_storage_key: "user".to_string(),
            pass_phrase: "STEIN".to_string(),
            easter_egg_token: "NICE".to_string(),
            root_element_id: "root".to_string(),
        }
    }
}

impl AppConfig {
    /// Cargar configuración desde variables de entorno en compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            pass_phrase: option_env!("SIGN_IN_ANSWER")
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.pass_phrase),
            easter_egg_token: option_env!("EASTER_EGG_TOKEN")
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.easter_egg_token),
            root_element_id: option_env!("ROOT_ELEMENT_ID")
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.root_element_id),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel del logger de consola; valores desconocidos caen a `Info`
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_original_tokens() {
        let config = AppConfig::default();
        assert_eq!(config.session_storage_key, "user");
        assert_eq!(config.pass_phrase, "STEIN");
        assert_eq!(config.easter_egg_token, "NICE");
        assert!(!config.is_production());
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
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
    fn disabled_logging_only_keeps_errors() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
