use serde::Deserialize;

use crate::infrastructure::animation::AnimationConfig;
use crate::infrastructure::dictionary::DictionaryConfig;
use crate::infrastructure::language::DEFAULT_GEMINI_BASE_URL;
use crate::infrastructure::observability::ObservabilityConfig;
use crate::infrastructure::services::TranslationConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub language_api: LanguageApiConfig,
    pub dictionary: DictionaryConfig,
    pub translation: TranslationConfig,
    pub animation: AnimationConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// External language API connection settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LanguageApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LanguageApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LanguageApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.language_api.base_url, "https://api.gemini.google.com/v1");
        assert_eq!(config.language_api.timeout_secs, 30);
        assert!(config.dictionary.path.is_none());
        assert!(config.translation.tokenize);
        assert!(config.animation.enabled);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                port = 9000

                [animation]
                enabled = false
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.animation.enabled);
        assert_eq!(config.animation.avatar, "NomeDoAvatar");
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let config = LanguageApiConfig {
            api_key: "super-secret".into(),
            ..LanguageApiConfig::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
