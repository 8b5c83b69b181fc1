//! Application configuration

mod app_config;

pub use app_config::{AppConfig, LanguageApiConfig, LogFormat, LoggingConfig, ServerConfig};
