//! Libras Translator
//!
//! Translates Portuguese sentences into ordered Libras gesture descriptions:
//! - Keyword extraction and embeddings through an external language API
//! - Gesture dictionary lookup with closest-candidate disambiguation
//! - Avatar playback of the chosen gestures on a scene manifest

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use api::state::AppState;
use infrastructure::{
    animation::{AnimationDriver, JsonSceneLoader},
    dictionary::load_dictionary,
    language::{GeminiLanguageClient, HttpClient},
    services::TranslationService,
};
use tracing::{info, warn};

/// Create the application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let api = &config.language_api;

    if api.api_key.is_empty() {
        warn!("No language API key configured; upstream calls will be rejected");
    }

    let http = HttpClient::with_timeout(Duration::from_secs(api.timeout_secs))
        .context("Failed to build HTTP client")?;
    let language = GeminiLanguageClient::with_base_url(http, api.api_key.clone(), &api.base_url);
    info!(base_url = %api.base_url, timeout_secs = api.timeout_secs, "Language API client ready");

    let dictionary = load_dictionary(&config.dictionary)
        .await
        .context("Failed to load gesture dictionary")?;

    let translator = TranslationService::new(
        Arc::new(language),
        Arc::new(dictionary),
        config.translation.clone(),
    );

    let animator = if config.animation.enabled {
        let driver = AnimationDriver::new(Arc::new(JsonSceneLoader::new()), &config.animation)
            .context("Invalid animation configuration")?;
        info!(
            scene = %config.animation.scene_path,
            avatar = %config.animation.avatar,
            "Animation enabled"
        );
        Some(Arc::new(driver))
    } else {
        info!("Animation disabled");
        None
    };

    Ok(AppState::new(Arc::new(translator), animator))
}
