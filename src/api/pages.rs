//! Input form and translation pages

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use reqwest::Url;
use serde::Deserialize;
use tracing::error;

use super::state::AppState;
use super::types::ApiError;
use super::views;
use crate::domain::DomainError;

pub const TRANSLATION_PATH: &str = "/traducao";

/// Fields posted by the input form and read back on the results page
#[derive(Debug, Default, Deserialize)]
pub struct TextInput {
    #[serde(default)]
    pub texto: String,
}

/// GET / - input form
pub async fn index() -> Result<Html<String>, ApiError> {
    Ok(Html(views::render_index()?))
}

/// POST / - hand the text over to the results page
pub async fn submit(Form(input): Form<TextInput>) -> Result<Redirect, ApiError> {
    Ok(Redirect::to(&translation_location(&input.texto)?))
}

/// GET /traducao - translate, animate and show the gestures
pub async fn translation(
    State(state): State<AppState>,
    Query(input): Query<TextInput>,
) -> Result<Html<String>, ApiError> {
    let result = state.translator.translate(&input.texto).await;

    let playback = match &state.animator {
        Some(animator) => match animator.play(&result.gestures()).await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(error = %e, scene = %animator.scene_path(), "Animation failed");
                return Err(DomainError::from(e).into());
            }
        },
        None => None,
    };

    Ok(Html(views::render_translation(&result, playback.as_ref())?))
}

/// Relative URL of the results page for `text`, form-urlencoded
fn translation_location(text: &str) -> Result<String, ApiError> {
    let mut url = Url::parse("http://localhost")
        .and_then(|base| base.join(TRANSLATION_PATH))
        .map_err(|e| ApiError::internal(e.to_string()))?;

    url.query_pairs_mut().append_pair("texto", text);

    Ok(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
}
