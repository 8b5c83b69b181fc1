//! HTML page rendering

use std::collections::HashMap;

use axum::http::StatusCode;
use once_cell::sync::Lazy;

use crate::domain::{escape_html, PageTemplate, PlaybackReport, TemplateError, TranslationResult};

static INDEX_PAGE: Lazy<PageTemplate> =
    Lazy::new(|| PageTemplate::parse(include_str!("../../templates/index.html")));

static TRANSLATION_PAGE: Lazy<PageTemplate> =
    Lazy::new(|| PageTemplate::parse(include_str!("../../templates/translation.html")));

static ERROR_PAGE: Lazy<PageTemplate> =
    Lazy::new(|| PageTemplate::parse(include_str!("../../templates/error.html")));

const DEGRADED_NOTICE: &str = "<p class=\"notice\">O serviço de linguagem não respondeu \
                               corretamente; a tradução pode estar incompleta.</p>";

const NO_GESTURES: &str = "<li class=\"empty\">Nenhum gesto encontrado.</li>";

/// Input form
pub fn render_index() -> Result<String, TemplateError> {
    INDEX_PAGE.render(&HashMap::new())
}

/// Results page: the escaped input, one list item per gesture and an
/// optional playback summary
pub fn render_translation(
    result: &TranslationResult,
    playback: Option<&PlaybackReport>,
) -> Result<String, TemplateError> {
    let gestures = if result.is_empty() {
        NO_GESTURES.to_string()
    } else {
        result
            .gestures()
            .iter()
            .map(|g| format!("<li>{}</li>", escape_html(g)))
            .collect::<Vec<_>>()
            .join("\n    ")
    };

    let mut values = HashMap::from([
        ("input", escape_html(result.input())),
        ("gestures", gestures),
    ]);

    if result.is_degraded() {
        values.insert("notice", DEGRADED_NOTICE.to_string());
    }

    if let Some(report) = playback {
        values.insert(
            "playback",
            format!(
                "<p class=\"playback\">Avatar {} animado em {} quadros.</p>",
                escape_html(&report.avatar),
                report.frames_stepped
            ),
        );
    }

    TRANSLATION_PAGE.render(&values)
}

pub fn render_error(status: StatusCode, message: &str) -> Result<String, TemplateError> {
    let values = HashMap::from([
        ("status", status.as_u16().to_string()),
        ("message", escape_html(message)),
    ]);

    ERROR_PAGE.render(&values)
}
