//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::animation::AnimationDriver;
use crate::infrastructure::services::TranslationService;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub translator: Arc<TranslationService>,
    /// Absent when animation is disabled
    pub animator: Option<Arc<AnimationDriver>>,
}

impl AppState {
    pub fn new(translator: Arc<TranslationService>, animator: Option<Arc<AnimationDriver>>) -> Self {
        Self {
            translator,
            animator,
        }
    }
}
