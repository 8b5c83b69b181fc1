use async_trait::async_trait;

use super::{AnimationError, Scene};

/// Source of scene sessions
///
/// Each call returns a fresh, independently owned scene.
#[async_trait]
pub trait SceneLoader: Send + Sync + std::fmt::Debug {
    async fn load(&self, path: &str) -> Result<Scene, AnimationError>;
}
