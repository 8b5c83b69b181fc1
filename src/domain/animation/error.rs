use thiserror::Error;

/// Errors raised while loading or driving a scene
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("Failed to load scene '{path}': {message}")]
    SceneLoad { path: String, message: String },

    #[error("Avatar object '{name}' not found in scene")]
    AvatarNotFound { name: String },

    #[error("Object '{name}' cannot hold animation data")]
    NotAnimatable { name: String },

    #[error("Animation clip '{name}' not found in scene")]
    ClipNotFound { name: String },

    #[error("Invalid frame range {start}..{end}")]
    InvalidFrameRange { start: i32, end: i32 },
}

impl AnimationError {
    pub fn scene_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SceneLoad {
            path: path.into(),
            message: message.into(),
        }
    }
}
