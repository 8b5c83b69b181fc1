//! Animation domain - scenes, avatars and clip playback

mod error;
mod loader;
mod playback;
mod scene;

pub use error::AnimationError;
pub use loader::SceneLoader;
pub use playback::{FrameRange, PlaybackReport};
pub use scene::{AnimationClip, ObjectKind, Scene, SceneObject};
