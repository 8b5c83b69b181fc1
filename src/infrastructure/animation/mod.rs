//! Animation infrastructure - scene loading and avatar playback

mod driver;
mod json_loader;

pub use driver::{AnimationConfig, AnimationDriver};
pub use json_loader::JsonSceneLoader;

#[cfg(test)]
pub use json_loader::mock::StaticSceneLoader;
