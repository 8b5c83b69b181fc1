//! Avatar animation driver

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::animation::{AnimationError, FrameRange, PlaybackReport, Scene, SceneLoader};

/// Animation driver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_scene_path")]
    pub scene_path: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default = "default_frame_start")]
    pub frame_start: i32,
    /// Exclusive
    #[serde(default = "default_frame_end")]
    pub frame_end: i32,
}

fn default_enabled() -> bool {
    true
}

fn default_scene_path() -> String {
    "scenes/padrao.scene.json".to_string()
}

fn default_avatar() -> String {
    "NomeDoAvatar".to_string()
}

fn default_frame_start() -> i32 {
    1
}

fn default_frame_end() -> i32 {
    250
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            scene_path: default_scene_path(),
            avatar: default_avatar(),
            frame_start: default_frame_start(),
            frame_end: default_frame_end(),
        }
    }
}

/// Plays gesture clips on the avatar of a freshly loaded scene
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    loader: Arc<dyn SceneLoader>,
    scene_path: String,
    avatar: String,
    frames: FrameRange,
}

impl AnimationDriver {
    pub fn new(loader: Arc<dyn SceneLoader>, config: &AnimationConfig) -> Result<Self, AnimationError> {
        Ok(Self {
            loader,
            scene_path: config.scene_path.clone(),
            avatar: config.avatar.clone(),
            frames: FrameRange::new(config.frame_start, config.frame_end)?,
        })
    }

    pub fn scene_path(&self) -> &str {
        &self.scene_path
    }

    /// Load a new scene session and play `gestures` on the avatar
    ///
    /// Each gesture names a clip; the last one assigned stays active.
    pub async fn play(&self, gestures: &[&str]) -> Result<PlaybackReport, AnimationError> {
        let mut scene = self.loader.load(&self.scene_path).await?;

        debug!(
            scene = %scene.name(),
            path = %self.scene_path,
            clips = scene.action_count(),
            "Scene session loaded"
        );

        self.play_on(&mut scene, gestures)
    }

    /// Play `gestures` on an already loaded scene session
    pub fn play_on(
        &self,
        scene: &mut Scene,
        gestures: &[&str],
    ) -> Result<PlaybackReport, AnimationError> {
        if scene.object(&self.avatar).is_none() {
            return Err(AnimationError::AvatarNotFound {
                name: self.avatar.clone(),
            });
        }

        let mut assigned = Vec::with_capacity(gestures.len());
        for gesture in gestures {
            scene.assign_action(&self.avatar, gesture)?;
            debug!(avatar = %self.avatar, action = %gesture, "Action assigned");
            assigned.push(gesture.to_string());
        }

        let mut frames_stepped = 0;
        for frame in self.frames.frames() {
            debug!(frame, "Frame");
            frames_stepped += 1;
        }

        let active_action = scene
            .object(&self.avatar)
            .and_then(|o| o.active_action())
            .map(str::to_string);

        info!(
            scene = %scene.name(),
            avatar = %self.avatar,
            clips = assigned.len(),
            frames = frames_stepped,
            "Playback finished"
        );

        Ok(PlaybackReport {
            scene: scene.name().to_string(),
            avatar: self.avatar.clone(),
            assigned,
            active_action,
            frames: self.frames,
            frames_stepped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animation::{AnimationClip, ObjectKind, SceneObject};
    use crate::infrastructure::animation::StaticSceneLoader;

    fn scene() -> Scene {
        Scene::new("padrao")
            .with_object(SceneObject::new("NomeDoAvatar", ObjectKind::Armature))
            .with_object(SceneObject::static_object("Camera", ObjectKind::Camera))
            .with_action(AnimationClip::new("Fazer um círculo com as mãos"))
            .with_action(AnimationClip::new("Imitar o movimento de arremessar uma bola"))
    }

    fn driver(loader: Arc<StaticSceneLoader>, config: AnimationConfig) -> AnimationDriver {
        AnimationDriver::new(loader, &config).unwrap()
    }

    #[tokio::test]
    async fn test_play_assigns_clips_in_order() {
        let loader = Arc::new(StaticSceneLoader::new(scene()));
        let driver = driver(loader, AnimationConfig::default());

        let report = driver
            .play(&[
                "Imitar o movimento de arremessar uma bola",
                "Fazer um círculo com as mãos",
            ])
            .await
            .unwrap();

        assert_eq!(
            report.assigned,
            vec![
                "Imitar o movimento de arremessar uma bola",
                "Fazer um círculo com as mãos"
            ]
        );
        assert_eq!(
            report.active_action.as_deref(),
            Some("Fazer um círculo com as mãos")
        );
        assert_eq!(report.frames_stepped, 249);
    }

    #[tokio::test]
    async fn test_play_with_no_gestures_still_steps_frames() {
        let loader = Arc::new(StaticSceneLoader::new(scene()));
        let config = AnimationConfig {
            frame_start: 1,
            frame_end: 11,
            ..AnimationConfig::default()
        };

        let report = driver(loader, config).play(&[]).await.unwrap();

        assert!(report.assigned.is_empty());
        assert_eq!(report.active_action, None);
        assert_eq!(report.frames_stepped, 10);
    }

    #[tokio::test]
    async fn test_missing_avatar_fails() {
        let loader = Arc::new(StaticSceneLoader::new(scene()));
        let config = AnimationConfig {
            avatar: "Outro".into(),
            ..AnimationConfig::default()
        };

        let error = driver(loader, config).play(&[]).await.unwrap_err();

        assert_eq!(error, AnimationError::AvatarNotFound { name: "Outro".into() });
    }

    #[tokio::test]
    async fn test_missing_clip_fails() {
        let loader = Arc::new(StaticSceneLoader::new(scene()));
        let driver = driver(loader, AnimationConfig::default());

        let error = driver.play(&["Acenar com a mão"]).await.unwrap_err();

        assert_eq!(
            error,
            AnimationError::ClipNotFound {
                name: "Acenar com a mão".into()
            }
        );
    }

    #[tokio::test]
    async fn test_each_play_uses_a_fresh_session() {
        let loader = Arc::new(StaticSceneLoader::new(scene()));
        let driver = driver(loader.clone(), AnimationConfig::default());

        driver.play(&["Fazer um círculo com as mãos"]).await.unwrap();
        let second = driver.play(&[]).await.unwrap();

        assert_eq!(loader.load_count(), 2);
        assert_eq!(second.active_action, None);
    }

    #[test]
    fn test_invalid_frame_range_rejected() {
        let loader = Arc::new(StaticSceneLoader::new(scene()));
        let config = AnimationConfig {
            frame_start: 10,
            frame_end: 1,
            ..AnimationConfig::default()
        };

        assert!(AnimationDriver::new(loader, &config).is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = AnimationConfig::default();

        assert!(config.enabled);
        assert_eq!(config.scene_path, "scenes/padrao.scene.json");
        assert_eq!(config.avatar, "NomeDoAvatar");
        assert_eq!((config.frame_start, config.frame_end), (1, 250));
    }
}
