use async_trait::async_trait;

use crate::domain::animation::{AnimationError, Scene, SceneLoader};

/// Loads scene manifests from JSON files on disk
#[derive(Debug, Default, Clone)]
pub struct JsonSceneLoader;

impl JsonSceneLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SceneLoader for JsonSceneLoader {
    async fn load(&self, path: &str) -> Result<Scene, AnimationError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AnimationError::scene_load(path, e.to_string()))?;

        Scene::from_json(path, &content)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_shipped_scene() {
        let loader = JsonSceneLoader::new();
        let scene = loader
            .load(concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/padrao.scene.json"))
            .await
            .unwrap();

        assert!(scene.object("NomeDoAvatar").is_some());
        assert!(scene.action("Fazer um círculo com as mãos").is_some());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let loader = JsonSceneLoader::new();
        let result = loader.load("/nonexistent/scene.json").await;

        assert!(matches!(result, Err(AnimationError::SceneLoad { .. })));
    }
}
