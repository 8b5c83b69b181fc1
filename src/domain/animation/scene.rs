//! Scene graph model

use std::collections::HashMap;

use serde::Deserialize;

use super::AnimationError;

/// Kind of scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Armature,
    Mesh,
    Camera,
    Light,
    #[default]
    Empty,
}

/// A named object in the scene
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneObject {
    name: String,
    #[serde(default)]
    kind: ObjectKind,
    /// Whether the object carries animation data
    #[serde(default = "default_animatable")]
    animatable: bool,
    #[serde(skip)]
    active_action: Option<String>,
}

fn default_animatable() -> bool {
    true
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            animatable: true,
            active_action: None,
        }
    }

    pub fn static_object(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            animatable: false,
            ..Self::new(name, kind)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn is_animatable(&self) -> bool {
        self.animatable
    }

    pub fn active_action(&self) -> Option<&str> {
        self.active_action.as_deref()
    }
}

/// A pre-authored animation clip (action)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationClip {
    pub name: String,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Deserialize)]
struct SceneManifest {
    name: String,
    #[serde(default)]
    objects: Vec<SceneObject>,
    #[serde(default)]
    actions: Vec<AnimationClip>,
}

/// An owned scene session with its objects and clips
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    name: String,
    objects: Vec<SceneObject>,
    actions: HashMap<String, AnimationClip>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            actions: HashMap::new(),
        }
    }

    /// Parse a JSON scene manifest
    pub fn from_json(path: &str, content: &str) -> Result<Self, AnimationError> {
        let manifest: SceneManifest = serde_json::from_str(content)
            .map_err(|e| AnimationError::scene_load(path, e.to_string()))?;

        let mut scene = Self::new(manifest.name);
        for object in manifest.objects {
            scene.add_object(object);
        }
        for clip in manifest.actions {
            scene.add_action(clip);
        }

        Ok(scene)
    }

    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.add_object(object);
        self
    }

    pub fn with_action(mut self, clip: AnimationClip) -> Self {
        self.add_action(clip);
        self
    }

    /// Add an object; a later object with the same name replaces the earlier one
    pub fn add_object(&mut self, object: SceneObject) {
        match self.objects.iter_mut().find(|o| o.name == object.name) {
            Some(existing) => *existing = object,
            None => self.objects.push(object),
        }
    }

    pub fn add_action(&mut self, clip: AnimationClip) {
        self.actions.insert(clip.name.clone(), clip);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn action(&self, name: &str) -> Option<&AnimationClip> {
        self.actions.get(name)
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Make `clip` the active action of `object`
    pub fn assign_action(&mut self, object: &str, clip: &str) -> Result<(), AnimationError> {
        if !self.actions.contains_key(clip) {
            return Err(AnimationError::ClipNotFound {
                name: clip.to_string(),
            });
        }

        let target = self
            .objects
            .iter_mut()
            .find(|o| o.name == object)
            .ok_or_else(|| AnimationError::AvatarNotFound {
                name: object.to_string(),
            })?;

        if !target.animatable {
            return Err(AnimationError::NotAnimatable {
                name: object.to_string(),
            });
        }

        target.active_action = Some(clip.to_string());
        Ok(())
    }
}
