//! Domain layer - Core translation logic and entities

pub mod animation;
pub mod dictionary;
pub mod embedding;
pub mod error;
pub mod language;
pub mod matching;
pub mod page;
pub mod translation;

pub use animation::{
    AnimationClip, AnimationError, FrameRange, ObjectKind, PlaybackReport, Scene, SceneLoader,
    SceneObject,
};
pub use dictionary::{DictionaryValidationError, GestureDictionary, GestureEntry};
pub use embedding::{cosine_distance, cosine_similarity, Embedding};
pub use error::DomainError;
pub use language::{LanguageClient, LanguageOperation};
pub use matching::{closest_candidate, CandidateMatch, MatchError};
pub use page::{escape_html, PageTemplate, TemplateError};
pub use translation::{
    FailureStage, GestureMatch, TranslationFailure, TranslationResult, TranslationStatus,
};
