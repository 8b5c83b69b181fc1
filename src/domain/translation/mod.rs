//! Translation domain - sentence to gesture sequence

mod result;

pub use result::{FailureStage, GestureMatch, TranslationFailure, TranslationResult, TranslationStatus};
