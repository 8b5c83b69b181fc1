//! Application services

mod translation_service;

pub use translation_service::{TranslationConfig, TranslationService};
