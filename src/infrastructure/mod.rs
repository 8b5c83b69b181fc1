//! Infrastructure layer - External service implementations

pub mod animation;
pub mod dictionary;
pub mod language;
pub mod logging;
pub mod observability;
pub mod services;
