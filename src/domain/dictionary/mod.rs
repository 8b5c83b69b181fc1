//! Gesture dictionary - keyword to sign-language gesture descriptions

mod entry;
mod store;
mod validation;

pub use entry::GestureEntry;
pub use store::GestureDictionary;
pub use validation::{validate_entry, validate_keyword, DictionaryValidationError};
