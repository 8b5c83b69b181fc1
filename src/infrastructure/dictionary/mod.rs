//! Gesture dictionary loading

mod loader;

pub use loader::{load_dictionary, parse_dictionary, DictionaryConfig};
