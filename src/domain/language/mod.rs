//! Language API domain - tokenization, keyword extraction and embeddings

mod client;
mod operation;

pub use client::LanguageClient;
pub use operation::LanguageOperation;

#[cfg(test)]
pub use client::MockLanguageClient;
