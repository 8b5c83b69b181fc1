//! CLI module for the Libras translator
//!
//! - `serve`: web application
//! - `translate`: one-shot translation of a sentence

pub mod serve;
pub mod translate;

use clap::{Parser, Subcommand};

/// Portuguese to Libras gesture translator
#[derive(Parser)]
#[command(name = "libras-translator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web application
    Serve,

    /// Translate a sentence and print one gesture per line
    Translate(translate::TranslateArgs),
}
