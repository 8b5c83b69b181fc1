//! API layer - HTML pages, health endpoints and middleware

pub mod health;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;
pub mod types;
pub mod views;

pub use router::create_router;
pub use state::AppState;
