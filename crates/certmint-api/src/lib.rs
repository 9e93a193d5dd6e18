//! Certmint API Library
//!
//! This crate provides the HTTP handlers, services, and application setup for the
//! upload, mint, wallet, and collection endpoints.

mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
pub mod services;
pub mod setup;
pub mod telemetry;
mod utils;

pub mod error;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
