//! Certmint Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! filename sanitizer shared by every Certmint component.

pub mod config;
pub mod error;
pub mod models;
pub mod sanitize;

// Re-export commonly used types
pub use config::{
    BaseConfig, CollectionStoreBackend, Config, ServiceConfig, UploadConfig, VendorConfig,
    WalletListingSource,
};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use sanitize::{token_name, MAX_TOKEN_NAME_BYTES};
