//! Domain models
//!
//! This module contains the request, response, and entity types shared by the
//! API, the collection store, and the CLI.

pub mod asset;
pub mod collection;
pub mod mint;

pub use asset::*;
pub use collection::*;
pub use mint::*;
