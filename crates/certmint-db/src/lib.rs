//! Certmint persistence
//!
//! Collections are stored behind the [`CollectionStore`] trait so the API can run
//! against PostgreSQL or a process-local map.

pub mod factory;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod token;

pub use factory::create_collection_store;
pub use memory::InMemoryCollectionStore;
pub use postgres::PgCollectionRepository;
pub use store::CollectionStore;
pub use token::{generate_share_token, SHARE_TOKEN_BYTES};

pub use sqlx::PgPool;
