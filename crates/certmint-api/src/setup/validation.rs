//! Configuration validation
//!
//! Validates configuration at startup to catch misconfigurations early.

use anyhow::Result;
use certmint_core::{CollectionStoreBackend, Config};

/// Validate configuration values that depend on the running process.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() {
        if config.public_base_url().is_none() {
            tracing::warn!(
                "PUBLIC_BASE_URL not set in production - share links will use the request Host header"
            );
        }
        if config.collection_store() == CollectionStoreBackend::Memory {
            tracing::warn!("In-memory collection store in production - collections are lost on restart");
        }
    }

    if config.collection_store() == CollectionStoreBackend::Postgres {
        if config.db_max_connections() == 0 {
            return Err(anyhow::anyhow!("Database max connections cannot be 0"));
        }

        if config.db_timeout_seconds() == 0 {
            return Err(anyhow::anyhow!("Database timeout cannot be 0"));
        }
    }

    if config.allowed_content_types().is_empty() {
        tracing::warn!("ALLOWED_CONTENT_TYPES is '*' - any content type will be minted");
    }

    Ok(())
}
