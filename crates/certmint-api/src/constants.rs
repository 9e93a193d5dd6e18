//! Shared HTTP constants.

/// Multipart field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// Optional multipart field overriding the destination wallet
pub const WALLET_ADDRESS_FIELD: &str = "wallet_address";

/// Optional multipart field linking the upload to a credential record
pub const CREDENTIAL_ID_FIELD: &str = "credential_id";

/// Form field (repeated) listing asset ids for a new collection
pub const SELECTED_ASSETS_FIELD: &str = "selected_assets";

/// Allowance for multipart framing on top of the file size limit
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Concurrent metadata lookups when hydrating a collection
pub const HYDRATION_CONCURRENCY: usize = 8;

/// Default in-flight request limit
pub const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 1024;
