//! Request-independent services used by the handlers.

pub mod collection;
pub mod credential_status;
pub mod metadata;
pub mod mint;
pub mod wallet;

pub use collection::CollectionService;
pub use credential_status::CredentialStatusNotifier;
pub use mint::MintService;
pub use wallet::WalletLister;
