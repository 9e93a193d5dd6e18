//! Certmint vendor gateway
//!
//! Outbound HTTP calls to the minting service and the on-chain metadata indexer.
//! Callers depend on the [`VendorGateway`] trait; [`HttpVendorGateway`] is the
//! production implementation.

pub mod client;
pub mod error;
pub mod gateway;
pub mod indexer;
pub mod minting;

pub use client::{HttpVendorGateway, VendorEndpoints};
pub use error::VendorError;
pub use gateway::{AddressAssetRow, MintReceipt, UploadedAsset, VendorGateway, WalletAssetRow};
pub use minting::{MintRequest, TINY_PNG_B64};
