//! Token name derivation for minted assets.
//!
//! The minting vendor accepts short ASCII identifiers only. A token name is the
//! filename stem folded to ASCII alphanumerics, followed by `_` and the first six
//! hex digits of the SHA-1 of the full original filename. The same filename always
//! yields the same token name; the file contents play no part.

use sha1::{Digest, Sha1};
use unicode_normalization::UnicodeNormalization;

/// Upper bound on the byte length of a token name.
pub const MAX_TOKEN_NAME_BYTES: usize = 32;

const HASH_SUFFIX_LEN: usize = 6;

/// Derive the vendor token name for an uploaded filename.
///
/// Total over all inputs: empty or fully non-ASCII names produce just the
/// separator and hash suffix.
pub fn token_name(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    };

    let digest = hex::encode(Sha1::digest(filename.as_bytes()));
    let suffix = &digest[..HASH_SUFFIX_LEN];

    // ASCII alphanumerics are one byte each, so a char budget is a byte budget.
    let base_budget = MAX_TOKEN_NAME_BYTES - 1 - HASH_SUFFIX_LEN;
    let base: String = stem
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(base_budget)
        .collect();

    format!("{}_{}", base, suffix)
}
