//! Deterministic rule-name derivation.
//!
//! The name is a pure function of the truthy transition kinds and their
//! direction values only. Duration, easing, fill mode and the target element
//! never participate, so calls that differ only in those reuse one rule.

use sha2::{Digest, Sha256};

use crate::catalog::TransitionCatalog;
use crate::options::TransitionOptions;

pub const RULE_NAME_PREFIX: &str = "transition-";

/// 128-bit hex digest of the token string. A truncated SHA-256 keeps names
/// short; the input domain is the finite catalog plus arbitrary direction
/// strings, so 128 bits is plenty.
fn digest_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(&digest[..16])
}

/// Derive the cache key / CSS rule identifier for an option set.
///
/// Truthy kinds are sorted alphabetically by key and concatenated as
/// `@<key>=<value>` tokens before hashing, so source-object key order and
/// irrelevant fields cannot change the result. Direction values are hashed
/// as supplied (after bare-`true` normalization); an unrecognized direction
/// therefore names a distinct rule even though its keyframes fall back to the
/// kind's default.
pub fn derive_rule_name(catalog: &TransitionCatalog, options: &TransitionOptions) -> String {
    let mut pairs: Vec<(&str, &str)> = options
        .active(catalog)
        .into_iter()
        .map(|(kind, direction)| (kind.key(), direction))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut tokens = String::new();
    for (key, value) in pairs {
        tokens.push('@');
        tokens.push_str(key);
        tokens.push('=');
        tokens.push_str(value);
    }

    format!("{RULE_NAME_PREFIX}{}", digest_hex(&tokens))
}
