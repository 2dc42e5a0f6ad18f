//! Webhook signature verification.
//!
//! Shopify signs each delivery with a base64-encoded HMAC-SHA256 over the
//! exact raw body bytes, keyed by the app's API secret. Verification must run
//! against the unparsed body; re-serializing the JSON would change the bytes
//! and break the signature.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Header carrying the delivery signature. Header lookup is case-insensitive.
pub const SIGNATURE_HEADER: &str = "x-shopify-hmac-sha256";

/// Verifies a webhook delivery signature.
///
/// Returns `true` iff `supplied_signature` base64-decodes to exactly the
/// HMAC-SHA256 digest of `raw_body` under `secret`. Missing/empty signatures,
/// undecodable base64, and length mismatches all return `false`; the digest
/// comparison itself is constant-time. Total function: never panics on
/// malformed input.
#[must_use]
pub fn verify_webhook_hmac(raw_body: &[u8], supplied_signature: &str, secret: &str) -> bool {
    let supplied = supplied_signature.trim();
    if supplied.is_empty() {
        return false;
    }
    let Ok(decoded) = BASE64.decode(supplied) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(raw_body);
    let expected = mac.finalize().into_bytes();
    if decoded.len() != expected.len() {
        return false;
    }
    bool::from(expected.as_slice().ct_eq(decoded.as_slice()))
}
