//! Shopify Admin GraphQL client for collection membership mutations.
//!
//! Both operations (`collectionAddProducts` / `collectionRemoveProducts`) are
//! idempotent on the Shopify side: adding an already-present product or
//! removing an absent one succeeds as a no-op, so callers never need to read
//! current membership before mutating.

mod client;
mod error;
mod mutator;
mod types;

pub use client::{product_gid, AdminClient, ADMIN_API_VERSION};
pub use error::AdminError;
pub use mutator::CollectionMutator;
pub use types::UserError;
