use async_trait::async_trait;

use crate::{AdminClient, AdminError, UserError};

/// The seam between decision execution and the Admin API.
///
/// Implementations must be idempotent at the destination (the Shopify
/// collection mutations are); the executor calls them without reading current
/// membership first. Test doubles implement this to script per-call outcomes.
#[async_trait]
pub trait CollectionMutator: Send + Sync {
    /// Adds the product to the collection, returning field-level warnings.
    async fn add_to_collection(
        &self,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError>;

    /// Removes the product from the collection, returning field-level warnings.
    async fn remove_from_collection(
        &self,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError>;
}

#[async_trait]
impl CollectionMutator for AdminClient {
    async fn add_to_collection(
        &self,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError> {
        self.collection_add_products(collection_id, product_gid).await
    }

    async fn remove_from_collection(
        &self,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError> {
        self.collection_remove_products(collection_id, product_gid)
            .await
    }
}
