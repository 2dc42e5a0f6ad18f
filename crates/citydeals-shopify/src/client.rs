//! HTTP client for the Shopify Admin GraphQL API.
//!
//! Wraps `reqwest` with Admin-specific error handling, access-token
//! management, and typed response deserialization. Top-level GraphQL `errors`
//! and non-2xx statuses fail the call; mutation-level `userErrors` are
//! returned to the caller as warnings.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::AdminError;
use crate::types::{GraphqlEnvelope, MutationPayload};
use crate::UserError;

/// Pinned Admin API version; bump deliberately when migrating.
pub const ADMIN_API_VERSION: &str = "2025-10";

const ADD_PRODUCTS_MUTATION: &str = "\
mutation AddToCollection($id: ID!, $pids: [ID!]!) {
  collectionAddProducts(id: $id, productIds: $pids) {
    userErrors { field message }
  }
}";

const REMOVE_PRODUCTS_MUTATION: &str = "\
mutation RemoveFromCollection($id: ID!, $pids: [ID!]!) {
  collectionRemoveProducts(id: $id, productIds: $pids) {
    userErrors { field message }
  }
}";

/// Formats a numeric product ID as the opaque GID the Admin API expects.
#[must_use]
pub fn product_gid(product_id: i64) -> String {
    format!("gid://shopify/Product/{product_id}")
}

/// Client for the Shopify Admin GraphQL API.
///
/// Manages the HTTP client, access token, and resolved endpoint URL. Use
/// [`AdminClient::new`] with the shop domain for production or
/// [`AdminClient::with_base_url`] to point at a mock server in tests.
pub struct AdminClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl AdminClient {
    /// Creates a client for the given shop domain (e.g.
    /// `my-store.myshopify.com`).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdminError::InvalidBaseUrl`] if the shop
    /// domain does not form a valid URL.
    pub fn new(
        shop: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AdminError> {
        let base = format!("https://{}", shop.trim_end_matches('/'));
        Self::with_base_url(&base, access_token, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdminError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        base_url: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AdminError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let raw = format!(
            "{}/admin/api/{ADMIN_API_VERSION}/graphql.json",
            base_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| AdminError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    /// Adds a product to a collection via `collectionAddProducts`.
    ///
    /// Idempotent at the destination: adding an already-present product is a
    /// successful no-op. Returns any field-level `userErrors` for logging.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Graphql`] if the response carries top-level errors.
    /// - [`AdminError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`AdminError::Http`] on network failure.
    /// - [`AdminError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn collection_add_products(
        &self,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError> {
        self.run_collection_mutation(
            "collectionAddProducts",
            ADD_PRODUCTS_MUTATION,
            collection_id,
            product_gid,
        )
        .await
    }

    /// Removes a product from a collection via `collectionRemoveProducts`.
    ///
    /// Idempotent at the destination: removing an absent product is a
    /// successful no-op. Returns any field-level `userErrors` for logging.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`AdminClient::collection_add_products`].
    pub async fn collection_remove_products(
        &self,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError> {
        self.run_collection_mutation(
            "collectionRemoveProducts",
            REMOVE_PRODUCTS_MUTATION,
            collection_id,
            product_gid,
        )
        .await
    }

    /// Posts one collection mutation and extracts its `userErrors`.
    ///
    /// `field` names the mutation's entry in the response `data` object.
    async fn run_collection_mutation(
        &self,
        field: &'static str,
        document: &'static str,
        collection_id: &str,
        product_gid: &str,
    ) -> Result<Vec<UserError>, AdminError> {
        let body = serde_json::json!({
            "query": document,
            "variables": { "id": collection_id, "pids": [product_gid] },
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdminError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let text = response.text().await?;
        let envelope: GraphqlEnvelope =
            serde_json::from_str(&text).map_err(|e| AdminError::Deserialize {
                context: field.to_string(),
                source: e,
            })?;

        if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
            let joined = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AdminError::Graphql(joined));
        }

        let payload = envelope
            .data
            .and_then(|mut data| data.get_mut(field).map(serde_json::Value::take))
            .ok_or_else(|| AdminError::Graphql(format!("response data missing {field}")))?;

        let payload: MutationPayload =
            serde_json::from_value(payload).map_err(|e| AdminError::Deserialize {
                context: field.to_string(),
                source: e,
            })?;

        Ok(payload.user_errors)
    }
}
