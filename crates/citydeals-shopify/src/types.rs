//! Wire types for the Admin GraphQL endpoint.

use serde::{Deserialize, Serialize};

/// A field-level `userErrors` entry from a collection mutation.
///
/// These are warnings, not failures: Shopify reports them alongside a
/// successful mutation (e.g. a product reference it chose to ignore). The
/// client surfaces them for logging and treats the call as succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserError {
    /// Path of the input field the error refers to, when Shopify provides one.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlEnvelope {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

/// The payload shape shared by both collection mutations.
#[derive(Debug, Deserialize)]
pub(crate) struct MutationPayload {
    #[serde(rename = "userErrors", default)]
    pub user_errors: Vec<UserError>,
}
