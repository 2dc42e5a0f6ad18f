//! The `products/update` webhook endpoint: verify, parse, plan, execute.
//!
//! The handler is a thin orchestrator. Only three things abort an invocation:
//! a bad signature, an unparsable body, and (at startup, not here) missing
//! credentials. Everything else degrades to per-variant skips or per-decision
//! failures, and the response reports mixed outcomes with an overall success.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use citydeals_core::{plan, Decision, Product};
use citydeals_shopify::product_gid;

use crate::api::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::executor::{execute, DecisionOutcome};
use crate::middleware::RequestId;
use crate::verify::{verify_webhook_hmac, SIGNATURE_HEADER};

#[derive(Debug, Serialize)]
pub(super) struct ProductsUpdateData {
    pub product_id: i64,
    pub decisions: Vec<Decision>,
    pub results: Vec<DecisionOutcome>,
}

pub(super) async fn handle(
    State(state): State<AppState>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let config = &state.config;

    if config.skip_hmac_verification {
        tracing::warn!("webhook signature verification BYPASSED (CITYDEALS_SKIP_HMAC)");
    } else {
        let supplied = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !verify_webhook_hmac(&body, supplied, &config.api_secret) {
            tracing::warn!("webhook signature verification failed");
            return ApiError::new(request_id, "unauthorized", "invalid webhook signature")
                .into_response();
        }
    }

    let product: Product = match serde_json::from_slice(&body) {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!(error = %e, "unparsable webhook payload");
            return ApiError::new(request_id, "bad_request", "unparsable webhook payload")
                .into_response();
        }
    };

    tracing::info!(
        product_id = product.id,
        variants = product.variants.len(),
        "processing product update"
    );

    let decisions = plan(&product, &config.sync);
    let gid = product_gid(product.id);
    let results = execute(state.admin.as_ref(), &gid, &decisions).await;

    let failed = results.iter().filter(|r| !r.ok).count();
    if failed > 0 {
        tracing::warn!(
            product_id = product.id,
            failed,
            total = results.len(),
            "some decisions failed to apply"
        );
    }

    Json(ApiResponse {
        data: ProductsUpdateData {
            product_id: product.id,
            decisions,
            results,
        },
        meta: ResponseMeta::new(request_id),
    })
    .into_response()
}
