//! Reconciliation executor: applies planned decisions against the Admin API.
//!
//! Decisions are mutually independent (different collections), so one
//! failure never cancels or blocks another; each failure is captured into
//! that decision's outcome and the rest still run. There is no rollback:
//! the next webhook delivery re-plans from current state and self-heals.

use citydeals_core::{Action, City, Decision};
use citydeals_shopify::CollectionMutator;
use serde::Serialize;

/// Per-decision execution result, reported in the webhook response.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionOutcome {
    pub city: City,
    pub action: Action,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Executes each decision once, in order, collecting one outcome per decision.
///
/// Mutations are dispatched sequentially; outcome order always matches
/// decision order. Field-level user errors from a mutation are logged as
/// warnings and do not fail that decision.
pub async fn execute<M: CollectionMutator>(
    mutator: &M,
    product_gid: &str,
    decisions: &[Decision],
) -> Vec<DecisionOutcome> {
    let mut outcomes = Vec::with_capacity(decisions.len());

    for decision in decisions {
        let result = match decision.action {
            Action::Add => {
                mutator
                    .add_to_collection(&decision.collection_id, product_gid)
                    .await
            }
            Action::Remove => {
                mutator
                    .remove_from_collection(&decision.collection_id, product_gid)
                    .await
            }
        };

        match result {
            Ok(warnings) => {
                for warning in &warnings {
                    tracing::warn!(
                        city = %decision.city,
                        action = ?decision.action,
                        field = ?warning.field,
                        message = %warning.message,
                        "collection mutation reported a user error"
                    );
                }
                outcomes.push(DecisionOutcome {
                    city: decision.city,
                    action: decision.action,
                    ok: true,
                    error: None,
                });
            }
            Err(e) => {
                tracing::error!(
                    city = %decision.city,
                    action = ?decision.action,
                    collection_id = %decision.collection_id,
                    error = %e,
                    "collection mutation failed"
                );
                outcomes.push(DecisionOutcome {
                    city: decision.city,
                    action: decision.action,
                    ok: false,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    outcomes
}
