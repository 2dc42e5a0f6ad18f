//! Decision planning: folds per-variant signals into an ordered list of
//! add/remove operations against the configured per-city collections.

use serde::Serialize;

use crate::app_config::SyncConfig;
use crate::city::{classify_city, City};
use crate::product::Product;
use crate::promo::classify_promo;

/// The collection mutation a decision calls for. There is no no-op action:
/// the destination store is always told to include or exclude the product,
/// and both operations are idempotent there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Remove,
}

/// One planned mutation: put the product into (or take it out of) the
/// collection configured for `city`, based on one variant's promo signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub city: City,
    pub action: Action,
    /// Destination collection GID for the city.
    pub collection_id: String,
    /// The variant whose signal produced this decision.
    pub variant_id: i64,
    /// Parsed price, for observability. `None` when absent/unparsable.
    pub price: Option<f64>,
    /// Parsed compare-at price, for observability.
    pub compare_at_price: Option<f64>,
}

/// Plans the collection mutations for one webhook delivery.
///
/// Variants are processed in payload order and the output preserves that
/// order. Each variant is independent: two variants classifying to the same
/// city each produce their own decision. Variants with an unrecognized city,
/// and recognized cities with no configured destination collection, are
/// skipped (logged, not errors).
///
/// Pure given its inputs: calling this twice on the same payload and config
/// yields the same decision list.
#[must_use]
pub fn plan(product: &Product, config: &SyncConfig) -> Vec<Decision> {
    let mut decisions = Vec::with_capacity(product.variants.len());

    for variant in &product.variants {
        let Some(city) = classify_city(variant, &config.city_source) else {
            tracing::debug!(
                product_id = product.id,
                variant_id = variant.id,
                title = %variant.title,
                "variant matches no known city, skipping"
            );
            continue;
        };

        let signal = classify_promo(variant, product, city, &config.promo_source);
        tracing::debug!(
            product_id = product.id,
            variant_id = variant.id,
            city = %city,
            promo = signal.promo,
            price = ?signal.price,
            compare_at_price = ?signal.compare_at_price,
            "variant classified"
        );

        let Some(collection_id) = config.collections.get(city) else {
            tracing::warn!(
                product_id = product.id,
                variant_id = variant.id,
                city = %city,
                "no collection configured for city, skipping"
            );
            continue;
        };

        decisions.push(Decision {
            city,
            action: if signal.promo { Action::Add } else { Action::Remove },
            collection_id: collection_id.to_owned(),
            variant_id: variant.id,
            price: signal.price,
            compare_at_price: signal.compare_at_price,
        });
    }

    decisions
}
