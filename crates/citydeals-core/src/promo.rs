//! Promo signal extraction.
//!
//! Exactly one strategy is active per invocation, chosen by configuration.
//! The dispatch is a single exhaustive match so adding a strategy is a
//! compile-time-checked change.

use crate::city::{normalize, City};
use crate::product::{parse_money, Product, Variant};

/// Where to read a variant's promo state from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoSource {
    /// Promo iff `compare_at_price` parses and strictly exceeds `price`.
    Price,
    /// Promo iff the given variant metafield's value is `"true"` or `"1"`
    /// (case-insensitive). Prices are still parsed for diagnostics.
    Metafield { namespace: String, key: String },
    /// Promo iff the product's tag text contains `deal-<city>`.
    Tag,
}

/// The outcome of promo classification for one variant.
///
/// `price` and `compare_at_price` carry whatever parsed from the variant, for
/// observability; they are `None` when absent, unparsable, or not applicable
/// to the active strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromoSignal {
    pub promo: bool,
    pub price: Option<f64>,
    pub compare_at_price: Option<f64>,
}

/// Classifies one variant's promo state under the active strategy.
#[must_use]
pub fn classify_promo(
    variant: &Variant,
    product: &Product,
    city: City,
    source: &PromoSource,
) -> PromoSignal {
    let price = parse_money(variant.price.as_ref());
    let compare_at_price = parse_money(variant.compare_at_price.as_ref());

    match source {
        PromoSource::Price => {
            let promo = match (price, compare_at_price) {
                (Some(p), Some(cap)) => cap > p,
                _ => false,
            };
            PromoSignal {
                promo,
                price,
                compare_at_price,
            }
        }
        PromoSource::Metafield { namespace, key } => {
            let value = variant
                .metafield(namespace, key)
                .map(normalize)
                .unwrap_or_default();
            PromoSignal {
                promo: value == "true" || value == "1",
                price,
                compare_at_price,
            }
        }
        PromoSource::Tag => PromoSignal {
            promo: normalize(&product.tags).contains(&format!("deal-{city}")),
            price: None,
            compare_at_price: None,
        },
    }
}
