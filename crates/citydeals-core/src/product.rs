//! Payload types for Shopify `products/update` webhook bodies.
//!
//! ## Observed shape from webhook deliveries
//!
//! ### Tags
//! The webhook (Admin API) sends `tags` as one comma-separated string, e.g.
//! `"deal-jeddah, summer, featured"`, unlike the public `products.json`
//! endpoint, which returns an array. `#[serde(default)]` covers untagged
//! products, which arrive as `""` or with the field absent.
//!
//! ### Prices
//! `price` and `compare_at_price` are usually decimal strings (`"80.00"`),
//! but test harnesses and older API versions deliver bare JSON numbers.
//! [`MoneyField`] accepts both; `compare_at_price` is `null` when the variant
//! has no sale price.
//!
//! ### Metafields
//! Only present when the store pushes variant metafields into the webhook
//! payload via a custom app configuration; absent for most stores. Missing
//! lists default to empty.

use serde::Deserialize;

/// A product as delivered by the `products/update` webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Shopify numeric product ID (e.g., `6789012345678`).
    pub id: i64,

    /// Comma/space-separated tag text, e.g. `"deal-jeddah, summer"`.
    #[serde(default)]
    pub tags: String,

    /// All variants of the product, in storefront order. Absent on some
    /// partial payloads; treated as an empty list, not an error.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A single purchasable variant of a [`Product`].
#[derive(Debug, Clone, Deserialize)]
pub struct Variant {
    /// Shopify numeric variant ID.
    pub id: i64,

    /// Display title. May be a bare city (`"Riyadh"`) or a composite like
    /// `"Jeddah / 1kg"` with option values joined by ` / `.
    #[serde(default)]
    pub title: String,

    /// Current price; decimal string or bare number depending on source.
    #[serde(default)]
    pub price: Option<MoneyField>,

    /// Pre-sale comparison price, `null` when no sale is configured.
    #[serde(default)]
    pub compare_at_price: Option<MoneyField>,

    /// Variant metafields, when the store includes them in the payload.
    #[serde(default)]
    pub metafields: Vec<Metafield>,
}

impl Variant {
    /// Looks up a metafield value by namespace and key.
    ///
    /// Returns the first match in payload order, or `None` when no metafield
    /// with that namespace/key pair exists.
    #[must_use]
    pub fn metafield(&self, namespace: &str, key: &str) -> Option<&str> {
        self.metafields
            .iter()
            .find(|m| m.namespace == namespace && m.key == key)
            .map(|m| m.value.as_str())
    }
}

/// One key/value metafield entry attached to a variant.
#[derive(Debug, Clone, Deserialize)]
pub struct Metafield {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// A money value as it appears on the wire: decimal string or JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MoneyField {
    Number(f64),
    Text(String),
}

/// Parses an optional money field into a finite `f64`.
///
/// String values tolerate thousands separators (`"1,299.00"`) and surrounding
/// whitespace. Absent, empty, non-numeric, and non-finite values all yield
/// `None`, which downstream promo logic treats as "no usable price".
#[must_use]
pub fn parse_money(field: Option<&MoneyField>) -> Option<f64> {
    match field {
        None => None,
        Some(MoneyField::Number(n)) => n.is_finite().then_some(*n),
        Some(MoneyField::Text(s)) => {
            let cleaned = s.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}
