//! City classification for variants.
//!
//! Classification is lossy and typo-tolerant by design: a variant title like
//! `"Jeddah / 1kg"` or a metafield value with a known misspelling must still
//! land in the right city bucket. Anything that matches no known fragment is
//! unrecognized and excluded from planning.

use serde::Serialize;

use crate::product::Variant;

/// A recognized destination city. Derived per variant, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Jeddah,
    Riyadh,
    Dammam,
}

impl City {
    pub const ALL: [City; 3] = [City::Jeddah, City::Riyadh, City::Dammam];

    /// Substring fragments that classify text as this city.
    ///
    /// Each set carries the canonical name plus near-miss spellings seen in
    /// real store data (`jedddah` with a tripled `d`, dropped trailing
    /// letters on the others).
    fn fragments(self) -> &'static [&'static str] {
        match self {
            City::Jeddah => &["jeddah", "jedddah"],
            City::Riyadh => &["riyadh", "riyad"],
            City::Dammam => &["dammam", "damam"],
        }
    }

    /// Classifies free text into a city by normalized substring match.
    ///
    /// Returns `None` for empty input and for text matching no known
    /// fragment.
    #[must_use]
    pub fn from_text(raw: &str) -> Option<City> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        City::ALL
            .into_iter()
            .find(|city| city.fragments().iter().any(|f| normalized.contains(f)))
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            City::Jeddah => write!(f, "jeddah"),
            City::Riyadh => write!(f, "riyadh"),
            City::Dammam => write!(f, "dammam"),
        }
    }
}

/// Where to read a variant's city from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySource {
    /// Classify the variant display title.
    Title,
    /// Classify the value of the given variant metafield, falling back to
    /// the title when the metafield is absent or empty.
    Metafield { namespace: String, key: String },
}

/// Derives a city for one variant according to the configured source.
///
/// In metafield mode, a present non-empty metafield value is authoritative:
/// if it classifies to no known city the variant is unrecognized, even when
/// the title would have matched. The title fallback applies only when the
/// metafield itself is missing or empty.
#[must_use]
pub fn classify_city(variant: &Variant, source: &CitySource) -> Option<City> {
    match source {
        CitySource::Title => City::from_text(&variant.title),
        CitySource::Metafield { namespace, key } => match variant.metafield(namespace, key) {
            Some(value) if !value.trim().is_empty() => City::from_text(value),
            _ => City::from_text(&variant.title),
        },
    }
}

/// Lowercases, collapses internal whitespace, and trims.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
