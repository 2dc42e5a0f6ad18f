use std::net::SocketAddr;

use crate::city::{City, CitySource};
use crate::promo::PromoSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Destination collection GIDs, one per managed city.
///
/// `None` means "no managed collection for this city": variants classifying
/// there are skipped during planning, which is intentional filtering rather
/// than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityCollections {
    pub jeddah: Option<String>,
    pub riyadh: Option<String>,
    pub dammam: Option<String>,
}

impl CityCollections {
    /// Resolves the destination collection GID for a city.
    #[must_use]
    pub fn get(&self, city: City) -> Option<&str> {
        match city {
            City::Jeddah => self.jeddah.as_deref(),
            City::Riyadh => self.riyadh.as_deref(),
            City::Dammam => self.dammam.as_deref(),
        }
    }
}

/// The classification and destination configuration threaded through
/// planning. One immutable value per invocation; never read ambiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub city_source: CitySource,
    pub promo_source: PromoSource,
    pub collections: CityCollections,
}

#[derive(Clone)]
pub struct AppConfig {
    /// Shop domain, e.g. `my-store.myshopify.com`.
    pub shopify_shop: String,
    pub admin_access_token: String,
    pub api_secret: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sync: SyncConfig,
    /// Skips webhook signature verification. Development/test only; config
    /// loading rejects it in production.
    pub skip_hmac_verification: bool,
    pub admin_request_timeout_secs: u64,
    pub admin_user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shopify_shop", &self.shopify_shop)
            .field("admin_access_token", &"[redacted]")
            .field("api_secret", &"[redacted]")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sync", &self.sync)
            .field("skip_hmac_verification", &self.skip_hmac_verification)
            .field("admin_request_timeout_secs", &self.admin_request_timeout_secs)
            .field("admin_user_agent", &self.admin_user_agent)
            .finish()
    }
}
