use crate::app_config::{AppConfig, CityCollections, Environment, SyncConfig};
use crate::city::CitySource;
use crate::promo::PromoSource;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|s| !s.is_empty()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str| -> Result<bool, ConfigError> {
        match or_default(var, "0").to_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected 0/1/true/false, got {other:?}"),
            }),
        }
    };

    let shopify_shop = require("SHOPIFY_SHOP")?;
    let admin_access_token = require("SHOPIFY_ADMIN_ACCESS_TOKEN")?;
    let api_secret = require("SHOPIFY_API_SECRET")?;

    let env = parse_environment(&or_default("CITYDEALS_ENV", "development"));

    let bind_addr = parse_addr("CITYDEALS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CITYDEALS_LOG_LEVEL", "info");

    let city_source = match or_default("CITYDEALS_CITY_SOURCE", "title")
        .to_lowercase()
        .as_str()
    {
        "title" => CitySource::Title,
        "metafield" => CitySource::Metafield {
            namespace: or_default("CITYDEALS_CITY_METAFIELD_NAMESPACE", "custom"),
            key: or_default("CITYDEALS_CITY_METAFIELD_KEY", "city"),
        },
        other => {
            return Err(ConfigError::InvalidEnvVar {
                var: "CITYDEALS_CITY_SOURCE".to_string(),
                reason: format!("unknown mode {other:?}; expected \"title\" or \"metafield\""),
            })
        }
    };

    let promo_source = match or_default("CITYDEALS_PROMO_SOURCE", "price")
        .to_lowercase()
        .as_str()
    {
        "price" => PromoSource::Price,
        "metafield" => PromoSource::Metafield {
            namespace: or_default("CITYDEALS_PROMO_METAFIELD_NAMESPACE", "custom"),
            key: or_default("CITYDEALS_PROMO_METAFIELD_KEY", "promo_active"),
        },
        "tag" => PromoSource::Tag,
        other => {
            return Err(ConfigError::InvalidEnvVar {
                var: "CITYDEALS_PROMO_SOURCE".to_string(),
                reason: format!(
                    "unknown mode {other:?}; expected \"price\", \"metafield\", or \"tag\""
                ),
            })
        }
    };

    let collections = CityCollections {
        jeddah: optional("CITYDEALS_JEDDAH_COLLECTION_GID"),
        riyadh: optional("CITYDEALS_RIYADH_COLLECTION_GID"),
        dammam: optional("CITYDEALS_DAMMAM_COLLECTION_GID"),
    };

    let skip_hmac_verification = parse_bool("CITYDEALS_SKIP_HMAC")?;
    if skip_hmac_verification && env == Environment::Production {
        return Err(ConfigError::InvalidEnvVar {
            var: "CITYDEALS_SKIP_HMAC".to_string(),
            reason: "signature verification cannot be bypassed in production".to_string(),
        });
    }

    let admin_request_timeout_secs = parse_u64("CITYDEALS_ADMIN_REQUEST_TIMEOUT_SECS", "30")?;
    let admin_user_agent = or_default("CITYDEALS_ADMIN_USER_AGENT", "citydeals/0.1 (collection-sync)");

    Ok(AppConfig {
        shopify_shop,
        admin_access_token,
        api_secret,
        env,
        bind_addr,
        log_level,
        sync: SyncConfig {
            city_source,
            promo_source,
            collections,
        },
        skip_hmac_verification,
        admin_request_timeout_secs,
        admin_user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
