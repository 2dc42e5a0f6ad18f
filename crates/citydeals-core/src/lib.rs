mod app_config;
mod city;
mod config;
mod error;
mod plan;
mod product;
mod promo;

pub use app_config::{AppConfig, CityCollections, Environment, SyncConfig};
pub use city::{classify_city, normalize, City, CitySource};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use plan::{plan, Action, Decision};
pub use product::{parse_money, Metafield, MoneyField, Product, Variant};
pub use promo::{classify_promo, PromoSignal, PromoSource};
