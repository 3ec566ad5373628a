pub mod app_config;
pub mod config;
pub mod discount;
pub mod error;
pub mod format;
pub mod products;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use discount::{Discount, DiscountKind};
pub use error::ConfigError;
pub use format::format_price;
pub use products::{
    Product, ProductImage, SelectedProduct, SelectedVariant, Variant, PLACEHOLDER_IMAGE_SRC,
    PLACEHOLDER_TITLE,
};
