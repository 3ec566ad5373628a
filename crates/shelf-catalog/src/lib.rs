pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod source;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::normalize_product;
pub use pagination::is_last_page;
pub use source::PageSource;
pub use types::{ApiImage, ApiProduct, ApiVariant};
