//! Response types for `GET /products/search`.
//!
//! ## Observed shape
//!
//! The page payload is a bare JSON array of products, not an envelope.
//! An empty search result has been seen both as `[]` and as `null`.
//!
//! ### `variants`
//! Normally an array; `null` on some catalog entries with no purchasable
//! configuration. Modeled as `Option<Vec<_>>`.
//!
//! ### `price`
//! A decimal string (`"30.00"`) on most variants, occasionally a bare JSON
//! number. Both are accepted and kept as text.
//!
//! ### `image`
//! `null` when the product has no primary image. When present, `src` may
//! be empty.

use serde::{Deserialize, Deserializer};

/// A single product from the search endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiProduct {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub variants: Option<Vec<ApiVariant>>,

    #[serde(default)]
    pub image: Option<ApiImage>,
}

/// A purchasable variant of an [`ApiProduct`].
#[derive(Debug, Deserialize)]
pub struct ApiVariant {
    pub id: i64,

    /// Owning product id. Absent on some entries; the parent id is used instead.
    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub title: String,

    #[serde(default, deserialize_with = "price_as_text")]
    pub price: String,
}

/// Primary product image.
#[derive(Debug, Deserialize)]
pub struct ApiImage {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub src: Option<String>,
}

fn price_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(s) => s,
        RawPrice::Number(n) => n.to_string(),
        RawPrice::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_string_and_number() {
        let v: ApiVariant =
            serde_json::from_str(r#"{"id":1,"product_id":2,"title":"S","price":"9.50"}"#).unwrap();
        assert_eq!(v.price, "9.50");
        let v: ApiVariant =
            serde_json::from_str(r#"{"id":1,"product_id":2,"title":"S","price":12.5}"#).unwrap();
        assert_eq!(v.price, "12.5");
    }

    #[test]
    fn price_null_becomes_empty() {
        let v: ApiVariant = serde_json::from_str(r#"{"id":1,"price":null}"#).unwrap();
        assert_eq!(v.price, "");
        assert!(v.product_id.is_none());
    }

    #[test]
    fn product_tolerates_null_variants_and_image() {
        let p: ApiProduct =
            serde_json::from_str(r#"{"id":77,"title":"Mug","variants":null,"image":null}"#)
                .unwrap();
        assert!(p.variants.is_none());
        assert!(p.image.is_none());
    }
}
