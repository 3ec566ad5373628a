use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::discount::Discount;

/// Local asset used whenever a product has no usable image source.
pub const PLACEHOLDER_IMAGE_SRC: &str = "/placeholder.svg";

/// Title shown on a placeholder row until the merchant picks a product.
pub const PLACEHOLDER_TITLE: &str = "Select Product";

/// A product image as returned by the catalog search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub src: String,
}

/// A single purchasable configuration of a [`Product`], e.g. a size or colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Unique within the parent product only.
    pub id: i64,
    /// Back-reference to the owning product.
    pub product_id: i64,
    pub title: String,
    /// Price as a decimal string, exactly as the catalog returns it (e.g. `"30.00"`).
    pub price: String,
}

/// A catalog product with its ordered variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Returns the total number of variants for this product.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Returns the image source, or [`PLACEHOLDER_IMAGE_SRC`] when the
    /// product has no image or the image source is empty.
    #[must_use]
    pub fn image_src(&self) -> &str {
        image_src_or_placeholder(self.image.as_ref())
    }
}

/// A variant inside the merchant's ordered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedVariant {
    pub id: i64,
    pub product_id: i64,
    pub title: String,
    pub price: String,
    /// Always equal to this variant's index within its parent's variant list.
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl SelectedVariant {
    #[must_use]
    pub fn from_variant(variant: Variant, position: usize) -> Self {
        Self {
            id: variant.id,
            product_id: variant.product_id,
            title: variant.title,
            price: variant.price,
            position,
            discount: None,
        }
    }
}

/// A product row in the merchant's ordered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedProduct {
    /// Not guaranteed unique: placeholder ids are timestamps and may collide
    /// with catalog ids.
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default)]
    pub variants: Vec<SelectedVariant>,
    /// Always equal to this product's index in the store's list.
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl SelectedProduct {
    /// Wraps a catalog product at `position`, numbering its variants in order.
    #[must_use]
    pub fn from_product(product: Product, position: usize) -> Self {
        let variants = product
            .variants
            .into_iter()
            .enumerate()
            .map(|(idx, v)| SelectedVariant::from_variant(v, idx))
            .collect();
        Self {
            id: product.id,
            title: product.title,
            image: product.image,
            variants,
            position,
            discount: None,
        }
    }

    /// An empty row awaiting a picker selection.
    #[must_use]
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            image: None,
            variants: Vec::new(),
            position: 0,
            discount: None,
        }
    }

    /// A placeholder whose id is the current wall-clock time in milliseconds.
    #[must_use]
    pub fn placeholder_now() -> Self {
        Self::placeholder(Utc::now().timestamp_millis())
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.variants.is_empty() && self.title == PLACEHOLDER_TITLE
    }

    /// The variant list is only expandable when there is more than one variant.
    #[must_use]
    pub fn has_multiple_variants(&self) -> bool {
        self.variants.len() > 1
    }

    #[must_use]
    pub fn image_src(&self) -> &str {
        image_src_or_placeholder(self.image.as_ref())
    }

    /// Re-derives every variant `position` from its current index.
    pub fn renumber_variants(&mut self) {
        for (idx, variant) in self.variants.iter_mut().enumerate() {
            variant.position = idx;
        }
    }
}

fn image_src_or_placeholder(image: Option<&ProductImage>) -> &str {
    match image {
        Some(img) if !img.src.trim().is_empty() => &img.src,
        _ => PLACEHOLDER_IMAGE_SRC,
    }
}
