//! Conversion from search-endpoint shapes to [`shelf_core::Product`].

use shelf_core::{Product, ProductImage, Variant};

use crate::types::{ApiImage, ApiProduct, ApiVariant};

/// Normalizes a raw [`ApiProduct`] into a [`Product`].
///
/// Missing variant lists become empty, variants without a `product_id`
/// inherit the parent id, and images without a source are dropped so the
/// placeholder asset is used downstream.
#[must_use]
pub fn normalize_product(product: ApiProduct) -> Product {
    let product_id = product.id;
    let variants = product
        .variants
        .unwrap_or_default()
        .into_iter()
        .map(|v| normalize_variant(v, product_id))
        .collect();

    Product {
        id: product_id,
        title: product.title,
        image: product.image.and_then(|img| normalize_image(img, product_id)),
        variants,
    }
}

fn normalize_variant(variant: ApiVariant, parent_id: i64) -> Variant {
    Variant {
        id: variant.id,
        product_id: variant.product_id.unwrap_or(parent_id),
        title: variant.title,
        price: variant.price,
    }
}

fn normalize_image(image: ApiImage, parent_id: i64) -> Option<ProductImage> {
    let src = image.src.filter(|s| !s.trim().is_empty())?;
    Some(ProductImage {
        id: image.id.unwrap_or_default(),
        product_id: image.product_id.unwrap_or(parent_id),
        src,
    })
}
