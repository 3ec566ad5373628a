use std::collections::{HashMap, HashSet};

use shelf_core::Product;

/// Checkbox state for one open picker: which variants of which products
/// are ticked.
///
/// A product with nothing ticked has no entry at all, so an empty set is
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: HashMap<i64, HashSet<i64>>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks every variant of `product`, or clears them all if every one is
    /// already ticked.
    pub fn toggle_all(&mut self, product: &Product) {
        if self.is_product_fully_selected(product) {
            self.selected.remove(&product.id);
            tracing::trace!(product_id = product.id, "deselected all variants");
            return;
        }

        if product.variants.is_empty() {
            return;
        }

        let entry = self.selected.entry(product.id).or_default();
        entry.extend(product.variants.iter().map(|v| v.id));
        tracing::trace!(
            product_id = product.id,
            count = entry.len(),
            "selected all variants"
        );
    }

    /// Flips a single variant. Removes the product's entry when its last
    /// variant is unticked.
    pub fn toggle_one(&mut self, product_id: i64, variant_id: i64) {
        let entry = self.selected.entry(product_id).or_default();
        if !entry.remove(&variant_id) {
            entry.insert(variant_id);
        }
        if entry.is_empty() {
            self.selected.remove(&product_id);
        }
    }

    /// `true` iff every variant of `product` is ticked. A product without
    /// variants is never fully selected.
    #[must_use]
    pub fn is_product_fully_selected(&self, product: &Product) -> bool {
        self.selected
            .get(&product.id)
            .is_some_and(|set| set.len() == product.variant_count())
    }

    #[must_use]
    pub fn is_variant_selected(&self, product_id: i64, variant_id: i64) -> bool {
        self.selected
            .get(&product_id)
            .is_some_and(|set| set.contains(&variant_id))
    }

    /// Ticked variant ids of one product, if any.
    #[must_use]
    pub fn selected_variants(&self, product_id: i64) -> Option<&HashSet<i64>> {
        self.selected.get(&product_id)
    }

    /// Total number of ticked variants across all products.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.values().map(HashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Copies of the products in `products` that have ticked variants, each
    /// keeping only those variants. Product and variant order follow `products`.
    #[must_use]
    pub fn materialize(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter_map(|product| {
                let chosen = self.selected.get(&product.id)?;
                let variants = product
                    .variants
                    .iter()
                    .filter(|v| chosen.contains(&v.id))
                    .cloned()
                    .collect();
                Some(Product {
                    id: product.id,
                    title: product.title.clone(),
                    image: product.image.clone(),
                    variants,
                })
            })
            .collect()
    }
}
