//! The merchant's ordered product selection.
//!
//! [`ProductStore`] is an ordinary owned value: whoever needs it gets a
//! reference passed in, and it changes only through the operations below.
//! Readers register a listener for the slice they render and are called
//! after each change that touches it.
//!
//! ## Positions
//!
//! `position` on every product (and every variant) mirrors its index.
//! Reorders and `replace_at` re-derive positions for the whole list.
//! `remove_product` deliberately leaves a gap; call [`ProductStore::renumber`]
//! afterwards when contiguous positions matter.
//!
//! ## Duplicate ids
//!
//! Placeholder ids are timestamps and can collide with catalog ids, so ids
//! are not assumed unique. Id-addressed operations apply to every matching row.

use shelf_core::{Discount, Product, SelectedProduct};

use crate::error::StoreError;

/// Which part of the store a listener reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    /// Notified after every change.
    List,
    /// Notified when a row with this id is inserted, removed, moved or edited.
    Product(i64),
}

/// Handle returned by [`ProductStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Where a confirmed picker selection goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Append,
    /// Replace the row at this index (usually a placeholder).
    Replace(usize),
}

type Callback = Box<dyn FnMut(&[SelectedProduct])>;

struct Listener {
    id: ListenerId,
    slice: Slice,
    callback: Callback,
}

#[derive(Default)]
pub struct ProductStore {
    products: Vec<SelectedProduct>,
    listeners: Vec<Listener>,
    next_listener_id: u64,
}

impl std::fmt::Debug for ProductStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductStore")
            .field("products", &self.products)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn products(&self) -> &[SelectedProduct] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SelectedProduct> {
        self.products.get(index)
    }

    /// The first row with `id`.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&SelectedProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// `true` when every product and variant `position` equals its index.
    #[must_use]
    pub fn positions_consistent(&self) -> bool {
        self.products.iter().enumerate().all(|(idx, p)| {
            p.position == idx
                && p.variants
                    .iter()
                    .enumerate()
                    .all(|(vidx, v)| v.position == vidx)
        })
    }

    // ── Listeners ─────────────────────────────────────────────────────

    pub fn subscribe<F>(&mut self, slice: Slice, callback: F) -> ListenerId
    where
        F: FnMut(&[SelectedProduct]) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push(Listener {
            id,
            slice,
            callback: Box::new(callback),
        });
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, touched: &[i64]) {
        let products = &self.products;
        for listener in &mut self.listeners {
            let interested = match listener.slice {
                Slice::List => true,
                Slice::Product(id) => touched.contains(&id),
            };
            if interested {
                (listener.callback)(products);
            }
        }
    }

    // ── Products ──────────────────────────────────────────────────────

    /// Appends `product` at the end of the list.
    pub fn add_product(&mut self, product: Product) {
        let selected = SelectedProduct::from_product(product, self.products.len());
        self.push(selected);
    }

    /// Appends an empty placeholder row and returns its id.
    pub fn add_placeholder(&mut self) -> i64 {
        let placeholder = SelectedProduct::placeholder_now();
        let id = placeholder.id;
        self.push(placeholder);
        id
    }

    fn push(&mut self, mut product: SelectedProduct) {
        product.position = self.products.len();
        tracing::debug!(id = product.id, position = product.position, "product added");
        let id = product.id;
        self.products.push(product);
        self.notify(&[id]);
    }

    /// Removes every row with `id`. Positions of the remaining rows are left
    /// as they were.
    pub fn remove_product(&mut self, id: i64) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = before - self.products.len();
        if removed == 0 {
            return;
        }
        tracing::debug!(id, removed, "product removed");
        self.notify(&[id]);
    }

    /// Re-derives every product `position` from its index.
    pub fn renumber(&mut self) {
        let touched: Vec<i64> = self
            .products
            .iter()
            .enumerate()
            .filter(|(idx, p)| p.position != *idx)
            .map(|(_, p)| p.id)
            .collect();
        if touched.is_empty() {
            return;
        }
        renumber_products(&mut self.products);
        self.notify(&touched);
    }

    /// Moves the row at `from` so that it ends up at `to`, shifting the rows
    /// in between, then re-derives all positions. Equal indices are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfBounds`] if either index is not a
    /// current row; the list is left untouched.
    pub fn reorder_products(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.products.len();
        check_index(from, len)?;
        check_index(to, len)?;
        if from == to {
            return Ok(());
        }

        move_item(&mut self.products, from, to);
        renumber_products(&mut self.products);

        let (lo, hi) = (from.min(to), from.max(to));
        let touched: Vec<i64> = self.products[lo..=hi].iter().map(|p| p.id).collect();
        tracing::trace!(from, to, "products reordered");
        self.notify(&touched);
        Ok(())
    }

    /// Sets or clears (`None`) the discount on every row with `id`.
    pub fn set_product_discount(&mut self, id: i64, discount: Option<Discount>) {
        let mut changed = false;
        for product in self.products.iter_mut().filter(|p| p.id == id) {
            if product.discount != discount {
                product.discount = discount;
                changed = true;
            }
        }
        if changed {
            tracing::debug!(id, ?discount, "product discount updated");
            self.notify(&[id]);
        }
    }

    /// Sets or clears (`None`) the discount on variant `variant_id` of every
    /// row with `product_id`.
    pub fn set_variant_discount(
        &mut self,
        product_id: i64,
        variant_id: i64,
        discount: Option<Discount>,
    ) {
        let mut changed = false;
        let variants = self
            .products
            .iter_mut()
            .filter(|p| p.id == product_id)
            .flat_map(|p| p.variants.iter_mut())
            .filter(|v| v.id == variant_id);
        for variant in variants {
            if variant.discount != discount {
                variant.discount = discount;
                changed = true;
            }
        }
        if changed {
            tracing::debug!(product_id, variant_id, ?discount, "variant discount updated");
            self.notify(&[product_id]);
        }
    }

    /// Moves a variant within the variant list of the first row with
    /// `product_id` and re-derives its variant positions. Other rows,
    /// including later rows sharing the id, are not touched. Unknown ids
    /// and equal indices are no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfBounds`] if either index is outside
    /// that row's variant list; nothing is changed.
    pub fn reorder_variants(
        &mut self,
        product_id: i64,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError> {
        match self.products.iter().position(|p| p.id == product_id) {
            Some(row) => self.reorder_variants_at(row, from, to),
            None => Ok(()),
        }
    }

    /// Moves a variant within the variant list of the row at `row`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfBounds`] if `row` is not a current
    /// row or either variant index is outside its variant list.
    pub fn reorder_variants_at(
        &mut self,
        row: usize,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError> {
        check_index(row, self.products.len())?;
        let product = &mut self.products[row];
        let len = product.variants.len();
        check_index(from, len)?;
        check_index(to, len)?;
        if from == to {
            return Ok(());
        }

        move_item(&mut product.variants, from, to);
        product.renumber_variants();
        let id = product.id;
        tracing::trace!(row, product_id = id, from, to, "variants reordered");
        self.notify(&[id]);
        Ok(())
    }

    /// Replaces the row at `index` with `products` (possibly several, or
    /// none) and re-derives every position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfBounds`] if `index` is not a current
    /// row; the list is left untouched.
    pub fn replace_at(&mut self, index: usize, products: Vec<Product>) -> Result<(), StoreError> {
        check_index(index, self.products.len())?;

        let inserted: Vec<SelectedProduct> = products
            .into_iter()
            .enumerate()
            .map(|(offset, p)| SelectedProduct::from_product(p, index + offset))
            .collect();
        let inserted_len = inserted.len();
        let removed: Vec<SelectedProduct> =
            self.products.splice(index..=index, inserted).collect();
        renumber_products(&mut self.products);

        let mut touched: Vec<i64> = removed.iter().map(|p| p.id).collect();
        touched.extend(self.products[index..].iter().map(|p| p.id));
        tracing::debug!(index, inserted = inserted_len, "product replaced");
        self.notify(&touched);
        Ok(())
    }

    /// Appends `products` in order with a single notification.
    pub fn append_products(&mut self, products: Vec<Product>) {
        if products.is_empty() {
            return;
        }
        let start = self.products.len();
        self.products.extend(
            products
                .into_iter()
                .enumerate()
                .map(|(offset, p)| SelectedProduct::from_product(p, start + offset)),
        );
        let touched: Vec<i64> = self.products[start..].iter().map(|p| p.id).collect();
        tracing::debug!(count = touched.len(), "products appended");
        self.notify(&touched);
    }

    /// Applies a confirmed picker selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfBounds`] for a [`PickTarget::Replace`]
    /// index that is not a current row.
    pub fn apply_pick(&mut self, target: PickTarget, products: Vec<Product>) -> Result<(), StoreError> {
        match target {
            PickTarget::Append => {
                self.append_products(products);
                Ok(())
            }
            PickTarget::Replace(index) => self.replace_at(index, products),
        }
    }
}

fn check_index(index: usize, len: usize) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfBounds { index, len })
    }
}

/// Removes the element at `from` and reinserts it at `to`. Both indices
/// must be in bounds.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

fn renumber_products(products: &mut [SelectedProduct]) {
    for (idx, product) in products.iter_mut().enumerate() {
        product.position = idx;
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
