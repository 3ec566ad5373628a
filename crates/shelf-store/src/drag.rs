//! Drag-to-reorder gesture: `Idle -> Dragging -> Idle`.
//!
//! Each hover over a different row of the same list reorders the store
//! immediately, so the dragged row follows the pointer. After a move the
//! dragged row lives at the hovered index, which becomes the new source.

use crate::error::StoreError;
use crate::store::ProductStore;

/// Which list a drag belongs to. Rows of one list are not drop targets
/// for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragScope {
    Products,
    /// The variant list of the product at this row index. Rows, not ids,
    /// identify the list since ids may repeat.
    Variants { row: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { scope: DragScope, source_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts dragging the row at `index`, replacing any gesture in progress.
    pub fn begin(&mut self, scope: DragScope, index: usize) {
        tracing::trace!(?scope, index, "drag started");
        self.state = DragState::Dragging {
            scope,
            source_index: index,
        };
    }

    /// Pointer is over row `target` of `scope`. Returns `Ok(true)` when the
    /// store was reordered.
    ///
    /// Hovering while idle, over another list, or over the dragged row itself
    /// does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfBounds`] if `target` or the tracked
    /// source index is outside the list; the gesture keeps its state.
    pub fn hover(
        &mut self,
        store: &mut ProductStore,
        scope: DragScope,
        target: usize,
    ) -> Result<bool, StoreError> {
        let DragState::Dragging {
            scope: active,
            source_index,
        } = self.state
        else {
            return Ok(false);
        };
        if active != scope || source_index == target {
            return Ok(false);
        }

        match scope {
            DragScope::Products => store.reorder_products(source_index, target)?,
            DragScope::Variants { row } => {
                store.reorder_variants_at(row, source_index, target)?;
            }
        }
        self.state = DragState::Dragging {
            scope,
            source_index: target,
        };
        Ok(true)
    }

    /// Drops the row, returning its final index.
    pub fn finish(&mut self) -> Option<usize> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { source_index, .. } => Some(source_index),
            DragState::Idle => None,
        }
    }

    /// Abandons the gesture. Moves already applied stay applied.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::{Product, Variant};

    use super::*;

    fn store_with(ids: &[i64]) -> ProductStore {
        let mut store = ProductStore::new();
        for id in ids {
            store.add_product(Product {
                id: *id,
                title: format!("Product {id}"),
                image: None,
                variants: (0..3)
                    .map(|v| Variant {
                        id: id * 10 + v,
                        product_id: *id,
                        title: format!("Variant {v}"),
                        price: "1.00".to_string(),
                    })
                    .collect(),
            });
        }
        store
    }

    fn ids(store: &ProductStore) -> Vec<i64> {
        store.products().iter().map(|p| p.id).collect()
    }

    #[test]
    fn hover_while_idle_does_nothing() {
        let mut store = store_with(&[1, 2]);
        let mut drag = DragGesture::new();
        assert_eq!(drag.hover(&mut store, DragScope::Products, 1), Ok(false));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn row_follows_pointer_across_hovers() {
        let mut store = store_with(&[1, 2, 3, 4]);
        let mut drag = DragGesture::new();
        drag.begin(DragScope::Products, 0);

        assert_eq!(drag.hover(&mut store, DragScope::Products, 1), Ok(true));
        assert_eq!(ids(&store), vec![2, 1, 3, 4]);
        assert_eq!(drag.hover(&mut store, DragScope::Products, 3), Ok(true));
        assert_eq!(ids(&store), vec![2, 3, 4, 1]);
        assert!(store.positions_consistent());

        assert_eq!(drag.finish(), Some(3));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn repeated_hover_on_same_row_is_idempotent() {
        let mut store = store_with(&[1, 2, 3]);
        let mut drag = DragGesture::new();
        drag.begin(DragScope::Products, 0);
        assert_eq!(drag.hover(&mut store, DragScope::Products, 2), Ok(true));
        for _ in 0..5 {
            assert_eq!(drag.hover(&mut store, DragScope::Products, 2), Ok(false));
        }
        assert_eq!(ids(&store), vec![2, 3, 1]);
    }

    #[test]
    fn hover_from_other_scope_is_ignored() {
        let mut store = store_with(&[1, 2]);
        let mut drag = DragGesture::new();
        drag.begin(DragScope::Variants { row: 0 }, 0);

        assert_eq!(drag.hover(&mut store, DragScope::Products, 1), Ok(false));
        assert_eq!(
            drag.hover(&mut store, DragScope::Variants { row: 1 }, 1),
            Ok(false)
        );
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn variant_drag_reorders_within_product() {
        let mut store = store_with(&[1, 2]);
        let mut drag = DragGesture::new();
        let scope = DragScope::Variants { row: 1 };
        drag.begin(scope, 2);
        assert_eq!(drag.hover(&mut store, scope, 0), Ok(true));

        let variants: Vec<i64> = store.products()[1].variants.iter().map(|v| v.id).collect();
        assert_eq!(variants, vec![22, 20, 21]);
        let untouched: Vec<i64> = store.products()[0].variants.iter().map(|v| v.id).collect();
        assert_eq!(untouched, vec![10, 11, 12]);
    }

    #[test]
    fn out_of_bounds_hover_keeps_gesture() {
        let mut store = store_with(&[1, 2]);
        let mut drag = DragGesture::new();
        drag.begin(DragScope::Products, 0);
        assert_eq!(
            drag.hover(&mut store, DragScope::Products, 7),
            Err(StoreError::IndexOutOfBounds { index: 7, len: 2 })
        );
        assert!(drag.is_dragging());
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn variant_drag_on_duplicate_id_moves_only_its_row() {
        let mut store = ProductStore::new();
        for variants in [&[40, 41, 42][..], &[50][..]] {
            store.add_product(Product {
                id: 4,
                title: "Product 4".to_string(),
                image: None,
                variants: variants
                    .iter()
                    .map(|v| Variant {
                        id: *v,
                        product_id: 4,
                        title: format!("Variant {v}"),
                        price: "1.00".to_string(),
                    })
                    .collect(),
            });
        }

        let mut drag = DragGesture::new();
        let scope = DragScope::Variants { row: 0 };
        drag.begin(scope, 2);
        assert_eq!(drag.hover(&mut store, scope, 0), Ok(true));

        let first: Vec<i64> = store.products()[0].variants.iter().map(|v| v.id).collect();
        let second: Vec<i64> = store.products()[1].variants.iter().map(|v| v.id).collect();
        assert_eq!(first, vec![42, 40, 41]);
        assert_eq!(second, vec![50]);
    }

    #[test]
    fn cancel_keeps_applied_moves() {
        let mut store = store_with(&[1, 2, 3]);
        let mut drag = DragGesture::new();
        drag.begin(DragScope::Products, 2);
        drag.hover(&mut store, DragScope::Products, 0).unwrap();
        drag.cancel();
        assert!(!drag.is_dragging());
        assert_eq!(drag.finish(), None);
        assert_eq!(ids(&store), vec![3, 1, 2]);
    }
}
