//! Draft-then-commit input for a single product or variant discount.
//!
//! The draft lives here, not in the store. Nothing reaches the
//! [`ProductStore`] until [`DiscountEditor::commit`] succeeds or
//! [`DiscountEditor::clear`] is called.

use shelf_core::{Discount, DiscountKind};

use crate::store::ProductStore;

/// What the editor writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountTarget {
    Product(i64),
    Variant { product_id: i64, variant_id: i64 },
}

impl DiscountTarget {
    fn current(self, store: &ProductStore) -> Option<Discount> {
        match self {
            DiscountTarget::Product(id) => store.find(id)?.discount,
            DiscountTarget::Variant {
                product_id,
                variant_id,
            } => store
                .find(product_id)?
                .variants
                .iter()
                .find(|v| v.id == variant_id)?
                .discount,
        }
    }

    fn write(self, store: &mut ProductStore, discount: Option<Discount>) {
        match self {
            DiscountTarget::Product(id) => store.set_product_discount(id, discount),
            DiscountTarget::Variant {
                product_id,
                variant_id,
            } => store.set_variant_discount(product_id, variant_id, discount),
        }
    }
}

/// How the editor should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorView {
    /// No discount and not editing: a single "Add Discount" action.
    Add,
    /// Numeric input plus a type selector showing the current draft.
    Editing { kind: DiscountKind, value: String },
    /// Read-only committed discount with a clear action.
    Set(Discount),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountEditor {
    target: DiscountTarget,
    editing: bool,
    draft_kind: DiscountKind,
    draft_value: String,
}

impl DiscountEditor {
    #[must_use]
    pub fn new(target: DiscountTarget) -> Self {
        Self {
            target,
            editing: false,
            draft_kind: DiscountKind::default(),
            draft_value: String::new(),
        }
    }

    #[must_use]
    pub fn target(&self) -> DiscountTarget {
        self.target
    }

    /// A committed discount in `store` wins over any open draft.
    #[must_use]
    pub fn view(&self, store: &ProductStore) -> EditorView {
        if let Some(discount) = self.target.current(store) {
            EditorView::Set(discount)
        } else if self.editing {
            EditorView::Editing {
                kind: self.draft_kind,
                value: self.draft_value.clone(),
            }
        } else {
            EditorView::Add
        }
    }

    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn set_draft_value(&mut self, value: impl Into<String>) {
        self.draft_value = value.into();
    }

    pub fn set_draft_kind(&mut self, kind: DiscountKind) {
        self.draft_kind = kind;
    }

    /// Writes the draft to the store. Returns `false`, leaving everything
    /// as it was, when the draft value is empty or not a finite number.
    pub fn commit(&mut self, store: &mut ProductStore) -> bool {
        let Some(value) = parse_draft(&self.draft_value) else {
            tracing::debug!(discount_target = ?self.target, draft = %self.draft_value, "discount draft rejected");
            return false;
        };
        let discount = Discount {
            kind: self.draft_kind,
            value,
        };
        self.target.write(store, Some(discount));
        self.editing = false;
        true
    }

    /// Removes the committed discount and returns to the add state.
    pub fn clear(&mut self, store: &mut ProductStore) {
        self.target.write(store, None);
        self.editing = false;
        self.draft_kind = DiscountKind::default();
        self.draft_value.clear();
    }
}

fn parse_draft(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
