pub mod discount_editor;
pub mod drag;
pub mod error;
pub mod store;

pub use discount_editor::{DiscountEditor, DiscountTarget, EditorView};
pub use drag::{DragGesture, DragScope, DragState};
pub use error::StoreError;
pub use store::{ListenerId, PickTarget, ProductStore, Slice};
