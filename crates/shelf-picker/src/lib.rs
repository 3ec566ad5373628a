pub mod loader;
pub mod selection;
pub mod session;
pub mod virtual_rows;

pub use loader::{IncrementalLoader, LoadState, PageOutcome, PageRequest};
pub use selection::SelectionSet;
pub use session::PickerSession;
pub use virtual_rows::{is_near_end, RowKind, RowLayout, Viewport, VirtualRow};
