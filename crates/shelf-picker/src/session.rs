//! One open product-picker dialog: search results, scroll window and checkboxes.

use shelf_catalog::{CatalogError, PageSource};
use shelf_core::{AppConfig, Product};

use crate::loader::{IncrementalLoader, PageOutcome, PageRequest};
use crate::selection::SelectionSet;
use crate::virtual_rows::{
    RowLayout, Viewport, VirtualRow, DEFAULT_OVERSCAN, NEAR_END_THRESHOLD_PX,
};

#[derive(Debug)]
pub struct PickerSession {
    loader: IncrementalLoader,
    selection: SelectionSet,
    viewport: Viewport,
    overscan: usize,
    near_end_px: f64,
}

impl PickerSession {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            loader: IncrementalLoader::new(page_size),
            selection: SelectionSet::new(),
            viewport: Viewport::default(),
            overscan: DEFAULT_OVERSCAN,
            near_end_px: NEAR_END_THRESHOLD_PX,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            overscan: config.picker_overscan,
            near_end_px: config.picker_near_end_px,
            ..Self::new(config.catalog_page_size)
        }
    }

    #[must_use]
    pub fn loader(&self) -> &IncrementalLoader {
        &self.loader
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Begins loading the first page when the dialog opens.
    pub fn open(&mut self) -> Option<PageRequest> {
        self.loader.begin_next_page()
    }

    /// Changes the search term; the checkbox state is kept.
    pub fn set_search(&mut self, term: &str) -> Option<PageRequest> {
        let request = self.loader.set_search(term);
        if request.is_some() {
            self.viewport.scroll_offset = 0.0;
        }
        request
    }

    /// Records a scroll event and requests the next page if the viewport
    /// is near the end of the list. At most one request per event.
    pub fn on_scroll(&mut self, viewport: Viewport) -> Option<PageRequest> {
        self.viewport = viewport;
        if self.loader.is_fetching() || !self.loader.has_more() {
            return None;
        }
        if self.layout().is_near_end(viewport, self.near_end_px) {
            self.loader.begin_next_page()
        } else {
            None
        }
    }

    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Vec<Product>, CatalogError>,
    ) -> PageOutcome {
        self.loader.complete(request, result)
    }

    /// Performs `request` against `source` and applies the result.
    pub async fn fetch<S: PageSource>(&mut self, source: &S, request: &PageRequest) -> PageOutcome {
        let result = source
            .fetch_page(&request.term, request.page, request.limit)
            .await;
        self.complete(request, result)
    }

    #[must_use]
    pub fn layout(&self) -> RowLayout {
        RowLayout::new(self.loader.items(), self.loader.has_more())
    }

    /// Rows to render for the current viewport.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VirtualRow> {
        self.layout().visible_rows(self.viewport, self.overscan)
    }

    /// Product-level checkbox. Unknown product ids are ignored.
    pub fn toggle_all(&mut self, product_id: i64) {
        if let Some(product) = self.loader.items().iter().find(|p| p.id == product_id) {
            self.selection.toggle_all(product);
        }
    }

    pub fn toggle_one(&mut self, product_id: i64, variant_id: i64) {
        self.selection.toggle_one(product_id, variant_id);
    }

    #[must_use]
    pub fn is_product_fully_selected(&self, product: &Product) -> bool {
        self.selection.is_product_fully_selected(product)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    /// The loaded products with ticked variants, filtered to those variants.
    #[must_use]
    pub fn confirm(&self) -> Vec<Product> {
        let picked = self.selection.materialize(self.loader.items());
        tracing::debug!(
            products = picked.len(),
            variants = self.selection.selected_count(),
            "picker selection confirmed"
        );
        picked
    }
}
