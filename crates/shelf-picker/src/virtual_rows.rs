//! Windowing for the picker's variable-height product list.
//!
//! Row heights are estimates: a product row is a header plus one line per
//! variant. When more pages exist a synthetic loading row is appended after
//! the last product and takes part in layout like any other row.
//!
//! Offsets are kept as a prefix-sum table so the visible window is found
//! with two binary searches.

use shelf_core::Product;

/// Height of a product row's header line.
pub const PRODUCT_ROW_BASE_HEIGHT: f64 = 60.0;
/// Added to a product row per variant.
pub const VARIANT_ROW_HEIGHT: f64 = 48.0;
/// Height of the trailing loading row.
pub const LOADING_ROW_HEIGHT: f64 = 60.0;
/// Rows rendered beyond each edge of the viewport.
pub const DEFAULT_OVERSCAN: usize = 5;
/// Distance from the end of content at which the next page is requested.
pub const NEAR_END_THRESHOLD_PX: f64 = 100.0;

/// Estimated height of a product row with `variant_count` variants.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn estimate_row_height(variant_count: usize) -> f64 {
    PRODUCT_ROW_BASE_HEIGHT + variant_count as f64 * VARIANT_ROW_HEIGHT
}

/// `true` when the bottom of the viewport is within `threshold` pixels of
/// the end of the content.
#[must_use]
pub fn is_near_end(
    scroll_offset: f64,
    viewport_height: f64,
    content_height: f64,
    threshold: f64,
) -> bool {
    scroll_offset + viewport_height >= content_height - threshold
}

/// Scroll position and visible height of the list container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(scroll_offset: f64, height: f64) -> Self {
        Self {
            scroll_offset: scroll_offset.max(0.0),
            height: height.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Index into the product list the layout was built from.
    Product(usize),
    Loading,
}

/// A row inside the rendered window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualRow {
    pub index: usize,
    pub kind: RowKind,
    /// Distance from the top of the content to the top of this row.
    pub start: f64,
    pub size: f64,
}

impl VirtualRow {
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}

/// Cumulative layout of the picker list.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// `offsets[i]` is the top of row `i`; the final entry is the total height.
    offsets: Vec<f64>,
    product_rows: usize,
}

impl RowLayout {
    /// Lays out `products`, plus a loading row when `has_more` is set.
    #[must_use]
    pub fn new(products: &[Product], has_more: bool) -> Self {
        let heights = products.iter().map(|p| estimate_row_height(p.variant_count()));
        Self::from_heights(heights, has_more)
    }

    /// Lays out rows with explicit product-row heights.
    #[must_use]
    pub fn from_heights<I>(heights: I, has_more: bool) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut offsets = vec![0.0];
        let mut total = 0.0;
        for h in heights {
            total += h.max(0.0);
            offsets.push(total);
        }
        let product_rows = offsets.len() - 1;
        if has_more {
            offsets.push(total + LOADING_ROW_HEIGHT);
        }
        Self {
            offsets,
            product_rows,
        }
    }

    /// Number of rows including the loading row.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.offsets.len() - 1
    }

    #[must_use]
    pub fn has_loading_row(&self) -> bool {
        self.row_count() > self.product_rows
    }

    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.offsets.last().copied().unwrap_or_default()
    }

    /// The row at `index`, or `None` past the end.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<VirtualRow> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        let kind = if index < self.product_rows {
            RowKind::Product(index)
        } else {
            RowKind::Loading
        };
        Some(VirtualRow {
            index,
            kind,
            start,
            size: end - start,
        })
    }

    /// Rows intersecting the viewport, widened by `overscan` rows on each side.
    ///
    /// `overscan` is a row count, not a pixel band.
    #[must_use]
    pub fn visible_rows(&self, viewport: Viewport, overscan: usize) -> Vec<VirtualRow> {
        let count = self.row_count();
        if count == 0 {
            return Vec::new();
        }

        let top = viewport.scroll_offset;
        let bottom = top + viewport.height;
        let ends = &self.offsets[1..];
        let starts = &self.offsets[..count];

        // First row whose bottom edge is below the viewport top.
        let first = ends.partition_point(|&end| end <= top).min(count - 1);
        // One past the last row whose top edge is above the viewport bottom.
        let last_exclusive = starts
            .partition_point(|&start| start < bottom)
            .max(first + 1);

        let from = first.saturating_sub(overscan);
        let to = last_exclusive.saturating_add(overscan).min(count);

        (from..to).filter_map(|i| self.row(i)).collect()
    }

    /// `true` when `viewport` is within `threshold` pixels of the end of this layout.
    #[must_use]
    pub fn is_near_end(&self, viewport: Viewport, threshold: f64) -> bool {
        is_near_end(
            viewport.scroll_offset,
            viewport.height,
            self.total_height(),
            threshold,
        )
    }
}
