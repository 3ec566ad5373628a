//! Page-number pagination for the product search endpoint.
//!
//! The endpoint takes `page` (1-based) and `limit` and returns a bare array.
//! It reports no total count and no cursor, so the only signal that the
//! result set is exhausted is a short page: fewer items than `limit`.
//! A page that comes back exactly full is assumed to have a successor, even
//! if that successor turns out to be empty.

/// Returns `true` when a page of `returned` items, requested with `limit`,
/// is the last one.
#[must_use]
pub fn is_last_page(returned: usize, limit: u32) -> bool {
    // u32 -> usize is lossless on every supported target.
    returned < limit as usize
}
