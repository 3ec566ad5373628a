use std::future::Future;

use shelf_core::Product;

use crate::client::CatalogClient;
use crate::error::CatalogError;

/// Anything that can serve one page of a product search.
///
/// [`CatalogClient`] is the production implementation; the picker's
/// incremental loader depends only on this trait.
pub trait PageSource {
    fn fetch_page(
        &self,
        term: &str,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;
}

impl PageSource for CatalogClient {
    fn fetch_page(
        &self,
        term: &str,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send {
        CatalogClient::fetch_page(self, term, page, limit)
    }
}
