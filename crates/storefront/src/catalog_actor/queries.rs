//! Read-only views over the whole catalog.

use crate::model::{Product, ProductFilter};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    /// Distinct categories, in order of first appearance.
    Categories,
    Count,
    Search(ProductFilter),
}

/// Results of catalog queries. Variants match [`CatalogQuery`] one to one.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQueryResult {
    Categories(Vec<String>),
    Count(usize),
    Products(Vec<Product>),
}
