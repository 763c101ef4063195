use serde::Deserialize;

use crate::domain::product::{Product, ProductSearchQuery};
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Optional case-insensitive name substring.
    pub name: Option<String>,
    /// Optional inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Optional inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Optional stock availability filter.
    pub in_stock: Option<bool>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
    /// Page size requested by the caller.
    pub limit: Option<usize>,
}

/// Creates a new product from a validated payload.
pub fn create_product<R>(repo: &R, form: CreateProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&payload).map_err(ServiceError::from)
}

/// Returns the full catalog snapshot in insertion order.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let (_, items) = repo
        .list_products(ProductSearchQuery::new())
        .map_err(ServiceError::from)?;

    Ok(items)
}

/// Looks up a single product by id.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Option<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(id).map_err(ServiceError::from)
}

/// Applies a partial update to an existing product.
pub fn update_product<R>(repo: &R, id: i32, form: UpdateProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(id, &updates).map_err(ServiceError::from)
}

/// Runs a filtered, optionally paginated search over the catalog.
pub fn search_products<R>(repo: &R, query: SearchQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let mut list_query = ProductSearchQuery::new();

    if let Some(name) = query.name {
        list_query = list_query.name(name);
    }

    if let Some(min_price) = query.min_price {
        list_query = list_query.min_price(min_price);
    }

    if let Some(max_price) = query.max_price {
        list_query = list_query.max_price(max_price);
    }

    if let Some(in_stock) = query.in_stock {
        list_query = list_query.in_stock(in_stock);
    }

    // Pagination only applies when both parameters arrive; a lone `page` or
    // `limit` is silently ignored rather than rejected.
    if let (Some(page), Some(limit)) = (query.page, query.limit) {
        list_query = list_query.paginate(page, limit);
    }

    let (_, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    Ok(items)
}
