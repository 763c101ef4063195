use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a product held by the catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the repository.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to users.
    pub description: String,
    /// Unit price of the product.
    pub price: f64,
    /// Units currently in stock.
    pub stock: u32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown to users.
    pub description: String,
    /// Unit price of the product.
    pub price: f64,
    /// Units currently in stock.
    pub stock: u32,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional stock update.
    pub stock: Option<u32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            description: None,
            price: None,
            stock: None,
            updated_at: now,
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the stock quantity.
    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// Query definition used to filter and paginate products.
///
/// Every criterion is optional; supplied criteria combine with logical AND.
#[derive(Debug, Clone)]
pub struct ProductSearchQuery {
    /// Optional case-insensitive name substring filter.
    pub name: Option<String>,
    /// Optional inclusive lower bound on the price.
    pub min_price: Option<f64>,
    /// Optional inclusive upper bound on the price.
    pub max_price: Option<f64>,
    /// `true` selects products with stock, `false` selects products with
    /// exactly zero stock.
    pub in_stock: Option<bool>,
    /// Optional pagination window applied after all filters.
    pub pagination: Option<Pagination>,
}

impl Default for ProductSearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSearchQuery {
    /// Construct a query that matches every product in the catalog.
    pub fn new() -> Self {
        Self {
            name: None,
            min_price: None,
            max_price: None,
            in_stock: None,
            pagination: None,
        }
    }

    /// Filter the results by a substring applied to the name.
    pub fn name(mut self, term: impl Into<String>) -> Self {
        self.name = Some(term.into());
        self
    }

    /// Keep only products priced at or above `min_price`.
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Keep only products priced at or below `max_price`.
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Filter the results by stock availability.
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
