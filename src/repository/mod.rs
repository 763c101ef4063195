use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::product::{NewProduct, Product, ProductSearchQuery, UpdateProduct};

pub mod errors;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

/// In-memory repository holding the authoritative product collection.
///
/// Clones share the same store; the mutex keeps read-modify-write of the
/// collection and the id counter serialized across actix workers.
#[derive(Clone)]
pub struct InMemoryRepository {
    state: Arc<Mutex<CatalogState>>,
}

/// Collection plus id counter guarded by the repository mutex.
struct CatalogState {
    products: Vec<Product>,
    next_id: i32,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Create an empty repository with the id counter seeded at 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CatalogState {
                products: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn state(&self) -> RepositoryResult<MutexGuard<'_, CatalogState>> {
        self.state.lock().map_err(|_| RepositoryError::Poisoned)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(
        &self,
        query: ProductSearchQuery,
    ) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product>;
}
