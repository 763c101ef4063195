use crate::domain::product::{NewProduct, Product, ProductSearchQuery, UpdateProduct};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{InMemoryRepository, ProductReader, ProductWriter};

impl ProductReader for InMemoryRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        let state = self.state()?;
        Ok(state.products.iter().find(|product| product.id == id).cloned())
    }

    fn list_products(
        &self,
        query: ProductSearchQuery,
    ) -> RepositoryResult<(usize, Vec<Product>)> {
        let state = self.state()?;

        let filtered: Vec<&Product> = state
            .products
            .iter()
            .filter(|product| matches_query(product, &query))
            .collect();

        let total = filtered.len();

        // Pagination is the final step so the window covers the filtered
        // sequence, not the raw collection.
        let items = match &query.pagination {
            Some(pagination) => filtered
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .cloned()
                .collect(),
            None => filtered.into_iter().cloned().collect(),
        };

        Ok((total, items))
    }
}

impl ProductWriter for InMemoryRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut state = self.state()?;
        let now = chrono::Local::now().naive_utc();

        let product = Product {
            id: state.next_id,
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price: new_product.price,
            stock: new_product.stock,
            created_at: now,
            updated_at: now,
        };

        state.next_id += 1;
        state.products.push(product.clone());

        Ok(product)
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        let mut state = self.state()?;

        let product = state
            .products
            .iter_mut()
            .find(|product| product.id == product_id)
            .ok_or(RepositoryError::NotFound(product_id))?;

        if let Some(name) = updates.name.as_ref() {
            product.name = name.clone();
        }

        if let Some(description) = updates.description.as_ref() {
            product.description = description.clone();
        }

        if let Some(price) = updates.price {
            product.price = price;
        }

        if let Some(stock) = updates.stock {
            product.stock = stock;
        }

        // Refreshed even when the patch carries no field changes.
        product.updated_at = updates.updated_at;

        Ok(product.clone())
    }
}

fn matches_query(product: &Product, query: &ProductSearchQuery) -> bool {
    if let Some(term) = query.name.as_ref() {
        let needle = term.to_lowercase();
        if !product.name.to_lowercase().contains(&needle) {
            return false;
        }
    }

    if let Some(min_price) = query.min_price
        && product.price < min_price
    {
        return false;
    }

    if let Some(max_price) = query.max_price
        && product.price > max_price
    {
        return false;
    }

    if let Some(in_stock) = query.in_stock {
        // `false` selects exactly-zero stock, not "stock below a threshold".
        let available = product.stock > 0;
        if available != in_stock {
            return false;
        }
    }

    true
}
