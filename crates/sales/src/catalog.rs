use std::collections::HashMap;

use tessera_products::Product;

/// In-memory product lookup. Re-adding an id replaces the earlier product.
#[derive(Debug, Default, Clone)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, id: impl Into<String>, product: Product) {
        let id = id.into();
        tracing::debug!(product_id = %id, "catalog entry stored");
        self.products.insert(id, product);
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
