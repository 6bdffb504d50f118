//! In-memory product catalog.
//!
//! Stand-in for the real persistence layer; the cache interceptor neither
//! knows nor cares what sits behind the handlers.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A product in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub category: String,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

/// Process-local catalog store.
pub struct Catalog {
    products: RwLock<HashMap<Uuid, Product>>,
    categories: RwLock<Vec<Category>>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            categories: RwLock::new(Vec::new()),
        }
    }

    /// Creates a catalog pre-populated with demo inventory.
    #[must_use]
    pub fn with_seed_data() -> Self {
        let catalog = Self::new();

        for name in ["Coffee", "Tea", "Equipment"] {
            catalog.insert_category(name);
        }

        catalog.insert_product("Espresso Beans 1kg", 1850, "Coffee");
        catalog.insert_product("Sencha Loose Leaf 200g", 1200, "Tea");
        catalog.insert_product("Burr Grinder", 8900, "Equipment");

        catalog
    }

    /// Lists all products, sorted by name for stable output.
    #[must_use]
    pub fn list_products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.read().values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get_product(&self, id: Uuid) -> Option<Product> {
        self.products.read().get(&id).cloned()
    }

    /// Inserts a new product and returns it.
    pub fn insert_product(
        &self,
        name: impl Into<String>,
        price_cents: i64,
        category: impl Into<String>,
    ) -> Product {
        let product = Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price_cents,
            category: category.into(),
        };
        self.products.write().insert(product.id, product.clone());
        product
    }

    /// Removes a product. Returns `true` if it existed.
    pub fn remove_product(&self, id: Uuid) -> bool {
        self.products.write().remove(&id).is_some()
    }

    /// Lists all categories.
    #[must_use]
    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.read().clone()
    }

    fn insert_category(&self, name: &str) {
        self.categories.write().push(Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
        });
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
