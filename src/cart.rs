use crate::catalog::{Catalog, CatalogEntry};
use crate::currency::Money;

/// Items picked during one session, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one purchase of `entry`. Repeated picks stay separate.
    pub fn add(&mut self, entry: &CatalogEntry) {
        tracing::debug!(item = %entry.name, "added to cart");
        self.items.push(entry.name.clone());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Resolves every cart line to its catalog price, keeping cart order.
    pub fn purchased(&self, catalog: &Catalog) -> Vec<(String, Money)> {
        self.items
            .iter()
            .filter_map(|name| {
                let entry = catalog.lookup_by_name(name);
                if entry.is_none() {
                    tracing::warn!(item = %name, "cart item missing from catalog");
                }
                entry.map(|entry| (entry.name.clone(), entry.price))
            })
            .collect()
    }
}
