//! The fixed stock of purchasable items.

use once_cell::sync::Lazy;

use crate::currency::Money;

/// A purchasable item and its unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub price: Money,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

const STOCK: [(&str, u64); 10] = [
    ("Apple", 100),
    ("Banana", 150),
    ("Candy", 300),
    ("Chips", 635),
    ("Soda", 200),
    ("Cereal", 399),
    ("Pizza", 465),
    ("Cheese", 666),
    ("Milk", 449),
    ("Hotdogs", 1299),
];

static DEFAULT_STOCK: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(
        STOCK
            .iter()
            .map(|(name, cents)| CatalogEntry::new(*name, Money::from_cents(*cents))),
    )
});

/// Ordered, read-only item table. Listing order and index order are the
/// same sequence, so `#3` on screen is always `lookup_by_index(3)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog in the given order. Later entries whose names collide
    /// case-insensitively with an earlier one are dropped.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::new();
        for entry in entries {
            if unique
                .iter()
                .any(|existing| existing.name.eq_ignore_ascii_case(&entry.name))
            {
                tracing::warn!(name = %entry.name, "duplicate catalog entry ignored");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// The built-in stock shared by the whole process.
    pub fn stock() -> &'static Catalog {
        &DEFAULT_STOCK
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// 1-based lookup; `0` is never a valid index.
    pub fn lookup_by_index(&self, index: usize) -> Option<&CatalogEntry> {
        index.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    /// (name, price) pairs in listing order, ready for the report renderer.
    pub fn rows(&self) -> Vec<(String, Money)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.clone(), entry.price))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new([
            CatalogEntry::new("Apple", Money::from_cents(100)),
            CatalogEntry::new("Banana", Money::from_cents(150)),
            CatalogEntry::new("Candy", Money::from_cents(300)),
        ])
    }

    #[test]
    fn stock_has_ten_items_in_declared_order() {
        let stock = Catalog::stock();
        assert_eq!(stock.len(), 10);
        let names: Vec<&str> = stock.names().collect();
        assert_eq!(names.first(), Some(&"Apple"));
        assert_eq!(names.last(), Some(&"Hotdogs"));
        assert_eq!(
            stock.lookup_by_name("chips").map(|entry| entry.price),
            Some(Money::from_cents(635))
        );
    }

    #[test]
    fn index_lookup_matches_enumeration_order() {
        let stock = Catalog::stock();
        for (position, entry) in stock.entries().iter().enumerate() {
            assert_eq!(stock.lookup_by_index(position + 1), Some(entry));
        }
        assert!(stock.lookup_by_index(0).is_none());
        assert!(stock.lookup_by_index(stock.len() + 1).is_none());
    }

    #[test]
    fn name_lookup_ignores_case() {
        let catalog = sample();
        let expected = catalog.lookup_by_index(1);
        for spelling in ["APPLE", "apple", "Apple", "aPpLe"] {
            assert_eq!(catalog.lookup_by_name(spelling), expected);
        }
        assert!(catalog.lookup_by_name("Pear").is_none());
    }

    #[test]
    fn duplicate_names_keep_first_entry() {
        let catalog = Catalog::new([
            CatalogEntry::new("Soda", Money::from_cents(200)),
            CatalogEntry::new("SODA", Money::from_cents(999)),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].price, Money::from_cents(200));
    }

    #[test]
    fn empty_catalog_is_tolerated() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.lookup_by_index(1).is_none());
        assert!(catalog.rows().is_empty());
    }
}
