use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::currency::Money;

use super::{render_listing, ReportStyle};

/// One displayed line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub price: Money,
}

/// Purchased items sorted by ascending price, with their total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    rows: Vec<ReportRow>,
    total: Money,
}

impl Receipt {
    /// Sorts `purchased` by price. The sort is stable, so equally priced
    /// items keep the order they were picked in.
    pub fn from_purchases(mut purchased: Vec<(String, Money)>) -> Self {
        purchased.sort_by_key(|(_, price)| *price);
        let total = purchased.iter().map(|(_, price)| *price).sum();
        let rows = purchased
            .into_iter()
            .map(|(name, price)| ReportRow { name, price })
            .collect();
        Self { rows, total }
    }

    pub fn from_cart(cart: &Cart, catalog: &Catalog) -> Self {
        Self::from_purchases(cart.purchased(catalog))
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn total(&self) -> Money {
        self.total
    }

    /// First row carrying the highest price.
    pub fn most_expensive(&self) -> Option<&ReportRow> {
        self.rows.iter().fold(None::<&ReportRow>, |best, row| match best {
            Some(current) if row.price <= current.price => Some(current),
            _ => Some(row),
        })
    }

    /// First row carrying the lowest price.
    pub fn least_expensive(&self) -> Option<&ReportRow> {
        self.rows.iter().min_by_key(|row| row.price)
    }

    pub fn render(&self, style: &ReportStyle) -> String {
        let pairs: Vec<(String, Money)> = self
            .rows
            .iter()
            .map(|row| (row.name.clone(), row.price))
            .collect();
        render_listing(&pairs, true, style)
    }
}
