//! Predicate-based narrowing of a product snapshot.
//!
//! Filters compose by intersection: a product is retained only if it passes
//! every active predicate. Unset (or empty) predicates are no-ops, never
//! errors. Each application produces a new sequence; the snapshot is never
//! mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;

/// Optional predicates applied before search/sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive exact category match. Empty string means no filter.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Tri-state stock filter: `None` keeps everything, `Some(true)` keeps
    /// `stock > 0`, `Some(false)` keeps `stock <= 0`. Unknown stock counts
    /// as `<= 0` for both polarities.
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    /// Whether `product` passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !category.is_empty()
                && product.category().to_lowercase() != category.to_lowercase()
            {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price() < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price() > max {
                return false;
            }
        }

        if let Some(in_stock) = self.in_stock {
            if product.is_in_stock() != in_stock {
                return false;
            }
        }

        true
    }

    /// Narrow `products` to those passing every active predicate.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
