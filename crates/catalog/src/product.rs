use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, ProductId};

/// Category assigned when none is provided.
///
/// Normalization happens at creation/update time, never at query time, so the
/// effective category of a stored product is never empty.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Catalog entry: a sellable product.
///
/// `stock` is `None` when the count is unknown; the engine treats unknown
/// stock as unavailable everywhere (stock filter and recommendation
/// candidates alike).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: Decimal,
    stock: Option<i64>,
    image_url: String,
}

impl Product {
    /// Create a product with normalized defaults.
    ///
    /// Rejects blank names and negative prices; a missing category becomes
    /// [`UNCATEGORIZED`] and a missing image reference becomes `""`.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        category: Option<String>,
        stock: Option<i64>,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }

        Ok(Self {
            id,
            name,
            category: normalize_category(category),
            price,
            stock,
            image_url: image_url.unwrap_or_default(),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective category; never empty.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Stock count; `None` means unknown.
    pub fn stock(&self) -> Option<i64> {
        self.stock
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Whether the product can currently be sold. Unknown stock counts as
    /// unavailable.
    pub fn is_in_stock(&self) -> bool {
        self.stock.unwrap_or(0) > 0
    }

    /// Update the category, re-applying the normalization rule.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = normalize_category(category);
    }

    /// Update the image reference, re-applying the empty-string default.
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.image_url = image_url.unwrap_or_default();
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<(), DomainError> {
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }
        self.price = price;
        Ok(())
    }

    pub fn set_stock(&mut self, stock: Option<i64>) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn normalize_category(category: Option<String>) -> String {
    match category {
        Some(c) if !c.trim().is_empty() => c,
        _ => UNCATEGORIZED.to_string(),
    }
}
