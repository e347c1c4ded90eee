//! Catalog query entry points.
//!
//! One catalog query flows filter → (optional) search → sort → paginate.
//! Every stage produces a new sequence from the one before it; the snapshot
//! handed in by the caller is never mutated.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;
use tracing::debug;

use storefront_catalog::{Product, Review};
use storefront_core::{DomainError, DomainResult, ProductId};

use crate::filter::ProductFilter;
use crate::ordering::{by_id, by_name_ci, by_price, reverse};
use crate::page::{paginate, Page};
use crate::search::search_by_name;
use crate::sort::merge_sort;

/// Sort key for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Price,
    Newest,
}

/// Sort direction for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// A catalog query: optional filters and keyword, plus paging and ordering.
///
/// Unknown or empty optional inputs degrade to "no filter"; they are never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
    /// Zero-based page index.
    pub page: usize,
    /// Page size; must be positive.
    pub size: usize,
    pub sort_by: SortKey,
    pub sort_dir: SortDir,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            in_stock: None,
            page: 0,
            size: 20,
            sort_by: SortKey::default(),
            sort_dir: SortDir::default(),
        }
    }
}

impl CatalogQuery {
    fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock: self.in_stock,
        }
    }
}

/// Run a full catalog query over the product snapshot and return one page of
/// ordered results plus the total matching count.
pub fn query_products(products: &[Product], query: &CatalogQuery) -> Page<Product> {
    let mut working = query.filter().apply(products);

    // Search protocol: sort by case-insensitive name first, then search.
    // An empty keyword bypasses the search stage entirely.
    if let Some(keyword) = query.search.as_deref().filter(|k| !k.is_empty()) {
        working = merge_sort(&working, &by_name_ci());
        working = search_by_name(&working, keyword);
    }

    let cmp: Box<dyn Fn(&Product, &Product) -> Ordering> = match query.sort_by {
        SortKey::Price => Box::new(by_price()),
        SortKey::Newest => Box::new(reverse(by_id())),
        SortKey::Id => Box::new(by_id()),
    };
    let cmp: Box<dyn Fn(&Product, &Product) -> Ordering> = match query.sort_dir {
        SortDir::Desc => Box::new(reverse(cmp)),
        SortDir::Asc => cmp,
    };

    let sorted = merge_sort(&working, &cmp);

    debug!(
        total = sorted.len(),
        page = query.page,
        size = query.size,
        "catalog query evaluated"
    );
    paginate(&sorted, query.page, query.size)
}

/// All products whose normalized category matches `category`
/// case-insensitively, unfiltered by anything else.
pub fn products_in_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category().to_lowercase() == category.to_lowercase())
        .cloned()
        .collect()
}

/// All reviews for one product, looked up by id.
///
/// Returns [`DomainError::NotFound`] when the product id is absent from the
/// snapshot; a product with zero reviews yields an empty list, which is a
/// valid outcome distinct from `NotFound`.
pub fn reviews_for_product(
    products: &[Product],
    reviews: &[Review],
    product_id: ProductId,
) -> DomainResult<Vec<Review>> {
    if !products.iter().any(|p| p.id_typed() == product_id) {
        return Err(DomainError::not_found());
    }

    Ok(reviews
        .iter()
        .filter(|r| r.product_id() == product_id)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_core::{ReviewId, UserId};

    fn product(id: u64, name: &str, price: i64, stock: Option<i64>, category: &str) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            Decimal::from(price),
            Some(category.to_string()),
            stock,
            None,
        )
        .unwrap()
    }

    fn mugs_and_plates() -> Vec<Product> {
        vec![
            product(1, "Red Mug", 5, Some(10), "Kitchen"),
            product(2, "Blue Mug", 5, Some(0), "Kitchen"),
            product(3, "Red Plate", 12, Some(3), "Kitchen"),
        ]
    }

    #[test]
    fn full_pipeline_scenario_search_stock_and_price_sort() {
        // Keyword "Red", in-stock only, price ascending: the Blue Mug is
        // dropped by the stock filter, both Red products match the keyword.
        let query = CatalogQuery {
            search: Some("Red".to_string()),
            in_stock: Some(true),
            page: 0,
            size: 10,
            sort_by: SortKey::Price,
            sort_dir: SortDir::Asc,
            ..Default::default()
        };

        let page = query_products(&mugs_and_plates(), &query);
        let ids: Vec<u64> = page.items.iter().map(|p| p.id_typed().value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn default_query_sorts_by_id_ascending() {
        let products = vec![
            product(3, "c", 1, None, "X"),
            product(1, "a", 2, None, "X"),
            product(2, "b", 3, None, "X"),
        ];
        let page = query_products(&products, &CatalogQuery::default());
        let ids: Vec<u64> = page.items.iter().map(|p| p.id_typed().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn newest_sort_puts_higher_ids_first_and_desc_re_reverses() {
        let products = mugs_and_plates();

        let newest = CatalogQuery {
            sort_by: SortKey::Newest,
            ..Default::default()
        };
        let ids: Vec<u64> = query_products(&products, &newest)
            .items
            .iter()
            .map(|p| p.id_typed().value())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);

        // "newest" + "desc" double-reverses back to ascending ids, matching
        // the comparator composition rules.
        let newest_desc = CatalogQuery {
            sort_by: SortKey::Newest,
            sort_dir: SortDir::Desc,
            ..Default::default()
        };
        let ids: Vec<u64> = query_products(&products, &newest_desc)
            .items
            .iter()
            .map(|p| p.id_typed().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_keyword_bypasses_search() {
        let query = CatalogQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query_products(&mugs_and_plates(), &query).total, 3);
    }

    #[test]
    fn out_of_range_page_reports_true_total() {
        let query = CatalogQuery {
            page: 9,
            size: 10,
            ..Default::default()
        };
        let page = query_products(&mugs_and_plates(), &query);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn stable_sort_keeps_snapshot_order_on_price_ties() {
        // Red Mug (1) and Blue Mug (2) share a price; id order is preserved.
        let query = CatalogQuery {
            sort_by: SortKey::Price,
            ..Default::default()
        };
        let ids: Vec<u64> = query_products(&mugs_and_plates(), &query)
            .items
            .iter()
            .map(|p| p.id_typed().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn query_never_mutates_the_snapshot() {
        let products = mugs_and_plates();
        let before = products.clone();
        let query = CatalogQuery {
            search: Some("Mug".to_string()),
            sort_by: SortKey::Price,
            sort_dir: SortDir::Desc,
            ..Default::default()
        };
        let _ = query_products(&products, &query);
        assert_eq!(products, before);
    }

    #[test]
    fn category_listing_is_case_insensitive_and_unfiltered() {
        let mut products = mugs_and_plates();
        products.push(product(4, "Stapler", 3, Some(0), "Office"));

        let kitchen = products_in_category(&products, "kitchen");
        assert_eq!(kitchen.len(), 3);
        let office = products_in_category(&products, "OFFICE");
        assert_eq!(office.len(), 1);
        assert!(products_in_category(&products, "Garden").is_empty());
    }

    #[test]
    fn reviews_for_missing_product_is_not_found() {
        let err = reviews_for_product(&mugs_and_plates(), &[], ProductId::new(42)).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn reviews_for_unreviewed_product_is_empty_not_an_error() {
        let reviews = vec![Review::new(
            ReviewId::new(1),
            ProductId::new(3),
            UserId::new(1),
            4,
            "solid plate",
            Utc::now(),
        )
        .unwrap()];

        let for_mug = reviews_for_product(&mugs_and_plates(), &reviews, ProductId::new(1));
        assert_eq!(for_mug.unwrap(), vec![]);

        let for_plate =
            reviews_for_product(&mugs_and_plates(), &reviews, ProductId::new(3)).unwrap();
        assert_eq!(for_plate.len(), 1);
    }

    #[test]
    fn catalog_query_deserializes_from_sparse_json() {
        let query: CatalogQuery = serde_json::from_str(
            r#"{"search": "Red", "in_stock": true, "size": 10, "sort_by": "price"}"#,
        )
        .unwrap();
        assert_eq!(query.search.as_deref(), Some("Red"));
        assert_eq!(query.in_stock, Some(true));
        assert_eq!(query.page, 0);
        assert_eq!(query.size, 10);
        assert_eq!(query.sort_by, SortKey::Price);
        assert_eq!(query.sort_dir, SortDir::Asc);
    }
}
