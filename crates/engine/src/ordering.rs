//! Composable product orderings.
//!
//! A comparator is any `Fn(&T, &T) -> Ordering`. The combinators here build
//! the total orders the sort engine consumes: single-key orderings over
//! products, reversal, and multi-key tie-breaking.

use std::cmp::Ordering;

use storefront_catalog::Product;

/// Order by price, ascending. Exact decimal comparison, no rounding.
pub fn by_price() -> impl Fn(&Product, &Product) -> Ordering {
    |a, b| a.price().cmp(&b.price())
}

/// Order by id, ascending (creation order).
pub fn by_id() -> impl Fn(&Product, &Product) -> Ordering {
    |a, b| a.id_typed().cmp(&b.id_typed())
}

/// Order by recency: newer (higher id) first.
pub fn by_newest() -> impl Fn(&Product, &Product) -> Ordering {
    reverse(by_id())
}

/// Case-insensitive name ordering. This is the protocol ordering the search
/// engine requires its input to be sorted by.
pub fn by_name_ci() -> impl Fn(&Product, &Product) -> Ordering {
    |a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

/// Reverse an ordering.
pub fn reverse<T>(cmp: impl Fn(&T, &T) -> Ordering) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| cmp(b, a)
}

/// Chain a secondary ordering, consulted only when the primary ties.
pub fn then<T>(
    primary: impl Fn(&T, &T) -> Ordering,
    secondary: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| primary(a, b).then_with(|| secondary(a, b))
}
