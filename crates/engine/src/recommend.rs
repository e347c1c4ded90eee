//! Recommendation scoring: popularity and personalized rankings.
//!
//! Both strategies are pure functions of the snapshot passed in. Review
//! aggregation is built once per call into a [`RatingIndex`] and shared by
//! whichever ranking runs, including the popularity fallback.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use storefront_catalog::{Order, Product, Review};
use storefront_core::{ProductId, UserId};

use crate::ordering::{by_newest, then};
use crate::sort::merge_sort;

/// Per-product review aggregates: running `(sum, count)` keyed by product id.
#[derive(Debug, Default)]
pub struct RatingIndex {
    aggregates: HashMap<ProductId, (i64, u32)>,
}

impl RatingIndex {
    /// Aggregate `reviews` against the product snapshot. Reviews whose
    /// product id does not resolve to a snapshot product are skipped.
    pub fn build(products: &[Product], reviews: &[Review]) -> Self {
        let known: HashSet<ProductId> = products.iter().map(Product::id_typed).collect();

        let mut aggregates: HashMap<ProductId, (i64, u32)> = HashMap::new();
        for review in reviews {
            if !known.contains(&review.product_id()) {
                continue;
            }
            let entry = aggregates.entry(review.product_id()).or_insert((0, 0));
            entry.0 += i64::from(review.rating());
            entry.1 += 1;
        }

        Self { aggregates }
    }

    /// Average rating for a product; `0.0` when it has no reviews.
    pub fn average(&self, id: ProductId) -> f64 {
        match self.aggregates.get(&id) {
            Some(&(sum, count)) if count > 0 => sum as f64 / f64::from(count),
            _ => 0.0,
        }
    }

    /// Number of reviews aggregated for a product.
    pub fn count(&self, id: ProductId) -> u32 {
        self.aggregates.get(&id).map(|&(_, c)| c).unwrap_or(0)
    }
}

/// Popularity ranking: products by descending average rating, ties broken by
/// descending id (newer first). Unreviewed products score `0.0` and stay in
/// the ranking. Returns the top `n`; `n == 0` or `n >= len` returns the full
/// ranked list (clamp, not an error).
pub fn top_rated(products: &[Product], reviews: &[Review], n: usize) -> Vec<Product> {
    if products.is_empty() {
        return Vec::new();
    }

    let index = RatingIndex::build(products, reviews);
    rank_by_rating(products, &index, n)
}

fn rank_by_rating(products: &[Product], index: &RatingIndex, n: usize) -> Vec<Product> {
    let by_rating_desc =
        |a: &Product, b: &Product| index.average(b.id_typed()).total_cmp(&index.average(a.id_typed()));

    let ranked = merge_sort(products, &then(by_rating_desc, by_newest()));
    clamp_top_n(ranked, n)
}

/// Personalized ranking for `user_id`, per the user's purchase history.
///
/// Candidates are products the user has never purchased that are currently in
/// stock (unknown stock excluded). Each candidate is scored by a three-key
/// composite: descending category-affinity count, descending average rating,
/// descending id. Falls back to [`top_rated`] when the user is missing, has
/// no order history, or the candidate pool is empty.
pub fn recommendations_for_user(
    products: &[Product],
    reviews: &[Review],
    orders: &[Order],
    user_id: Option<UserId>,
    n: usize,
) -> Vec<Product> {
    let Some(user_id) = user_id else {
        debug!("no user id; falling back to popularity ranking");
        return top_rated(products, reviews, n);
    };

    let user_orders: Vec<&Order> = orders.iter().filter(|o| o.user_id() == user_id).collect();
    if user_orders.is_empty() {
        debug!(%user_id, "no order history; falling back to popularity ranking");
        return top_rated(products, reviews, n);
    }

    let by_id: HashMap<ProductId, &Product> =
        products.iter().map(|p| (p.id_typed(), p)).collect();

    // Purchase history: what to exclude, and how often the user buys from
    // each category. Order items referencing products absent from the
    // snapshot are skipped.
    let mut purchased: HashSet<ProductId> = HashSet::new();
    let mut affinity: HashMap<&str, u32> = HashMap::new();
    for order in &user_orders {
        for item in order.items() {
            let Some(product) = by_id.get(&item.product_id()) else {
                continue;
            };
            purchased.insert(product.id_typed());
            *affinity.entry(product.category()).or_insert(0) += 1;
        }
    }

    let candidates: Vec<Product> = products
        .iter()
        .filter(|p| !purchased.contains(&p.id_typed()) && p.is_in_stock())
        .cloned()
        .collect();

    if candidates.is_empty() {
        debug!(%user_id, "empty candidate pool; falling back to popularity ranking");
        return top_rated(products, reviews, n);
    }

    let index = RatingIndex::build(products, reviews);

    let by_affinity_desc = |a: &Product, b: &Product| {
        let affinity_a = affinity.get(a.category()).copied().unwrap_or(0);
        let affinity_b = affinity.get(b.category()).copied().unwrap_or(0);
        affinity_b.cmp(&affinity_a)
    };
    let by_rating_desc =
        |a: &Product, b: &Product| index.average(b.id_typed()).total_cmp(&index.average(a.id_typed()));

    let ranked = merge_sort(
        &candidates,
        &then(by_affinity_desc, then(by_rating_desc, by_newest())),
    );

    debug!(
        %user_id,
        candidates = ranked.len(),
        requested = n,
        "personalized ranking computed"
    );
    clamp_top_n(ranked, n)
}

/// Top-N clamp: a requested count of zero, or one at/beyond the available
/// size, returns the full list.
fn clamp_top_n(mut ranked: Vec<Product>, n: usize) -> Vec<Product> {
    if n == 0 || n >= ranked.len() {
        return ranked;
    }
    ranked.truncate(n);
    ranked
}
