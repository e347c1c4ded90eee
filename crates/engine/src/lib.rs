//! `storefront-engine` — in-memory catalog query & recommendation engine.
//!
//! The engine consumes read-only snapshots of products, reviews and orders
//! (loaded by the persistence collaborator before each call) and produces
//! filtered, searched, sorted, paginated pages plus ranked recommendation
//! lists. It is stateless, performs no I/O, and never mutates its inputs, so
//! concurrent calls on independent snapshots need no synchronization.
//!
//! Pipeline for one catalog query:
//! filter → (optional) search → sort → paginate.
//! Recommendation requests go through [`recommend`], which reuses the sort
//! engine for its composite-key rankings.

pub mod filter;
pub mod ordering;
pub mod page;
pub mod query;
pub mod recommend;
pub mod search;
pub mod sort;

pub use filter::ProductFilter;
pub use page::{paginate, Page};
pub use query::{
    products_in_category, query_products, reviews_for_product, CatalogQuery, SortDir, SortKey,
};
pub use recommend::{recommendations_for_user, top_rated, RatingIndex};
pub use search::search_by_name;
pub use sort::merge_sort;
