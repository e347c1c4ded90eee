//! `storefront-catalog` — catalog domain entities.
//!
//! Products, reviews and orders as consumed by the query/recommendation
//! engine. Entities are created and mutated by the persistence collaborator;
//! the engine only ever reads snapshots of them.

pub mod order;
pub mod product;
pub mod review;

pub use order::{Order, OrderItem, OrderStatus};
pub use product::Product;
pub use review::Review;
