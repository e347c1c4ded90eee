use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, ProductId, ReviewId, UserId};

/// A rating left by one user on one product.
///
/// `created_at` is assigned once at creation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    product_id: ProductId,
    user_id: UserId,
    rating: i32,
    comment: String,
    created_at: DateTime<Utc>,
}

impl Review {
    /// Create a review. Ratings are bounded to 1..=5.
    pub fn new(
        id: ReviewId,
        product_id: ProductId,
        user_id: UserId,
        rating: i32,
        comment: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if !(1..=5).contains(&rating) {
            return Err(DomainError::validation("rating must be between 1 and 5"));
        }

        Ok(Self {
            id,
            product_id,
            user_id,
            rating,
            comment: comment.into(),
            created_at,
        })
    }

    pub fn id_typed(&self) -> ReviewId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
