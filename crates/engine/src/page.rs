//! Pagination over an already filtered/sorted sequence.

use serde::{Deserialize, Serialize};

/// One page of results plus the total count of the sequence it was sliced
/// from, so callers can derive the page count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based page index that was requested.
    pub page: usize,
    /// Requested page size.
    pub size: usize,
    /// Length of the full sequence *before* slicing.
    pub total: usize,
}

impl<T> Page<T> {
    /// `ceil(total / size)`; zero when the size is zero.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(self.size)
        }
    }
}

/// Slice `items` into the zero-based `page` of `size` elements.
///
/// A page beyond the end of the data yields empty items with the true total,
/// never an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Page<T> {
    let start = page.saturating_mul(size);
    let end = (start.saturating_add(size)).min(items.len());

    let page_items = if start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page {
        items: page_items,
        page,
        size,
        total: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_a_middle_page() {
        let items: Vec<i32> = (0..10).collect();
        let page = paginate(&items, 1, 3);
        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn last_page_may_be_short() {
        let items: Vec<i32> = (0..10).collect();
        let page = paginate(&items, 3, 3);
        assert_eq!(page.items, vec![9]);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn out_of_range_page_is_empty_with_true_total() {
        let items: Vec<i32> = (0..4).collect();
        let page = paginate(&items, 7, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn empty_sequence_pages_empty() {
        let items: Vec<i32> = vec![];
        let page = paginate(&items, 0, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: concatenating all pages reconstructs exactly the
            /// input sequence, and every page reports the same true total.
            #[test]
            fn pages_concatenate_to_the_input(
                items in proptest::collection::vec(0i64..1_000, 0..64),
                size in 1usize..10,
            ) {
                let mut rebuilt = Vec::new();
                let mut page_index = 0;
                loop {
                    let page = paginate(&items, page_index, size);
                    prop_assert_eq!(page.total, items.len());
                    if page.items.is_empty() {
                        break;
                    }
                    rebuilt.extend(page.items);
                    page_index += 1;
                }
                prop_assert_eq!(rebuilt, items);
            }

            /// Property: no page exceeds the requested size.
            #[test]
            fn no_page_overflows_its_size(
                items in proptest::collection::vec(0i64..1_000, 0..64),
                page in 0usize..20,
                size in 1usize..10,
            ) {
                prop_assert!(paginate(&items, page, size).items.len() <= size);
            }
        }
    }
}
