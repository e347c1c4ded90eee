//! Case-insensitive name search over a name-sorted sequence.
//!
//! Protocol contract: callers sort the working sequence by
//! [`crate::ordering::by_name_ci`] before calling in here; the search does not
//! re-derive that ordering.
//!
//! Two phases:
//! 1. Binary search on exact case-insensitive name equality. On a hit, expand
//!    outward over the contiguous run of names that still *contain* the
//!    keyword as a substring, and return that whole run.
//! 2. If the binary phase finds no exact hit, fall back to a full linear scan
//!    collecting every product whose name contains the keyword anywhere.
//!
//! The fast path cannot find partial matches by construction (substring
//! containment is not order-preserving), which is why the fallback exists.

use storefront_catalog::Product;

/// Find every product in `sorted` whose name matches `keyword`,
/// case-insensitively. No matches yields an empty vector, never an error.
pub fn search_by_name(sorted: &[Product], keyword: &str) -> Vec<Product> {
    let keyword = keyword.to_lowercase();

    if let Some(hit) = binary_search_exact(sorted, &keyword) {
        return expand_around(sorted, hit, &keyword);
    }

    // Fallback: substring scan over the whole (already filtered) sequence.
    sorted
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&keyword))
        .cloned()
        .collect()
}

/// Locate an index whose name equals `keyword` exactly (case-insensitive).
fn binary_search_exact(sorted: &[Product], keyword: &str) -> Option<usize> {
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = left + (right - left) / 2;
        let name = sorted[mid].name().to_lowercase();

        match name.as_str().cmp(keyword) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }

    None
}

/// Collect the contiguous run around an exact hit whose names contain the
/// keyword, in slice (name-sorted) order.
fn expand_around(sorted: &[Product], hit: usize, keyword: &str) -> Vec<Product> {
    let mut lo = hit;
    while lo > 0 && sorted[lo - 1].name().to_lowercase().contains(keyword) {
        lo -= 1;
    }

    let mut hi = hit + 1;
    while hi < sorted.len() && sorted[hi].name().to_lowercase().contains(keyword) {
        hi += 1;
    }

    sorted[lo..hi].to_vec()
}
