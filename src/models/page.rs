//! Pagination for list results.

use serde::{Deserialize, Serialize};

/// One page of a list result.
///
/// Page indices are zero-based. Ordering of the underlying sequence is
/// store-defined but stable across repeated identical queries.
///
/// # Example
///
/// ```
/// use leave_engine::models::Page;
///
/// let page = Page::from_slice(&[1, 2, 3, 4, 5], 1, 2);
/// assert_eq!(page.items, vec![3, 4]);
/// assert_eq!(page.total_elements, 5);
/// assert_eq!(page.total_pages, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Zero-based index of this page.
    pub page: usize,
    /// The requested page size.
    pub size: usize,
    /// Total number of items across all pages.
    pub total_elements: usize,
    /// Total number of pages at the requested size.
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Cuts one page out of a fully materialized, stably ordered slice.
    ///
    /// A `size` of zero yields an empty page with `total_pages` 0; a
    /// `page` index past the end yields an empty page with the totals
    /// still filled in.
    pub fn from_slice(items: &[T], page: usize, size: usize) -> Self {
        let total_elements = items.len();
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        let start = page.saturating_mul(size).min(total_elements);
        let end = start.saturating_add(size).min(total_elements);
        Page {
            items: items[start..end].to_vec(),
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}
