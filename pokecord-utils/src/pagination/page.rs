//! Pure pagination math: fixed-size partitioning of an ordered item list.

use super::PaginationError;

/// An ordered, non-empty item list partitioned into pages of `page_size`.
///
/// Pages are 0-indexed. `page_count` is the index of the final page and is
/// computed once; the backing items never change after construction.
#[derive(Debug, Clone)]
pub struct PageSet<T> {
    items: Vec<T>,
    page_size: usize,
    page_count: usize,
}

impl<T> PageSet<T> {
    /// Partition `items` into pages of `page_size`.
    ///
    /// Fails with [`PaginationError::InvalidArgument`] when `items` is empty or
    /// `page_size` is zero.
    pub fn build(items: Vec<T>, page_size: usize) -> Result<Self, PaginationError> {
        if items.is_empty() {
            return Err(PaginationError::InvalidArgument(
                "items must be a non-empty list",
            ));
        }
        if page_size == 0 {
            return Err(PaginationError::InvalidArgument("page size must be > 0"));
        }

        let page_count = last_page_index(items.len(), page_size);

        Ok(Self {
            items,
            page_size,
            page_count,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the final page (a single page yields `0`).
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items shown on `page`, clipped at the end of the list.
    ///
    /// An index past the final page returns an empty slice.
    pub fn page_for_index(&self, page: usize) -> &[T] {
        let (start, end) = page_window(self.items.len(), self.page_size, page);
        &self.items[start..end]
    }
}

/// 0-based index of the final page for `item_count` items.
pub fn last_page_index(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).saturating_sub(1)
}

/// Return start/end indices for a 0-based page window.
pub fn page_window(total_items: usize, page_size: usize, page: usize) -> (usize, usize) {
    let start = page.saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}
