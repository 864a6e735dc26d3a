use crate::models::Page;

/// A 1-based page number and a page size.
///
/// Bounds on `page_size` belong to the caller, this type only does the window math
/// and saturates instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize
}

impl Pagination {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Converts an offset/limit pair, the offset is rounded down to a page boundary.
    pub fn from_skip(skip: usize, limit: usize) -> Self {
        Self::new(skip / limit.max(1) + 1, limit)
    }

    /// Half-open `[start, end)` window into the matching sequence.
    pub fn window(&self) -> (usize, usize) {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }
}

/// Counts every item and keeps the ones that fall inside the page window.
pub fn paginate<T, I>(items: I, pagination: Pagination) -> Page<T>
where
    I: IntoIterator<Item = T>
{
    let (start, end) = pagination.window();
    let mut total = 0;
    let mut window = Vec::with_capacity(pagination.page_size.min(1024));

    for item in items {
        if (start..end).contains(&total) {
            window.push(item);
        }

        total += 1;
    }

    Page {
        page: pagination.page,
        limit: pagination.page_size,
        total,
        items: window
    }
}
