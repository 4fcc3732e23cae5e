//! Pagination Cursor

/// Position in the paginated task list.
///
/// `page` always stays within `1..=total_pages` and `total_pages` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    total_pages: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl PageCursor {
    /// Build a cursor, clamping both values into range
    pub fn new(page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page before this one, if any
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.page - 1)
    }

    /// Page after this one, if any
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps() {
        assert_eq!(PageCursor::new(0, 3).page(), 1);
        assert_eq!(PageCursor::new(7, 3).page(), 3);
        assert_eq!(PageCursor::new(1, 0).total_pages(), 1);
    }

    #[test]
    fn test_cursor_bounds() {
        let first = PageCursor::new(1, 2);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = PageCursor::new(2, 2);
        assert_eq!(last.previous(), Some(1));
        assert_eq!(last.next(), None);

        let only = PageCursor::default();
        assert!(!only.has_previous());
        assert!(!only.has_next());
    }
}
