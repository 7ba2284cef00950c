//! Pagination Helpers

use std::ops::Range;

/// Maximum number of numbered buttons shown at once
const WINDOW_WIDTH: usize = 5;

/// ceil(total / page_size); zero when there is nothing to show.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp into `[1, page_count]`. With no pages the view stays on page 1.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Index range of `page` (1-based) within a list of `total` records.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// What a pagination control should render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationWindow {
    pub pages: Vec<usize>,
    pub current: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Numbered buttons around the current page. `None` when a control
/// would be pointless (zero or one page).
pub fn pagination_window(page: usize, page_count: usize) -> Option<PaginationWindow> {
    if page_count <= 1 {
        return None;
    }
    let current = clamp_page(page, page_count);
    let half = WINDOW_WIDTH / 2;
    let mut first = current.saturating_sub(half).max(1);
    let last = (first + WINDOW_WIDTH - 1).min(page_count);
    if last + 1 - first < WINDOW_WIDTH {
        first = (last + 1).saturating_sub(WINDOW_WIDTH).max(1);
    }

    Some(PaginationWindow {
        pages: (first..=last).collect(),
        current,
        has_prev: current > 1,
        has_next: current < page_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_ceiling() {
        for page_size in 1..=6 {
            for total in 0..40 {
                let expected = (total + page_size - 1) / page_size;
                assert_eq!(page_count(total, page_size), expected);
            }
        }
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(3, 4), 3);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(1, 5, 12), 0..5);
        assert_eq!(page_bounds(3, 5, 12), 10..12);
        assert_eq!(page_bounds(4, 5, 12), 12..12);
        assert_eq!(page_bounds(1, 5, 0), 0..0);
    }

    #[test]
    fn test_no_control_without_pages() {
        assert_eq!(pagination_window(1, 0), None);
        assert_eq!(pagination_window(1, 1), None);
    }

    #[test]
    fn test_window_centers_on_current() {
        let window = pagination_window(6, 10).unwrap();
        assert_eq!(window.pages, vec![4, 5, 6, 7, 8]);
        assert!(window.has_prev && window.has_next);

        let window = pagination_window(1, 10).unwrap();
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(!window.has_prev);

        let window = pagination_window(10, 10).unwrap();
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(!window.has_next);

        let window = pagination_window(2, 3).unwrap();
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(window.pages.iter().all(|p| *p >= 1 && *p <= 3));
    }
}
