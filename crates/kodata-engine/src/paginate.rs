use serde::Serialize;

/// Cards per catalog page
pub const PAGE_SIZE: usize = 12;

/// One window over a sequence. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

/// `ceil(len / page_size)`, never below 1 so "1 / 1" is shown for an empty list
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slice `[(page-1)*page_size, page*page_size)` clamped to the bounds of `items`
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let start = ((page - 1).saturating_mul(page_size)).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages: total_pages(items.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_one_page() {
        let empty: [u32; 0] = [];
        let page = paginate(&empty, 1, PAGE_SIZE);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_twenty_five_items_make_three_pages() {
        let items: Vec<usize> = (0..25).collect();

        let first = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 12);

        let last = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(last.items, &[24]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<usize> = (0..5).collect();
        let page = paginate(&items, 4, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_total_pages_exact_multiple() {
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(1, 12), 1);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let items: Vec<usize> = (0..3).collect();
        let page = paginate(&items, 0, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, &[0, 1]);
    }
}
