//! Page arithmetic for list endpoints.

/// Number of pages needed for `total` items at `page_size` items per page.
/// A missing or zero page size means everything fits on one page.
pub fn page_count(total: usize, page_size: Option<usize>) -> usize {
    match page_size {
        Some(size) if size > 0 => total.div_ceil(size),
        _ => 1,
    }
}

/// Slice out a 1-based page. Pages before the first are treated as the first;
/// pages past the end are empty.
pub fn page<T: Clone>(items: &[T], page: Option<usize>, page_size: Option<usize>) -> Vec<T> {
    let Some(size) = page_size.filter(|s| *s > 0) else {
        return items.to_vec();
    };
    let page = page.unwrap_or(1).max(1);
    items
        .iter()
        .skip((page - 1).saturating_mul(size))
        .take(size)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(10, Some(3)), 4);
        assert_eq!(page_count(9, Some(3)), 3);
        assert_eq!(page_count(0, Some(3)), 0);
        assert_eq!(page_count(7, None), 1);
    }

    #[test]
    fn page_slices_one_based() {
        let items: Vec<i32> = (1..=7).collect();
        assert_eq!(page(&items, Some(1), Some(3)), vec![1, 2, 3]);
        assert_eq!(page(&items, Some(3), Some(3)), vec![7]);
        assert!(page(&items, Some(4), Some(3)).is_empty());
        assert_eq!(page(&items, Some(0), Some(3)), vec![1, 2, 3]);
        assert_eq!(page(&items, None, None).len(), 7);
    }
}
