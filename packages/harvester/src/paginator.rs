//! Page-number iteration with two-strike end-of-data detection.

/// Drives listing page numbers and decides when the data has ended.
///
/// A page with fewer than `threshold` records is suspicious but tolerated
/// once; a second consecutive short page ends the run.
#[derive(Debug, Clone)]
pub struct Paginator {
    next: u32,
    threshold: usize,
    possible_last_page: bool,
}

impl Paginator {
    pub fn new(threshold: usize) -> Self {
        Self {
            next: 1,
            threshold,
            possible_last_page: false,
        }
    }

    /// Page number to fetch next. Advances the counter.
    pub fn next_page(&mut self) -> u32 {
        let page = self.next;
        self.next += 1;
        page
    }

    /// Feed the record count of the page just fetched.
    ///
    /// Returns `true` when this page is the second short page in a row and
    /// the run should stop without processing it.
    pub fn record_end_of_data(&mut self, record_count: usize) -> bool {
        if record_count >= self.threshold {
            self.possible_last_page = false;
            return false;
        }
        if self.possible_last_page {
            return true;
        }
        self.possible_last_page = true;
        false
    }

    /// Whether the previous page was short.
    pub fn possible_last_page(&self) -> bool {
        self.possible_last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Page number on which the run stops, if any.
    fn stop_page(counts: &[usize]) -> Option<u32> {
        let mut paginator = Paginator::new(10);
        for &count in counts {
            let page = paginator.next_page();
            if paginator.record_end_of_data(count) {
                return Some(page);
            }
        }
        None
    }

    #[test]
    fn test_starts_at_page_one() {
        let mut paginator = Paginator::new(10);
        assert_eq!(paginator.next_page(), 1);
        assert_eq!(paginator.next_page(), 2);
        assert_eq!(paginator.next_page(), 3);
    }

    #[test]
    fn test_single_short_page_tolerated() {
        assert_eq!(stop_page(&[10, 10, 5, 10]), None);
    }

    #[test]
    fn test_two_consecutive_short_pages_stop() {
        assert_eq!(stop_page(&[10, 5, 3]), Some(3));
        assert_eq!(stop_page(&[0, 0]), Some(2));
    }

    #[test]
    fn test_full_page_clears_flag() {
        assert_eq!(stop_page(&[5, 10, 5, 10, 5, 4]), Some(6));
    }

    #[test]
    fn test_flag_tracking() {
        let mut paginator = Paginator::new(10);
        assert!(!paginator.possible_last_page());
        assert!(!paginator.record_end_of_data(9));
        assert!(paginator.possible_last_page());
        assert!(!paginator.record_end_of_data(12));
        assert!(!paginator.possible_last_page());
    }
}
