//! Host-owned pagination state.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;
use crate::nav::NavigationGuard;
use crate::planner::{PageWindowPlanner, PaginationPlan};
use crate::range::{ResultSummary, result_range};

/// Page size used when the host does not pick one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Compute the number of pages needed for `total_count` items.
pub fn total_pages(total_count: usize, items_per_page: usize) -> usize {
    total_count.div_ceil(items_per_page.max(1))
}

/// Clamp a requested page into `1..=total_pages` (or to 1 when there are no pages).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Inputs for one render of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// 1-based page being shown.
    pub current_page: usize,
    /// Number of pages available.
    pub total_pages: usize,
    /// Number of results across all pages.
    #[serde(default)]
    pub total_count: usize,
    /// Results per page.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl PaginationState {
    /// Create state for a page/page-count pair with no result count.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_count: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    /// Create state for a result count, deriving the page count.
    pub fn from_total_count(current_page: usize, total_count: usize, items_per_page: usize) -> Self {
        Self {
            current_page,
            total_pages: total_pages(total_count, items_per_page),
            total_count,
            items_per_page,
        }
    }

    /// Set the total result count.
    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.total_count = total_count;
        self
    }

    /// Set the page size.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Return a copy showing a different page.
    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    /// Check the documented input invariants.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.items_per_page == 0 {
            return Err(PaginationError::ZeroItemsPerPage);
        }
        if self.total_pages == 0 {
            return if self.total_count == 0 {
                Ok(())
            } else {
                Err(PaginationError::NoPages)
            };
        }
        if self.current_page == 0 || self.current_page > self.total_pages {
            return Err(PaginationError::PageOutOfRange {
                page: self.current_page,
                total_pages: self.total_pages,
            });
        }
        Ok(())
    }

    /// Button row for this state.
    pub fn plan(&self, planner: &PageWindowPlanner) -> PaginationPlan {
        planner.plan_state(self)
    }

    /// Result caption for this state.
    pub fn summary(&self) -> ResultSummary {
        result_range(self.current_page, self.total_count, self.items_per_page)
    }

    /// Previous/next guards for this state.
    pub fn navigation(&self) -> NavigationGuard {
        NavigationGuard::new(self.current_page, self.total_pages)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(1, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(25, 9), 3);
        // Zero page size is treated as one item per page
        assert_eq!(total_pages(4, 0), 4);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_from_total_count() {
        let state = PaginationState::from_total_count(2, 25, 9);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.total_count, 25);
        assert_eq!(state.items_per_page, 9);
    }

    #[test]
    fn test_validate() {
        assert!(PaginationState::new(1, 3).validate().is_ok());
        assert!(PaginationState::default().validate().is_ok());

        assert_eq!(
            PaginationState::new(4, 3).validate(),
            Err(PaginationError::PageOutOfRange {
                page: 4,
                total_pages: 3
            })
        );
        assert!(matches!(
            PaginationState::new(0, 3).validate(),
            Err(PaginationError::PageOutOfRange { .. })
        ));
        assert_eq!(
            PaginationState::new(1, 3).with_items_per_page(0).validate(),
            Err(PaginationError::ZeroItemsPerPage)
        );
        assert_eq!(
            PaginationState::new(1, 0).with_total_count(5).validate(),
            Err(PaginationError::NoPages)
        );
    }

    #[test]
    fn test_summary_uses_state_fields() {
        let state = PaginationState::from_total_count(3, 25, 9);
        let range = state.summary().range().unwrap();
        assert_eq!(range.start_index, 19);
        assert_eq!(range.end_index, 25);
    }
}
