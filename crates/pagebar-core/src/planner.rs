//! Page-window planning.
//!
//! Short page counts are listed in full. Longer ones are compressed to the
//! first page, a three-page window around the current page and the last
//! page, with ellipsis markers wherever pages were skipped:
//!
//! ```text
//! 10 pages, current 1:   [1] 2 3 … 10
//! 10 pages, current 5:   1 … 4 [5] 6 … 10
//! 10 pages, current 10:  1 … 8 9 [10]
//! ```

use serde::{Deserialize, Serialize};

use crate::entry::DisplayEntry;
use crate::nav::NavigationGuard;
use crate::state::{PaginationState, clamp_page};

/// Maximum number of page buttons shown without compression.
pub const MAX_PAGES_TO_SHOW: usize = 5;

/// Full button-row plan for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPlan {
    /// Page the plan was computed for (after clamping), or 0 when there are
    /// no pages.
    pub current_page: usize,
    /// Number of pages available.
    pub total_pages: usize,
    /// Buttons and ellipsis markers, left to right.
    pub entries: Vec<DisplayEntry>,
    /// Previous/next guards.
    #[serde(flatten)]
    pub navigation: NavigationGuard,
}

impl PaginationPlan {
    /// Whether the "previous" control is disabled.
    pub fn previous_disabled(&self) -> bool {
        self.navigation.previous_disabled
    }

    /// Whether the "next" control is disabled.
    pub fn next_disabled(&self) -> bool {
        self.navigation.next_disabled
    }

    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Page numbers in display order, skipping ellipsis markers.
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().filter_map(DisplayEntry::page_number)
    }
}

/// Computes which page buttons a pagination control displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowPlanner {
    max_pages_to_show: usize,
}

impl Default for PageWindowPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWindowPlanner {
    /// Create a planner with the default compression threshold.
    pub fn new() -> Self {
        Self {
            max_pages_to_show: MAX_PAGES_TO_SHOW,
        }
    }

    /// Create a planner with a custom compression threshold.
    ///
    /// Thresholds below 3 are raised to 3; smaller values would make the
    /// window overlap the first or last page.
    pub fn with_max_pages(max_pages_to_show: usize) -> Self {
        Self {
            max_pages_to_show: max_pages_to_show.max(crate::config::MIN_PAGES_TO_SHOW),
        }
    }

    /// Page count above which the row is compressed.
    pub fn max_pages_to_show(&self) -> usize {
        self.max_pages_to_show
    }

    /// Compute the ordered button row for `current_page` of `total_pages`.
    ///
    /// Returns an empty row when `total_pages` is zero. An out-of-range
    /// `current_page` is clamped into `1..=total_pages`.
    pub fn plan(&self, current_page: usize, total_pages: usize) -> Vec<DisplayEntry> {
        if total_pages == 0 {
            return Vec::new();
        }

        let current = clamp_page(current_page, total_pages);
        if current != current_page {
            tracing::debug!(
                requested = current_page,
                clamped = current,
                total_pages,
                "current page out of range, clamping"
            );
        }

        if total_pages <= self.max_pages_to_show {
            return (1..=total_pages)
                .map(|page| DisplayEntry::page(page, current))
                .collect();
        }

        let (start, end) = Self::window(current, total_pages);
        tracing::trace!(current, total_pages, start, end, "compressed page window");

        let mut entries = Vec::with_capacity(end - start + 5);
        entries.push(DisplayEntry::page(1, current));

        if start > 2 {
            entries.push(DisplayEntry::Ellipsis);
        }

        entries.extend((start..=end).map(|page| DisplayEntry::page(page, current)));

        if end < total_pages - 1 {
            entries.push(DisplayEntry::Ellipsis);
        }

        entries.push(DisplayEntry::page(total_pages, current));
        entries
    }

    /// Compute the full plan, including navigation guards, for a host state.
    ///
    /// With no pages there is no current page, so `current_page` is 0.
    pub fn plan_state(&self, state: &PaginationState) -> PaginationPlan {
        let current_page = if state.total_pages == 0 {
            0
        } else {
            clamp_page(state.current_page, state.total_pages)
        };

        PaginationPlan {
            current_page,
            total_pages: state.total_pages,
            entries: self.plan(state.current_page, state.total_pages),
            navigation: NavigationGuard::new(state.current_page, state.total_pages),
        }
    }

    /// Interior window `[start, end]` for compressed mode.
    ///
    /// Requires `total_pages >= 4` and `1 <= current <= total_pages`.
    fn window(current: usize, total_pages: usize) -> (usize, usize) {
        let mut start = current.saturating_sub(1).max(2);
        let mut end = current.saturating_add(1).min(total_pages - 1);

        // Near-start check wins when both would apply.
        if current <= 2 {
            end = 3;
        } else if current >= total_pages - 1 {
            start = total_pages - 2;
        }

        (start, end)
    }
}
