//! Result-range arithmetic for the "Showing X to Y of Z" caption.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based inclusive bounds of the results on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRange {
    /// First result shown.
    pub start_index: usize,
    /// Last result shown.
    pub end_index: usize,
    /// Number of results across all pages.
    pub total_count: usize,
}

impl ResultRange {
    /// Number of results on this page.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Always false; empty result sets are [`ResultSummary::NoResults`].
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Zero-based half-open bounds, for slicing the host's result list.
    pub fn as_offsets(&self) -> std::ops::Range<usize> {
        (self.start_index - 1)..self.end_index
    }
}

/// Caption content for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultSummary {
    /// There are no results at all.
    NoResults,
    /// Some results are shown.
    Showing(ResultRange),
}

impl ResultSummary {
    /// The range, if there are results.
    pub fn range(&self) -> Option<ResultRange> {
        match self {
            ResultSummary::NoResults => None,
            ResultSummary::Showing(range) => Some(*range),
        }
    }

    /// Check if there are no results.
    pub fn is_empty(&self) -> bool {
        matches!(self, ResultSummary::NoResults)
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSummary::NoResults => f.write_str("No results found"),
            ResultSummary::Showing(range) => write!(
                f,
                "Showing {} to {} of {} results",
                range.start_index, range.end_index, range.total_count
            ),
        }
    }
}

/// Compute which results `current_page` shows.
///
/// A page size of zero is treated as one. The page is clamped to the pages
/// that actually hold results, so `1 <= start <= end <= total_count` always
/// holds when there are results.
pub fn result_range(current_page: usize, total_count: usize, items_per_page: usize) -> ResultSummary {
    if total_count == 0 {
        return ResultSummary::NoResults;
    }

    let per_page = items_per_page.max(1);
    let last_page = total_count.div_ceil(per_page);
    let page = current_page.clamp(1, last_page);
    if page != current_page {
        tracing::debug!(
            requested = current_page,
            clamped = page,
            last_page,
            "result range page out of range, clamping"
        );
    }

    let start_index = (page - 1) * per_page + 1;
    let end_index = page.saturating_mul(per_page).min(total_count);

    ResultSummary::Showing(ResultRange {
        start_index,
        end_index,
        total_count,
    })
}
