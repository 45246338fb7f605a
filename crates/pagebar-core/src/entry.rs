//! Display entries produced by the page-window planner.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One slot in the pagination button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayEntry {
    /// A clickable page button.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the page currently shown.
        is_current: bool,
    },
    /// Non-interactive placeholder for omitted pages.
    Ellipsis,
}

impl DisplayEntry {
    /// Create a page entry, marking it current when `number == current_page`.
    pub fn page(number: usize, current_page: usize) -> Self {
        DisplayEntry::Page {
            number,
            is_current: number == current_page,
        }
    }

    /// Page number, if this entry is a page button.
    pub fn page_number(&self) -> Option<usize> {
        match self {
            DisplayEntry::Page { number, .. } => Some(*number),
            DisplayEntry::Ellipsis => None,
        }
    }

    /// Check if this is the current page.
    pub fn is_current(&self) -> bool {
        matches!(self, DisplayEntry::Page { is_current: true, .. })
    }

    /// Check if this is an ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, DisplayEntry::Ellipsis)
    }
}

impl fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayEntry::Page {
                number,
                is_current: true,
            } => write!(f, "[{number}]"),
            DisplayEntry::Page { number, .. } => write!(f, "{number}"),
            DisplayEntry::Ellipsis => f.write_str("…"),
        }
    }
}
