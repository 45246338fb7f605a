//! Pagination configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::planner::{MAX_PAGES_TO_SHOW, PageWindowPlanner};
use crate::state::DEFAULT_ITEMS_PER_PAGE;

/// Smallest compression threshold for which the window never repeats an edge page.
pub(crate) const MIN_PAGES_TO_SHOW: usize = 3;

/// Configuration for a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct PaginationConfig {
    /// Number of results on each page.
    #[builder(default = "DEFAULT_ITEMS_PER_PAGE")]
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Page count above which the button row is compressed.
    #[builder(default = "MAX_PAGES_TO_SHOW")]
    #[serde(default = "default_max_pages_to_show")]
    pub max_pages_to_show: usize,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_max_pages_to_show() -> usize {
    MAX_PAGES_TO_SHOW
}

impl PaginationConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.items_per_page == Some(0) {
            return Err("items_per_page must be at least 1".to_string());
        }
        if let Some(max) = self.max_pages_to_show
            && max < MIN_PAGES_TO_SHOW
        {
            return Err(format!(
                "max_pages_to_show must be at least {MIN_PAGES_TO_SHOW}, got {max}"
            ));
        }
        Ok(())
    }
}

impl PaginationConfig {
    /// Create a new config builder.
    pub fn builder() -> PaginationConfigBuilder {
        PaginationConfigBuilder::default()
    }

    /// Planner configured with this compression threshold.
    pub fn planner(&self) -> PageWindowPlanner {
        PageWindowPlanner::with_max_pages(self.max_pages_to_show)
    }

    /// Re-check the invariants the builder enforces.
    ///
    /// Deserialized configs bypass the builder, so callers loading from disk
    /// should run this before use.
    pub fn validate(&self) -> Result<(), crate::PaginationError> {
        if self.items_per_page == 0 {
            return Err(crate::PaginationError::ZeroItemsPerPage);
        }
        if self.max_pages_to_show < MIN_PAGES_TO_SHOW {
            return Err(crate::PaginationError::invalid_config(format!(
                "max_pages_to_show must be at least {MIN_PAGES_TO_SHOW}, got {}",
                self.max_pages_to_show
            )));
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_pages_to_show: MAX_PAGES_TO_SHOW,
        }
    }
}
