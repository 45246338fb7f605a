//! Core types and algorithms for pagebar.
//!
//! This crate computes a display plan for a pagination control:
//!
//! - **Page window** - which page buttons to show, with ellipsis markers
//!   standing in for compressed ranges
//! - **Result range** - the "Showing X to Y of Z results" caption
//! - **Navigation** - previous/next guards and page-change intents
//!
//! Everything here is a pure function of its inputs. Hosts own the current
//! page, recompute the plan on every render and apply the intents they
//! receive.
//!
//! ```rust
//! use pagebar_core::{DisplayEntry, PageWindowPlanner};
//!
//! let planner = PageWindowPlanner::new();
//! let entries = planner.plan(5, 10);
//!
//! assert_eq!(entries.first(), Some(&DisplayEntry::page(1, 5)));
//! assert_eq!(entries.len(), 7);
//! ```

mod config;
mod entry;
mod error;
mod nav;
mod planner;
mod range;
mod state;

pub use config::{PaginationConfig, PaginationConfigBuilder};
pub use entry::DisplayEntry;
pub use error::PaginationError;
pub use nav::{NavigationGuard, PageChangeHandler, PageIntent, dispatch};
pub use planner::{MAX_PAGES_TO_SHOW, PageWindowPlanner, PaginationPlan};
pub use range::{ResultRange, ResultSummary, result_range};
pub use state::{DEFAULT_ITEMS_PER_PAGE, PaginationState, clamp_page, total_pages};
