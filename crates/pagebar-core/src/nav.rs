//! Navigation guards and page-change intents.

use serde::{Deserialize, Serialize};

use crate::state::clamp_page;

/// Whether the previous/next controls are disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationGuard {
    /// "Previous" is disabled on the first page or when there are no pages.
    pub previous_disabled: bool,
    /// "Next" is disabled on the last page or when there are no pages.
    pub next_disabled: bool,
}

impl NavigationGuard {
    /// Derive the guards from the same inputs the planner uses.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        if total_pages == 0 {
            return Self {
                previous_disabled: true,
                next_disabled: true,
            };
        }

        let current = clamp_page(current_page, total_pages);
        Self {
            previous_disabled: current == 1,
            next_disabled: current == total_pages,
        }
    }
}

/// A request from the user to show a different page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageIntent {
    /// The "previous" control.
    Previous,
    /// The "next" control.
    Next,
    /// Jump to page 1.
    First,
    /// Jump to the last page.
    Last,
    /// A numbered page button.
    Page(usize),
}

impl PageIntent {
    /// Resolve this intent to a target page.
    ///
    /// Returns `None` when the control is disabled or the target does not
    /// exist. Clicking the current page resolves to the current page.
    pub fn resolve(self, current_page: usize, total_pages: usize) -> Option<usize> {
        if total_pages == 0 {
            return None;
        }

        let guard = NavigationGuard::new(current_page, total_pages);
        let current = clamp_page(current_page, total_pages);

        match self {
            PageIntent::Previous if guard.previous_disabled => None,
            PageIntent::Previous => Some(current - 1),
            PageIntent::Next if guard.next_disabled => None,
            PageIntent::Next => Some(current + 1),
            PageIntent::First => Some(1),
            PageIntent::Last => Some(total_pages),
            PageIntent::Page(page) if (1..=total_pages).contains(&page) => Some(page),
            PageIntent::Page(_) => None,
        }
    }
}

/// Receiver for page-change requests, implemented by hosts.
pub trait PageChangeHandler {
    /// Called with the page the user asked for.
    fn on_page_change(&mut self, page: usize);
}

impl<F: FnMut(usize)> PageChangeHandler for F {
    fn on_page_change(&mut self, page: usize) {
        self(page)
    }
}

/// Resolve `intent` and forward the target page to `handler`.
///
/// Returns the page passed to the handler, or `None` if the intent was
/// rejected by the navigation guards.
pub fn dispatch<H: PageChangeHandler + ?Sized>(
    intent: PageIntent,
    current_page: usize,
    total_pages: usize,
    handler: &mut H,
) -> Option<usize> {
    let target = intent.resolve(current_page, total_pages);
    match target {
        Some(page) => handler.on_page_change(page),
        None => tracing::trace!(?intent, current_page, total_pages, "page intent ignored"),
    }
    target
}
