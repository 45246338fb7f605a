//! Terminal user interface for pagebar.
//!
//! This crate renders pagination plans with ratatui and hosts an interactive
//! pager over a synthetic result list:
//!
//! - **PaginationBar** - widget drawing previous/next controls, page buttons
//!   and ellipsis markers, with mouse hit-testing
//! - **App** - host that owns the current page and applies page intents
//! - **UserSettings** - theme and pagination settings persisted as TOML
//!
//! # Usage
//!
//! ```rust,no_run
//! // Page through 95 results with the saved settings
//! pagebar_tui::run(95).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `h`/`l`, `←`/`→` - Previous/next page
//! - `g`/`G`, `Home`/`End` - First/last page
//! - Mouse click - Jump to a page
//! - `t` - Toggle theme
//! - `?` - Help
//! - `q` - Quit

pub mod app;
mod event;
mod settings;
mod theme;
mod ui;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use pagebar_core::PaginationConfig;

pub use app::{App, AppResult};
pub use event::KeyAction;
pub use settings::UserSettings;
pub use theme::{Theme, ThemeVariant};
pub use ui::{BarSegment, PaginationBar};

/// Configuration for the TUI host.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Theme and pagination settings.
    pub settings: UserSettings,
    /// Page shown on startup (clamped to the available pages).
    pub start_page: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            start_page: 1,
        }
    }
}

impl TuiConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from loaded user settings.
    pub fn from_settings(settings: UserSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Set the page shown on startup.
    pub fn with_start_page(mut self, page: usize) -> Self {
        self.start_page = page;
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.settings.theme = theme;
        self
    }

    /// Set the pagination config.
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.settings.pagination = pagination;
        self
    }
}

/// Run the TUI with the saved user settings.
pub fn run(total_count: usize) -> AppResult<()> {
    run_with_config(total_count, TuiConfig::from_settings(UserSettings::load()))
}

/// Run the TUI with custom configuration.
pub fn run_with_config(total_count: usize, config: TuiConfig) -> AppResult<()> {
    let terminal = ratatui::init();

    let result = crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::with_config(total_count, config).run(terminal));

    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
    ratatui::restore();

    result
}
