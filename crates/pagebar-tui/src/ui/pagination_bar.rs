//! Pagination bar widget: previous/next controls around the page buttons.

use pagebar_core::{DisplayEntry, PageIntent, PaginationPlan};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const PREVIOUS_LABEL: &str = "‹";
const NEXT_LABEL: &str = "›";
const ELLIPSIS_LABEL: &str = "…";

/// Cells between adjacent buttons.
const GAP: u16 = 1;

/// A placed button of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSegment {
    /// Cells occupied by the button.
    pub area: Rect,
    /// Padded button text.
    pub label: String,
    /// Intent reported on click; `None` for ellipsis and disabled controls.
    pub intent: Option<PageIntent>,
    /// Style the button is drawn with.
    pub style: Style,
}

/// Renders a [`PaginationPlan`] as a single row of buttons.
pub struct PaginationBar<'a> {
    plan: &'a PaginationPlan,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Create a new pagination bar.
    pub fn new(plan: &'a PaginationPlan, theme: &'a Theme) -> Self {
        Self { plan, theme }
    }

    /// Buttons in display order, before placement.
    fn buttons(&self) -> Vec<(String, Option<PageIntent>, Style)> {
        let mut buttons = Vec::with_capacity(self.plan.entries.len() + 2);

        let (style, intent) = if self.plan.previous_disabled() {
            (self.theme.nav_disabled, None)
        } else {
            (self.theme.nav, Some(PageIntent::Previous))
        };
        buttons.push((pad(PREVIOUS_LABEL), intent, style));

        for entry in &self.plan.entries {
            buttons.push(match entry {
                DisplayEntry::Page { number, is_current } => {
                    let style = if *is_current {
                        self.theme.current_page
                    } else {
                        self.theme.page
                    };
                    (pad(&number.to_string()), Some(PageIntent::Page(*number)), style)
                }
                DisplayEntry::Ellipsis => (pad(ELLIPSIS_LABEL), None, self.theme.ellipsis),
            });
        }

        let (style, intent) = if self.plan.next_disabled() {
            (self.theme.nav_disabled, None)
        } else {
            (self.theme.nav, Some(PageIntent::Next))
        };
        buttons.push((pad(NEXT_LABEL), intent, style));

        buttons
    }

    /// Total width of the bar in cells.
    pub fn width(&self) -> u16 {
        let buttons = self.buttons();
        let labels: u16 = buttons.iter().map(|(label, ..)| label.width() as u16).sum();
        labels + GAP * buttons.len().saturating_sub(1) as u16
    }

    /// Place the buttons left to right in `area`, dropping any that do not fit.
    pub fn layout(&self, area: Rect) -> Vec<BarSegment> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let mut segments = Vec::new();
        let mut x = area.x;
        let right = area.x + area.width;

        for (label, intent, style) in self.buttons() {
            let width = label.width() as u16;
            if x + width > right {
                break;
            }
            segments.push(BarSegment {
                area: Rect::new(x, area.y, width, 1),
                label,
                intent,
                style,
            });
            x += width + GAP;
        }

        segments
    }

    /// Intent of the button at a terminal cell, if any.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<PageIntent> {
        self.layout(area)
            .into_iter()
            .find(|segment| {
                row == segment.area.y
                    && column >= segment.area.x
                    && column < segment.area.x + segment.area.width
            })
            .and_then(|segment| segment.intent)
    }
}

fn pad(label: &str) -> String {
    format!(" {label} ")
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for segment in self.layout(area) {
            buf.set_string(segment.area.x, segment.area.y, &segment.label, segment.style);
        }
    }
}
