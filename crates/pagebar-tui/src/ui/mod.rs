//! UI components and widgets.

mod help;
mod pagination_bar;

pub use help::HelpOverlay;
pub use pagination_bar::{BarSegment, PaginationBar};

use pagebar_core::ResultSummary;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub caption: Rect,
    pub bar: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let [header, main, caption, bar, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            main,
            caption,
            bar,
            footer,
        }
    }
}

/// Center a row of `width` cells horizontally inside `area`.
pub fn centered_row(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height.min(1))
}

/// Caption line: the result range, or a distinct empty-state message.
pub fn summary_line(summary: &ResultSummary, theme: &Theme) -> Line<'static> {
    let style = if summary.is_empty() {
        theme.empty
    } else {
        theme.caption
    };
    Line::from(Span::styled(summary.to_string(), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar_core::result_range;

    #[test]
    fn test_centered_row() {
        let area = Rect::new(0, 5, 40, 1);
        assert_eq!(centered_row(area, 10), Rect::new(15, 5, 10, 1));
        assert_eq!(centered_row(area, 100), Rect::new(0, 5, 40, 1));
    }

    #[test]
    fn test_summary_line_styles() {
        let theme = Theme::dark();

        let empty = summary_line(&result_range(1, 0, 9), &theme);
        assert_eq!(empty.spans[0].content, "No results found");
        assert_eq!(empty.spans[0].style, theme.empty);

        let some = summary_line(&result_range(3, 25, 9), &theme);
        assert_eq!(some.spans[0].content, "Showing 19 to 25 of 25 results");
        assert_eq!(some.spans[0].style, theme.caption);
    }
}
