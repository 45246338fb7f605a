//! Interactive pagination host.
//!
//! The app owns the current page. Every frame it asks the core for a fresh
//! plan and result range, draws them, and applies the page-change intents
//! produced by keys and mouse clicks.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use pagebar_core::{
    PageChangeHandler, PageIntent, PageWindowPlanner, PaginationPlan, PaginationState,
    ResultSummary, clamp_page, dispatch, total_pages,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::{DefaultTerminal, Frame};

use crate::TuiConfig;
use crate::event::KeyAction;
use crate::settings::UserSettings;
use crate::theme::Theme;
use crate::ui::{AppLayout, HelpOverlay, PaginationBar, centered_row, summary_line};

/// Result type for the TUI.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    state: PaginationState,
    planner: PageWindowPlanner,
    theme: Theme,
    settings: UserSettings,
    show_help: bool,
    status: Option<String>,
    /// Where the pagination bar was drawn last frame, for mouse hit-testing.
    bar_area: Rect,
    should_quit: bool,
}

impl App {
    /// Create an app paging through `total_count` results with default settings.
    pub fn new(total_count: usize) -> Self {
        Self::with_config(total_count, TuiConfig::default())
    }

    /// Create an app with a custom configuration.
    pub fn with_config(total_count: usize, config: TuiConfig) -> Self {
        let pagination = config.settings.pagination;
        let pages = total_pages(total_count, pagination.items_per_page);
        let state = PaginationState::from_total_count(
            clamp_page(config.start_page, pages),
            total_count,
            pagination.items_per_page,
        );

        Self {
            state,
            planner: pagination.planner(),
            theme: Theme::from_variant(config.settings.theme),
            settings: config.settings,
            show_help: false,
            status: None,
            bar_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Current pagination state.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the help overlay is open.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the app has been asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Area the pagination bar occupied in the last rendered frame.
    pub fn bar_area(&self) -> Rect {
        self.bar_area
    }

    /// Fresh plan for the current state.
    pub fn plan(&self) -> PaginationPlan {
        self.state.plan(&self.planner)
    }

    /// Run the event loop until the user quits.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        tracing::debug!(
            total_count = self.state.total_count,
            total_pages = self.state.total_pages,
            "starting pagination host"
        );

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_action(KeyAction::from_key_event(key));
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }

        Ok(())
    }

    /// Apply a key action.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.should_quit = true,
            KeyAction::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.status = None;
                }
            }
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.settings.theme = self.theme.variant;
            }
            KeyAction::SaveSettings => self.save_settings(),
            KeyAction::None => {}
            KeyAction::PreviousPage
            | KeyAction::NextPage
            | KeyAction::FirstPage
            | KeyAction::LastPage => {
                if let Some(intent) = action.intent() {
                    self.handle_intent(intent);
                }
            }
        }
    }

    /// Apply a page-change intent. Returns the new page if it was accepted.
    pub fn handle_intent(&mut self, intent: PageIntent) -> Option<usize> {
        let current = self.state.current_page;
        let total = self.state.total_pages;
        dispatch(intent, current, total, self)
    }

    /// Apply a mouse event, clicking pagination buttons.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) || self.show_help {
            return;
        }

        let plan = self.plan();
        let intent = PaginationBar::new(&plan, &self.theme).hit_test(
            self.bar_area,
            event.column,
            event.row,
        );

        if let Some(intent) = intent {
            self.handle_intent(intent);
        }
    }

    fn save_settings(&mut self) {
        self.status = Some(match self.settings.save() {
            Ok(path) => format!("Settings saved to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to save settings");
                format!("Failed to save settings: {e}")
            }
        });
    }

    /// Draw one frame.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::new(area);
        let plan = self.plan();
        let summary = self.state.summary();
        let buf = frame.buffer_mut();

        self.render_header(layout.header, buf);
        self.render_results(layout.main, &summary, buf);

        Paragraph::new(summary_line(&summary, &self.theme))
            .alignment(Alignment::Center)
            .render(layout.caption, buf);

        let bar = PaginationBar::new(&plan, &self.theme);
        let bar_area = centered_row(layout.bar, bar.width());
        bar.render(bar_area, buf);
        self.bar_area = bar_area;

        self.render_footer(layout.footer, buf);

        if self.show_help {
            HelpOverlay::new(&self.theme).render(area, buf);
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let position = if self.state.total_pages == 0 {
            "no pages".to_string()
        } else {
            format!("page {} of {}", self.state.current_page, self.state.total_pages)
        };

        let line = Line::from(vec![
            Span::styled(" pagebar ", self.theme.title),
            Span::styled(format!(" {position}"), self.theme.header),
        ]);
        Paragraph::new(line).style(self.theme.header).render(area, buf);
    }

    fn render_results(&self, area: Rect, summary: &ResultSummary, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Results ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let lines: Vec<Line> = match summary.range() {
            Some(range) => (range.start_index..=range.end_index)
                .take(usize::from(area.height.saturating_sub(2)))
                .map(|index| {
                    Line::from(vec![
                        Span::styled(format!("{index:>6}  "), self.theme.item_index),
                        Span::styled(format!("Result #{index}"), self.theme.item),
                    ])
                })
                .collect(),
            None => vec![Line::from(Span::styled(summary.to_string(), self.theme.empty))],
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let text = match &self.status {
            Some(status) => format!(" {status}"),
            None => " ←/→ page  g/G first/last  t theme  ? help  q quit".to_string(),
        };
        Paragraph::new(text).style(self.theme.footer).render(area, buf);
    }
}

impl PageChangeHandler for App {
    fn on_page_change(&mut self, page: usize) {
        tracing::debug!(from = self.state.current_page, to = page, "page changed");
        self.state.current_page = page;
        self.status = None;
    }
}
