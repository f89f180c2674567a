use crate::ui::app::{App, InputMode, Screen};
use crate::ui::theme::{ERROR, FRAME_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current screen, or the last shell notice.
pub struct Footer<'a> {
    app: &'a App,
}

impl<'a> Footer<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn hints(&self) -> &'static str {
        match self.app.input_mode() {
            InputMode::GoTo(_) => " Enter: Go │ Esc: Cancel",
            InputMode::Search => match self.app.screen() {
                Screen::Films(_) => " Enter: Search │ Tab: Search By │ Esc: Done",
                _ => " Enter: Search │ Esc: Done",
            },
            InputMode::Normal => match self.app.screen() {
                Screen::Films(_) => {
                    " /: Search │ Tab: Search By │ c: Clear │ ←/→: Page │ Enter: Open │ g: Go To │ q: Quit"
                }
                Screen::Customers(_) => {
                    " /: Search │ c: Clear │ ←/→: Page │ r: Reload │ g: Go To │ q: Quit"
                }
                Screen::Landing(_) | Screen::ActorDetail(_) => {
                    " ↑/↓: Select │ Enter: Open │ b: Back │ r: Reload │ g: Go To │ q: Quit"
                }
                Screen::FilmDetail(_) => " b: Back │ r: Reload │ g: Go To │ q: Quit",
            },
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match self.app.notice() {
            Some(notice) => (format!(" {notice}"), Style::default().fg(ERROR)),
            None => (self.hints().to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(FRAME_BORDER)),
            )
    }
}
