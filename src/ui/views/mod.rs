//! Screen bodies. Every function here is a pure rendering of one state.
//!
//! - `grid.rs` - card grid shared by every screen that lists records
//! - `list.rs` - search box, banners and pagination around a list grid
//! - `landing.rs`, `films.rs`, `customers.rs`, `film_detail.rs`, `actor_detail.rs`

mod actor_detail;
mod customers;
mod film_detail;
mod films;
mod grid;
mod landing;
mod list;

pub use actor_detail::render_actor_detail;
pub use customers::render_customers;
pub use film_detail::render_film_detail;
pub use films::render_films;
pub use landing::render_landing;

use crate::ui::theme::{BRAND, ERROR, LOADING, MUTED, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(crate) fn loading_line(tick: u64) -> Line<'static> {
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(format!("{spinner} "), Style::default().fg(LOADING)),
        Span::styled("Loading...", Style::default().fg(TEXT)),
    ])
}

pub(crate) fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("Error: {message}"),
        Style::default().fg(ERROR),
    ))
}

pub(crate) fn muted_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(MUTED)))
}

pub(crate) fn title_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
    ))
}

/// `label: value` with the label in bold.
pub(crate) fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.into(), Style::default().fg(TEXT)),
    ])
}

/// `◀ Page p of N ▶`, with the arrows dimmed at either end.
pub(crate) fn pagination_line(page: u32, total_pages: u32) -> Line<'static> {
    let enabled = Style::default().fg(BRAND);
    let disabled = Style::default().fg(MUTED).add_modifier(Modifier::DIM);
    Line::from(vec![
        Span::styled("◀ Previous  ", if page > 1 { enabled } else { disabled }),
        Span::styled(
            format!("Page {page} of {total_pages}"),
            Style::default().fg(TEXT),
        ),
        Span::styled("  Next ▶", if page < total_pages { enabled } else { disabled }),
    ])
}

pub(crate) fn render_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(lines), area);
}
