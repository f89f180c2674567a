use crate::ui::catalog::{CatalogEntity, ListState};
use crate::ui::theme::{BRAND, ERROR, FRAME_BORDER, MUTED, TEXT};
use crate::ui::views::grid::{render_grid, Card};
use crate::ui::views::{error_line, loading_line, muted_line, pagination_line, render_lines, title_line};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Everything a list screen shows besides its cards.
pub(crate) struct ListView<'a, T: CatalogEntity> {
    pub title: &'static str,
    pub state: &'a ListState<T>,
    /// Search qualifier row, for screens that have one.
    pub selector: Option<Line<'static>>,
    pub placeholder: &'static str,
    pub editing: bool,
    pub tick: u64,
}

pub(crate) fn render_list<T: CatalogEntity>(
    frame: &mut Frame,
    area: Rect,
    view: ListView<'_, T>,
    cards: Vec<Card>,
) {
    let state = view.state;
    let selector_height = if view.selector.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(selector_height),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_lines(frame, chunks[0], vec![title_line(view.title)]);
    if let Some(selector) = view.selector {
        render_lines(frame, chunks[1], vec![selector]);
    }
    render_search_box(frame, chunks[2], &state.query, view.placeholder, view.editing);
    if let Some(error) = &state.validation_error {
        render_lines(
            frame,
            chunks[3],
            vec![Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(ERROR),
            ))],
        );
    }
    if let Some(error) = &state.error {
        render_lines(frame, chunks[4], vec![error_line(error)]);
    }

    if state.loading {
        render_lines(frame, chunks[5], vec![loading_line(view.tick)]);
    } else if state.items.is_empty() {
        render_lines(frame, chunks[5], vec![muted_line(state.empty_message())]);
    } else {
        if state.is_searching() {
            render_lines(
                frame,
                chunks[5],
                vec![title_line(format!("Search Results ({})", state.result_count()))],
            );
        }
        render_grid(frame, chunks[6], &cards, Some(state.selected));
    }

    if !state.loading && state.total_pages > 1 {
        render_lines(
            frame,
            chunks[7],
            vec![pagination_line(state.page, state.total_pages)],
        );
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, query: &str, placeholder: &str, editing: bool) {
    if area.height == 0 {
        return;
    }
    let border = if editing { BRAND } else { FRAME_BORDER };
    let text = if query.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(MUTED))
    } else {
        Span::styled(query.to_string(), Style::default().fg(TEXT))
    };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if editing && inner.width > 0 && inner.height > 0 {
        let offset = (query.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}
