use crate::api::Film;
use crate::ui::theme::{BRAND, FRAME_BORDER, SELECTED_BG, TEXT};
use crate::ui::views::field_line;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Below this width the grid collapses to one column.
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

/// One record in a grid.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub lines: Vec<Line<'static>>,
}

impl Card {
    fn height(&self) -> u16 {
        self.lines.len() as u16 + 2
    }
}

pub fn film_card(film: &Film) -> Card {
    Card {
        title: film.title.clone(),
        lines: vec![
            field_line("Category", film.category.as_deref().unwrap_or("N/A")),
            field_line("Times Rented", film.rental_count.to_string()),
        ],
    }
}

/// Lays cards out two per row, scrolled so the selected card is visible.
pub fn render_grid(frame: &mut Frame, area: Rect, cards: &[Card], selected: Option<usize>) {
    if cards.is_empty() || area.height == 0 || area.width == 0 {
        return;
    }

    let columns: usize = if area.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
    let card_height = cards.iter().map(Card::height).max().unwrap_or(2);
    let visible_rows = usize::from((area.height / card_height).max(1));
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);
    let card_width = area.width / columns as u16;

    for (index, card) in cards.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let column = index % columns;
        let y = area.y + row as u16 * card_height;
        let height = card_height.min(area.y + area.height - y);
        let rect = Rect {
            x: area.x + column as u16 * card_width,
            y,
            width: card_width,
            height,
        };
        render_card(frame, rect, card, selected == Some(index));
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, focused: bool) {
    let (border_style, body_style) = if focused {
        (
            Style::default().fg(BRAND),
            Style::default().bg(SELECTED_BG),
        )
    } else {
        (Style::default().fg(FRAME_BORDER), Style::default())
    };
    let title = Span::styled(
        format!(" {} ", card.title),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(card.lines.clone()).style(body_style).block(block),
        area,
    );
}
