use crate::ui::app::{App, InputMode, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_height, layout_regions};
use crate::ui::theme::{PROMPT_BORDER, TEXT};
use crate::ui::views::{
    render_actor_detail, render_customers, render_film_detail, render_films, render_landing,
};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const GOTO_WIDTH_PERCENT: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route()).widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, inset(body), app);
    frame.render_widget(Footer::new(app).widget(footer), footer);

    if let InputMode::GoTo(buffer) = app.input_mode() {
        draw_goto_prompt(frame, body, buffer);
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let editing = *app.input_mode() == InputMode::Search;
    let tick = app.ticks();
    match app.screen() {
        Screen::Landing(state) => render_landing(frame, area, state, tick),
        Screen::Films(state) => render_films(frame, area, state, editing, tick),
        Screen::Customers(state) => render_customers(frame, area, state, editing, tick),
        Screen::FilmDetail(state) => render_film_detail(frame, area, state, tick),
        Screen::ActorDetail(state) => render_actor_detail(frame, area, state, tick),
    }
}

fn draw_goto_prompt(frame: &mut Frame<'_>, area: Rect, buffer: &str) {
    let rect = centered_rect_by_height(GOTO_WIDTH_PERCENT, 3, area);
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(" Go to ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PROMPT_BORDER));
    let inner = block.inner(rect);
    let line = Line::from(Span::styled(
        buffer.to_string(),
        Style::default().fg(TEXT),
    ));
    frame.render_widget(Paragraph::new(line).block(block), rect);
    if inner.width > 0 && inner.height > 0 {
        let offset = (buffer.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

/// One column of padding on each side of the body.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}
