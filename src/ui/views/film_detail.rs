use crate::api::Film;
use crate::ui::detail::{DetailEntity, DetailState, DetailStatus};
use crate::ui::views::{error_line, field_line, loading_line, muted_line, render_lines, title_line};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;

pub fn render_film_detail(frame: &mut Frame, area: Rect, state: &DetailState<Film>, tick: u64) {
    let lines = match &state.status {
        DetailStatus::Idle => Vec::new(),
        DetailStatus::Loading { .. } => vec![loading_line(tick)],
        DetailStatus::Failed { message, .. } => vec![error_line(message)],
        DetailStatus::NotFound { .. } => vec![muted_line(Film::NOT_FOUND)],
        DetailStatus::Loaded(film) => film_lines(film),
    };
    render_lines(frame, area, lines);
}

/// Optional fields are listed only when the record has them.
fn film_lines(film: &Film) -> Vec<Line<'static>> {
    let mut lines = vec![
        title_line(film.title.clone()),
        Line::from(""),
        field_line("Film ID", film.id.to_string()),
        field_line("Category", film.category.as_deref().unwrap_or("N/A")),
    ];
    if let Some(description) = &film.description {
        lines.push(field_line("Description", description.clone()));
    }
    if let Some(year) = film.release_year {
        lines.push(field_line("Release Year", year.to_string()));
    }
    if let Some(length) = film.length {
        lines.push(field_line("Length", format!("{length} minutes")));
    }
    if let Some(rating) = &film.rating {
        lines.push(field_line("Rating", rating.clone()));
    }
    if let Some(rate) = film.rental_rate {
        lines.push(field_line("Rental Rate", format!("${rate:.2}")));
    }
    lines
}
