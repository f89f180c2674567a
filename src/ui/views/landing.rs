use crate::api::Actor;
use crate::ui::landing::LandingState;
use crate::ui::views::grid::{film_card, render_grid, Card};
use crate::ui::views::{error_line, field_line, loading_line, render_lines, title_line};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_landing(frame: &mut Frame, area: Rect, state: &LandingState, tick: u64) {
    if state.loading {
        return render_lines(frame, area, vec![loading_line(tick)]);
    }
    if let Some(error) = &state.error {
        return render_lines(frame, area, vec![error_line(error)]);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(3),
            Constraint::Length(1),
            Constraint::Fill(2),
        ])
        .split(area);

    // One selection index runs over films first, then actors
    let film_count = state.top_films.len();
    let film_selected = (state.selected < film_count).then_some(state.selected);
    let actor_selected = state.selected.checked_sub(film_count);

    let film_cards: Vec<Card> = state.top_films.iter().map(film_card).collect();
    let actor_cards: Vec<Card> = state.top_actors.iter().map(actor_card).collect();

    render_lines(frame, chunks[0], vec![title_line("Welcome to Movie Rental Store")]);
    render_lines(frame, chunks[1], vec![title_line("Top 5 Rented Films")]);
    render_grid(frame, chunks[2], &film_cards, film_selected);
    render_lines(frame, chunks[3], vec![title_line("Top 5 Actors")]);
    render_grid(frame, chunks[4], &actor_cards, actor_selected);
}

fn actor_card(actor: &Actor) -> Card {
    let films = actor
        .film_count
        .map(|count| count.to_string())
        .unwrap_or_default();
    Card {
        title: actor.full_name(),
        lines: vec![field_line("Films", films)],
    }
}
