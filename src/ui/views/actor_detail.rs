use crate::api::Actor;
use crate::ui::detail::{DetailEntity, DetailState, DetailStatus};
use crate::ui::views::grid::{film_card, render_grid};
use crate::ui::views::{error_line, loading_line, muted_line, render_lines, title_line};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_actor_detail(frame: &mut Frame, area: Rect, state: &DetailState<Actor>, tick: u64) {
    let actor = match &state.status {
        DetailStatus::Idle => return,
        DetailStatus::Loading { .. } => return render_lines(frame, area, vec![loading_line(tick)]),
        DetailStatus::Failed { message, .. } => {
            return render_lines(frame, area, vec![error_line(message)])
        }
        DetailStatus::NotFound { .. } => {
            return render_lines(frame, area, vec![muted_line(Actor::NOT_FOUND)])
        }
        DetailStatus::Loaded(actor) => actor,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    render_lines(frame, chunks[0], vec![title_line(actor.full_name())]);
    render_lines(frame, chunks[1], vec![title_line("Top Rented Films")]);
    if actor.top_films.is_empty() {
        return;
    }
    let cards: Vec<_> = actor.top_films.iter().map(film_card).collect();
    render_grid(frame, chunks[2], &cards, Some(state.selected));
}
