use crate::api::{Film, FilmSearchType};
use crate::ui::catalog::ListState;
use crate::ui::theme::{BRAND, MUTED, SELECTED_BG, TEXT};
use crate::ui::views::grid::film_card;
use crate::ui::views::list::{render_list, ListView};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn render_films(
    frame: &mut Frame,
    area: Rect,
    state: &ListState<Film>,
    editing: bool,
    tick: u64,
) {
    let cards = state.items.iter().map(film_card).collect();
    let view = ListView {
        title: "Films",
        state,
        selector: Some(selector_line(state.mode)),
        placeholder: state.mode.placeholder(),
        editing,
        tick,
    };
    render_list(frame, area, view, cards);
}

fn selector_line(active: FilmSearchType) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Search by: ",
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )];
    for (index, search_type) in FilmSearchType::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(MUTED)));
        }
        let style = if search_type == active {
            Style::default()
                .fg(BRAND)
                .bg(SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} ", search_type.label()), style));
    }
    Line::from(spans)
}
