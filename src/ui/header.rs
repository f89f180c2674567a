use crate::ui::router::{NavLink, Route};
use crate::ui::theme::{BRAND, FRAME_BORDER, NAV_SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "LM Sakila Project";

/// Persistent navigation bar.
pub struct Header {
    active: Option<NavLink>,
}

impl Header {
    pub fn new(route: Route) -> Self {
        Self {
            active: route.nav_link(),
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(NAV_SEPARATOR);
        let active_style = Style::default()
            .fg(BRAND)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(TITLE, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for (index, link) in NavLink::ALL.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("   ", text_style));
            }
            let style = if Some(link) == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(format!("{} ", index + 1), separator_style));
            spans.push(Span::styled(link.label(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(FRAME_BORDER)),
        )
    }
}
