use crate::api::Customer;
use crate::ui::catalog::ListState;
use crate::ui::views::field_line;
use crate::ui::views::grid::Card;
use crate::ui::views::list::{render_list, ListView};
use ratatui::layout::Rect;
use ratatui::Frame;

const PLACEHOLDER: &str = "Search by customer...";

pub fn render_customers(
    frame: &mut Frame,
    area: Rect,
    state: &ListState<Customer>,
    editing: bool,
    tick: u64,
) {
    let cards = state.items.iter().map(customer_card).collect();
    let view = ListView {
        title: "Customers",
        state,
        selector: None,
        placeholder: PLACEHOLDER,
        editing,
        tick,
    };
    render_list(frame, area, view, cards);
}

fn customer_card(customer: &Customer) -> Card {
    Card {
        title: customer.full_name(),
        lines: vec![
            field_line("ID", customer.id.to_string()),
            field_line("Email", customer.email.clone()),
        ],
    }
}
