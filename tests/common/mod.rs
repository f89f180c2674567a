//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use reqwest::Url;
use sakila_tui::api::{ApiClient, Film};
use sakila_tui::ui::app::App;
use sakila_tui::ui::render::draw;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_api::{CapturedRequest, MockApi, MockResponse};

pub fn client_for(api: &MockApi) -> ApiClient {
    ApiClient::new(Url::parse(&api.base_url()).unwrap()).unwrap()
}

/// Film JSON as the API sends it.
pub fn film_json(id: u32, title: &str) -> Value {
    json!({
        "film_id": id,
        "title": title,
        "category": "Action",
        "rental_count": id * 2,
    })
}

pub fn film_array(count: u32) -> Value {
    Value::Array((1..=count).map(|id| film_json(id, &format!("FILM {id}"))).collect())
}

pub fn film(id: u32, title: &str) -> Film {
    serde_json::from_value(film_json(id, title)).unwrap()
}

pub fn customer_json(id: u32, first: &str, last: &str) -> Value {
    json!({
        "customer_id": id,
        "first_name": first,
        "last_name": last,
        "email": format!("{}.{}@sakilacustomer.org", first, last),
    })
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Draws `app` once and returns the screen as one string per row.
pub fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
