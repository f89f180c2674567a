pub mod app;
pub mod catalog;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod landing;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod router;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;
