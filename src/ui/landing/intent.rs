use crate::api::{Actor, Film, RequestError};
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum LandingIntent {
    Load {
        generation: u64,
    },
    Loaded {
        generation: u64,
        result: Result<(Vec<Film>, Vec<Actor>), RequestError>,
    },
    SelectNext,
    SelectPrev,
}

impl Intent for LandingIntent {}
