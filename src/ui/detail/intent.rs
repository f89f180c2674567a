use crate::api::RequestError;
use crate::ui::detail::state::DetailEntity;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum DetailIntent<T: DetailEntity> {
    Load {
        id: u32,
        generation: u64,
    },
    Loaded {
        generation: u64,
        result: Result<Option<T>, RequestError>,
    },
    SelectNext,
    SelectPrev,
}

impl<T: DetailEntity> Intent for DetailIntent<T> {}
