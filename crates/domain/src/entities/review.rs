use crate::entities::{Entity, RecordMeta};
use serde::{Deserialize, Serialize};

/// A user's review of a place. Neither reference is checked on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub user_id: String,
    pub place_id: String,
    pub rating: i32,
    pub comment: String,
}

impl Review {
    pub fn new(user_id: String, place_id: String, rating: i32, comment: String) -> Self {
        Self {
            meta: RecordMeta::new(),
            user_id,
            place_id,
            rating,
            comment,
        }
    }
}

impl Entity for Review {
    const KIND: &'static str = "Review";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
