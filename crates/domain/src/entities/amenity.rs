use crate::entities::{Entity, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
}

impl Amenity {
    pub fn new(name: String) -> Self {
        Self {
            meta: RecordMeta::new(),
            name,
        }
    }
}

impl Entity for Amenity {
    const KIND: &'static str = "Amenity";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
