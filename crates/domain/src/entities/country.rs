use crate::entities::{Entity, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub code: String,
}

impl Country {
    pub fn new(name: String, code: String) -> Self {
        Self {
            meta: RecordMeta::new(),
            name,
            code,
        }
    }
}

impl Entity for Country {
    const KIND: &'static str = "Country";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
