use crate::entities::{Entity, RecordMeta};
use serde::{Deserialize, Serialize};

/// A city. `country_code` is not checked against stored countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl City {
    pub fn new(name: String, country_code: String, description: Option<String>) -> Self {
        Self {
            meta: RecordMeta::new(),
            name,
            country_code,
            description,
        }
    }
}

impl Entity for City {
    const KIND: &'static str = "City";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
