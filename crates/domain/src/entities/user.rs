use crate::entities::{Entity, RecordMeta};
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// A registered user. `email` is unique across all stored users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl User {
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        password: Option<String>,
    ) -> Self {
        Self {
            meta: RecordMeta::new(),
            email,
            first_name,
            last_name,
            password,
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "User";
    const HAS_UNIQUE_FIELDS: bool = true;

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn unique_conflict(&self, stored: &Self) -> Option<DomainError> {
        if stored.email == self.email {
            Some(DomainError::EmailAlreadyExists(self.email.clone()))
        } else {
            None
        }
    }
}
