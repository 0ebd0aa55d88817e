use crate::errors::DomainError;
use crate::repositories::FieldMap;
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Identity and timestamps carried by every entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub id: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl RecordMeta {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves `updated_at` to the current time. The new value is always
    /// strictly later than the previous one, even on a coarse clock.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

impl Default for RecordMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed record that can live in a [`DocumentStore`](crate::DocumentStore).
///
/// Records are serialized to a flat field-map at the store boundary; the
/// serde representation of the implementing type is the on-disk shape.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Name of the collection this kind is stored under.
    const KIND: &'static str;

    /// Whether saving must scan the stored records of this kind for
    /// [`unique_conflict`](Entity::unique_conflict)s.
    const HAS_UNIQUE_FIELDS: bool = false;

    fn meta(&self) -> &RecordMeta;

    fn meta_mut(&mut self) -> &mut RecordMeta;

    fn id(&self) -> &str {
        &self.meta().id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at
    }

    /// Returns the error to report when `stored`, another record of the same
    /// kind, holds a value that must be unique.
    fn unique_conflict(&self, _stored: &Self) -> Option<DomainError> {
        None
    }

    fn to_fields(&self) -> Result<FieldMap, DomainError> {
        let value = serde_json::to_value(self)
            .map_err(|e| DomainError::ParsingError(format!("{}: {}", Self::KIND, e)))?;

        match value {
            Value::Object(fields) => Ok(fields),
            other => Err(DomainError::ParsingError(format!(
                "{} serialized to a non-object value: {}",
                Self::KIND,
                other
            ))),
        }
    }

    fn from_fields(fields: FieldMap) -> Result<Self, DomainError> {
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| DomainError::ParsingError(format!("invalid {} record: {}", Self::KIND, e)))
    }
}

/// ISO-8601 timestamp text.
///
/// Written as RFC 3339 in UTC. Reading also accepts naive date-times
/// without an offset, which are taken to be UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }

    pub fn parse(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(text) {
            Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
            Err(err) => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
                .map_err(|_| err),
        }
    }
}
