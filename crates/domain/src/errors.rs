use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{kind} not found with id: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),
}

impl DomainError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
