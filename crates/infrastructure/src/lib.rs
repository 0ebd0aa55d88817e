pub mod document;
pub mod repositories;

pub use document::*;
pub use repositories::*;
