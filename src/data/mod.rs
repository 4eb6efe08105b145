//! Data module - survey records, CSV loading, validation and writing

mod loader;
mod record;
mod validator;
mod writer;

pub use loader::{LoaderError, SurveyLoader};
pub use record::SurveyRecord;
pub use validator::{RejectReason, SurveyValidator};
pub use writer::{SurveyWriter, WriterError};
