pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod naming;
pub mod sorting;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use api::{sort_session, sort_sessions, DicomSorter};
pub use cli::report::TextReport;
pub use error::{DicomSortError, Result};
pub use extraction::{DicomFieldReader, FieldReader};
pub use sorting::{list_matching_subdirs, SessionSorter};
pub use types::*;
