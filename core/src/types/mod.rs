//! Core type definitions for dicomsort
//!
//! - [`SortOptions`]: How a session is sorted (pattern, rename, nosort, collisions)
//! - [`SeriesInfo`] and [`InstanceInfo`]: Per-file fields used for naming
//! - [`SortReport`]: Effects and warnings of sorting one session

mod options;
mod report;
mod series;

pub use options::{CollisionPolicy, SortOptions, DEFAULT_PATTERN};
pub use report::{MovedFile, SortReport, SortWarning};
pub use series::{parse_number, InstanceInfo, SeriesInfo, DEFAULT_EXTENSION, UNKNOWN_PROTOCOL};
