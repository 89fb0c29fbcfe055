//! Sorting of imaging files into series folders
//!
//! [`SessionSorter`] sorts a single session folder (or DICOMDIR) and walks a
//! raw-data tree of `[sub/][ses/]` folders, one session after another.

mod session;
mod sessions;

pub use sessions::list_matching_subdirs;

use crate::error::Result;
use crate::extraction::FieldReader;
use crate::types::SortOptions;
use regex::Regex;

/// Sorts sessions with a given metadata reader and options
pub struct SessionSorter<R> {
    reader: R,
    options: SortOptions,
    pattern: Regex,
}

impl<R: FieldReader> SessionSorter<R> {
    /// Creates a sorter
    ///
    /// # Errors
    ///
    /// Returns an error if the file-matching pattern does not compile
    pub fn new(reader: R, options: SortOptions) -> Result<Self> {
        let pattern = options.compiled_pattern()?;
        Ok(Self {
            reader,
            options,
            pattern,
        })
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }
}
