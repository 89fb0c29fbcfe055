use crate::error::Result;
use regex::Regex;
use std::fmt;

/// Default file-matching pattern: names ending in `.IMA` or `.dcm`
pub const DEFAULT_PATTERN: &str = r".*\.(IMA|dcm)$";

/// What to do when a file would be moved onto an existing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum CollisionPolicy {
    /// Replace the existing file
    #[default]
    Overwrite,
    /// Leave the source file where it is and record a warning
    Skip,
    /// Abort the run with [`crate::DicomSortError::DestinationExists`]
    Error,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollisionPolicy::Overwrite => "overwrite",
            CollisionPolicy::Skip => "skip",
            CollisionPolicy::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// Options controlling how a session is sorted
///
/// # Example
///
/// ```
/// use dicomsort_core::{CollisionPolicy, SortOptions};
///
/// let options = SortOptions::default()
///     .rename(true)
///     .nosort(true)
///     .on_collision(CollisionPolicy::Skip);
///
/// assert!(options.rename);
/// assert!(options.nosort);
/// assert_eq!(options.pattern, r".*\.(IMA|dcm)$");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct SortOptions {
    /// Regular expression matched against the start of each file name
    /// (ignored for DICOMDIR input)
    pub pattern: String,

    /// Rename files to PatientName_SeriesNumber_SeriesDescription_AcquisitionNumber_InstanceNumber
    pub rename: bool,

    /// Leave files in the session folder instead of series subfolders
    pub nosort: bool,

    /// Behaviour when the destination file already exists
    pub on_collision: CollisionPolicy,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            rename: false,
            nosort: false,
            on_collision: CollisionPolicy::Overwrite,
        }
    }
}

impl SortOptions {
    /// Builder: Set the file-matching pattern
    ///
    /// # Example
    ///
    /// ```
    /// use dicomsort_core::SortOptions;
    ///
    /// let options = SortOptions::default().with_pattern(r".*\.IMA$");
    /// assert_eq!(options.pattern, r".*\.IMA$");
    /// ```
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Builder: Rename files
    pub fn rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }

    /// Builder: Skip sorting into series folders
    pub fn nosort(mut self, nosort: bool) -> Self {
        self.nosort = nosort;
        self
    }

    /// Builder: Set the collision policy
    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    /// Compiles the pattern so that it only matches at the start of a name
    ///
    /// # Errors
    ///
    /// Returns [`crate::DicomSortError::InvalidPattern`] if the pattern is not
    /// a valid regular expression
    pub fn compiled_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&format!("^(?:{})", self.pattern))?)
    }
}
