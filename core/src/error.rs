use std::path::PathBuf;
use thiserror::Error;

/// Result type for dicomsort operations
pub type Result<T> = std::result::Result<T, DicomSortError>;

/// Error types for dicomsort operations
///
/// Only conditions that abort a run are errors. Missing or unusable tag
/// values degrade to warnings collected in a [`crate::SortReport`].
#[derive(Error, Debug)]
pub enum DicomSortError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// File-matching pattern is not a valid regular expression
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Destination file exists and the collision policy forbids overwriting
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for DicomSortError {
    fn from(e: dicom_object::ReadError) -> Self {
        DicomSortError::Dicom(format!("{}", e))
    }
}

impl From<regex::Error> for DicomSortError {
    fn from(e: regex::Error) -> Self {
        DicomSortError::InvalidPattern(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_conversion() {
        let pattern = String::from("(unclosed");
        let err: DicomSortError = regex::Regex::new(&pattern).unwrap_err().into();
        assert!(matches!(err, DicomSortError::InvalidPattern(_)));
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }

    #[test]
    fn test_destination_exists_message() {
        let err = DicomSortError::DestinationExists(PathBuf::from("/raw/001-T1/a.dcm"));
        assert_eq!(err.to_string(), "Destination already exists: /raw/001-T1/a.dcm");
    }
}
