//! Python exception types for dicomsort
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, exceptions::PyOSError, prelude::*};

// Base exception
create_exception!(
    dicomsort,
    PyDicomSortError,
    PyException,
    "Base exception for all dicomsort errors"
);

// Specific exceptions
create_exception!(
    dicomsort,
    PyDicomError,
    PyDicomSortError,
    "DICOM reading or parsing error"
);

create_exception!(
    dicomsort,
    PyInvalidPatternError,
    PyDicomSortError,
    "File-matching pattern is not a valid regular expression"
);

create_exception!(
    dicomsort,
    PyDestinationExistsError,
    PyDicomSortError,
    "Destination file already exists"
);

/// Convert Rust DicomSortError to appropriate Python exception
pub fn convert_error(err: crate::error::DicomSortError) -> PyErr {
    match err {
        crate::error::DicomSortError::Dicom(msg) => PyDicomError::new_err(msg),
        crate::error::DicomSortError::InvalidPattern(msg) => PyInvalidPatternError::new_err(msg),
        crate::error::DicomSortError::DestinationExists(path) => {
            PyDestinationExistsError::new_err(path.display().to_string())
        }
        crate::error::DicomSortError::Io(e) => PyOSError::new_err(e.to_string()),
    }
}
