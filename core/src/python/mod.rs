//! Python bindings for dicomsort
//!
//! This module provides PyO3 bindings so that Python pipelines can sort
//! raw DICOM sessions before conversion.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod errors;
mod report;
mod sort;
mod utils;

pub use errors::*;
pub use report::*;
pub use sort::*;

/// Python module definition
#[pymodule]
fn _dicomsort(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "DicomSortError",
        py.get_type_bound::<errors::PyDicomSortError>(),
    )?;
    m.add("DicomError", py.get_type_bound::<errors::PyDicomError>())?;
    m.add(
        "InvalidPatternError",
        py.get_type_bound::<errors::PyInvalidPatternError>(),
    )?;
    m.add(
        "DestinationExistsError",
        py.get_type_bound::<errors::PyDestinationExistsError>(),
    )?;

    // Register data structure classes
    m.add_class::<PySortReport>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_sortsession, m)?)?;
    m.add_function(wrap_pyfunction!(py_sortsessions, m)?)?;
    m.add_function(wrap_pyfunction!(py_cleanup, m)?)?;

    m.add("DEFAULT_PATTERN", crate::types::DEFAULT_PATTERN)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
