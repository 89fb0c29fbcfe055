//! Python wrapper for SortReport

use pyo3::prelude::*;

use super::utils::path_to_string;

/// Outcome of sorting one session
///
/// Lists the files that were moved, the series folders that were created
/// and the warnings raised along the way.
#[pyclass(name = "SortReport", module = "dicomsort")]
#[derive(Clone)]
pub struct PySortReport {
    pub(crate) inner: crate::types::SortReport,
}

#[pymethods]
impl PySortReport {
    /// Folder the series folders were created in
    #[getter]
    fn session_folder(&self) -> String {
        path_to_string(&self.inner.session_folder)
    }

    /// List of (source, destination) tuples for every moved file
    #[getter]
    fn moved(&self) -> Vec<(String, String)> {
        self.inner
            .moved
            .iter()
            .map(|m| (path_to_string(&m.source), path_to_string(&m.destination)))
            .collect()
    }

    /// Files that were already at their destination
    #[getter]
    fn unchanged(&self) -> Vec<String> {
        self.inner.unchanged.iter().map(|p| path_to_string(p)).collect()
    }

    /// Series folders that did not exist before
    #[getter]
    fn created_dirs(&self) -> Vec<String> {
        self.inner
            .created_dirs
            .iter()
            .map(|p| path_to_string(p))
            .collect()
    }

    /// Warning messages in the order they were raised
    #[getter]
    fn warnings(&self) -> Vec<String> {
        self.inner.warnings.iter().map(|w| w.to_string()).collect()
    }

    /// Whether the session was abandoned (unsupported DICOMDIR)
    #[getter]
    fn aborted(&self) -> bool {
        self.inner.aborted
    }

    fn __repr__(&self) -> String {
        format!(
            "SortReport(session_folder='{}', moved={}, created_dirs={}, warnings={})",
            self.inner.session_folder.display(),
            self.inner.moved.len(),
            self.inner.created_dirs.len(),
            self.inner.warnings.len()
        )
    }
}

impl From<crate::types::SortReport> for PySortReport {
    fn from(inner: crate::types::SortReport) -> Self {
        Self { inner }
    }
}
