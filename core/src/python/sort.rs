//! Python wrappers for session sorting

use pyo3::prelude::*;

use super::errors::convert_error;
use super::report::PySortReport;
use super::utils::path_to_pathbuf;
use crate::types::{SortOptions, DEFAULT_PATTERN};

/// Sort DICOM files of one session into SeriesNumber-SeriesDescription folders
///
/// Args:
///     sessionfolder: Folder with the DICOM files, or a DICOMDIR file
///     pattern: Regular expression matched against the start of each file name
///     rename: Rename files to PatientName_SeriesNumber_SeriesDescription_AcquisitionNumber_InstanceNumber
///     nosort: Do not move files into series folders
///
/// Returns:
///     SortReport: What was moved, created and warned about
///
/// Raises:
///     DicomError: If a DICOM file cannot be read
///     InvalidPatternError: If the pattern is not a valid regular expression
///     OSError: If a file cannot be moved or a folder created
///
/// Example:
///     >>> from dicomsort import sortsession
///     >>> report = sortsession("/project/raw/sub-01/ses-01", rename=True)
///     >>> print(report.created_dirs)
#[pyfunction]
#[pyo3(name = "sortsession")]
#[pyo3(signature = (sessionfolder, pattern=DEFAULT_PATTERN.to_string(), rename=false, nosort=false))]
pub fn py_sortsession(
    sessionfolder: &Bound<'_, PyAny>,
    pattern: String,
    rename: bool,
    nosort: bool,
) -> PyResult<PySortReport> {
    let path = path_to_pathbuf(sessionfolder)?;
    let options = SortOptions::default()
        .with_pattern(pattern)
        .rename(rename)
        .nosort(nosort);

    crate::api::sort_session(&path, options)
        .map(PySortReport::from)
        .map_err(convert_error)
}

/// Sort DICOM files of every [sub/][ses/] session below a raw-data folder
///
/// Args:
///     rawfolder: Root folder containing the sessions, or a DICOMDIR file
///     subjectid: Prefix of the subject folders in rawfolder (e.g. "sub")
///     sessionid: Prefix of the session folders in each subject folder (e.g. "ses")
///     rename: Rename files to PatientName_SeriesNumber_SeriesDescription_AcquisitionNumber_InstanceNumber
///     nosort: Do not move files into series folders
///     pattern: Regular expression matched against the start of each file name
///
/// Returns:
///     list[SortReport]: One report per session
///
/// Example:
///     >>> from dicomsort import sortsessions
///     >>> reports = sortsessions("/project/raw", subjectid="sub", sessionid="ses")
///     >>> sum(len(r.moved) for r in reports)
#[pyfunction]
#[pyo3(name = "sortsessions")]
#[pyo3(signature = (rawfolder, subjectid=None, sessionid=None, rename=false, nosort=false, pattern=DEFAULT_PATTERN.to_string()))]
pub fn py_sortsessions(
    rawfolder: &Bound<'_, PyAny>,
    subjectid: Option<String>,
    sessionid: Option<String>,
    rename: bool,
    nosort: bool,
    pattern: String,
) -> PyResult<Vec<PySortReport>> {
    let path = path_to_pathbuf(rawfolder)?;
    let options = SortOptions::default()
        .with_pattern(pattern)
        .rename(rename)
        .nosort(nosort);

    let reports = crate::api::sort_sessions(
        &path,
        subjectid.as_deref(),
        sessionid.as_deref(),
        options,
    )
    .map_err(convert_error)?;

    Ok(reports.into_iter().map(PySortReport::from).collect())
}

/// Remove illegal characters from a file or directory name
#[pyfunction]
#[pyo3(name = "cleanup")]
pub fn py_cleanup(name: &str) -> String {
    crate::naming::cleanup(name)
}
