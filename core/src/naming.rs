//! File and directory naming
//!
//! Series directories are named `{SeriesNumber:03}-{SeriesDescription}` (the
//! listing used on the scanner console) and renamed files follow
//! `{PatientName}_{SeriesNumber:03}_{SeriesDescription}_{AcquisitionNumber:05}_{InstanceNumber:05}{ext}`.

use crate::types::SeriesInfo;
use std::path::MAIN_SEPARATOR;

/// Characters removed from generated names
///
/// These are the worst offenders only; many other characters are awkward in
/// file names and are left alone.
const SPECIAL_CHARACTERS: [char; 5] = ['/', MAIN_SEPARATOR, '*', '?', '"'];

/// Removes illegal characters from a file or directory name
///
/// The result has no leading or trailing whitespace.
///
/// # Example
///
/// ```
/// use dicomsort_core::naming::cleanup;
///
/// assert_eq!(cleanup(" 005-T1/T2* ?\"map\" "), "005-T1T2 map");
/// ```
pub fn cleanup(name: &str) -> String {
    name.chars()
        .filter(|c| !SPECIAL_CHARACTERS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Name of the subdirectory that holds a series
pub fn series_dir_name(series: &SeriesInfo) -> String {
    cleanup(&series.to_string())
}

/// Name of a renamed imaging file
pub fn instance_file_name(
    patient_name: &str,
    series: &SeriesInfo,
    acquisition_number: i64,
    instance_number: i64,
    extension: &str,
) -> String {
    cleanup(&format!(
        "{}_{:03}_{}_{:05}_{:05}{}",
        patient_name,
        series.number,
        series.description,
        acquisition_number,
        instance_number,
        extension
    ))
}
