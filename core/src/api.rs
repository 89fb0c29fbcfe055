use crate::error::Result;
use crate::extraction::DicomFieldReader;
use crate::sorting::SessionSorter;
use crate::types::{SortOptions, SortReport};
use std::path::Path;

/// Session sorter reading metadata from DICOM files on disk
pub type DicomSorter = SessionSorter<DicomFieldReader>;

impl DicomSorter {
    /// Creates a sorter that reads metadata with [`DicomFieldReader`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dicomsort_core::{DicomSorter, SortOptions};
    /// use std::path::Path;
    ///
    /// let sorter = DicomSorter::from_options(SortOptions::default().rename(true)).unwrap();
    /// let reports = sorter
    ///     .sort_sessions(Path::new("/project/raw"), Some("sub"), Some("ses"))
    ///     .unwrap();
    ///
    /// for report in &reports {
    ///     println!("{}: {} files moved", report.session_folder.display(), report.moved.len());
    /// }
    /// ```
    pub fn from_options(options: SortOptions) -> Result<Self> {
        SessionSorter::new(DicomFieldReader::new(), options)
    }
}

/// Sorts one session folder or DICOMDIR
pub fn sort_session(session: &Path, options: SortOptions) -> Result<SortReport> {
    DicomSorter::from_options(options)?.sort_session(session)
}

/// Sorts every `[sub/][ses/]` session below a raw-data folder
pub fn sort_sessions(
    rawfolder: &Path,
    subject_prefix: Option<&str>,
    session_prefix: Option<&str>,
    options: SortOptions,
) -> Result<Vec<SortReport>> {
    DicomSorter::from_options(options)?.sort_sessions(rawfolder, subject_prefix, session_prefix)
}
