use super::{InstanceInfo, SeriesInfo};
use crate::extraction::tags::keywords;
use log::warn;
use std::fmt;
use std::path::{Path, PathBuf};

/// Non-fatal condition met while sorting a session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SortWarning {
    /// DICOMDIR without any patient record
    NoPatients { dicomdir: PathBuf },

    /// DICOMDIR with more than one patient record
    MultiplePatients { dicomdir: PathBuf, count: usize },

    /// DICOMDIR patient without any study record
    NoStudies { dicomdir: PathBuf },

    /// DICOMDIR patient with more than one study record
    MultipleStudies { dicomdir: PathBuf, count: usize },

    /// File has no SeriesNumber and was left untouched
    MissingSeriesNumber { file: PathBuf },

    /// Numeric attribute holds something other than an integer
    InvalidNumber {
        file: PathBuf,
        keyword: String,
        value: String,
    },

    /// Neither SeriesDescription nor ProtocolName present
    MissingSeriesDescription { file: PathBuf },

    /// Rename requested but a field of the naming scheme is missing
    CannotRename {
        file: PathBuf,
        series: SeriesInfo,
        instance: InstanceInfo,
    },

    /// Destination exists and the collision policy says skip
    DestinationExists { file: PathBuf, destination: PathBuf },
}

impl SortWarning {
    /// Whether the file named by this warning was left where it was
    pub fn skips_file(&self) -> bool {
        match self {
            SortWarning::MissingSeriesNumber { .. } | SortWarning::DestinationExists { .. } => true,
            SortWarning::InvalidNumber { keyword, .. } => keyword == keywords::SERIES_NUMBER,
            _ => false,
        }
    }

    /// Whether this warning aborts the whole session
    pub fn aborts_session(&self) -> bool {
        matches!(
            self,
            SortWarning::NoPatients { .. }
                | SortWarning::MultiplePatients { .. }
                | SortWarning::NoStudies { .. }
                | SortWarning::MultipleStudies { .. }
        )
    }
}

fn display_option<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "None".to_string())
}

impl fmt::Display for SortWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortWarning::NoPatients { dicomdir } => write!(
                f,
                "Abort DICOM sorting because no subjects found in {}",
                dicomdir.display()
            ),
            SortWarning::MultiplePatients { dicomdir, count } => write!(
                f,
                "Abort DICOM sorting because multiple subjects ({}) found in {}",
                count,
                dicomdir.display()
            ),
            SortWarning::NoStudies { dicomdir } => write!(
                f,
                "Abort DICOM sorting because no studies found in {}",
                dicomdir.display()
            ),
            SortWarning::MultipleStudies { dicomdir, count } => write!(
                f,
                "Abort DICOM sorting because multiple studies ({}) found in {}",
                count,
                dicomdir.display()
            ),
            SortWarning::MissingSeriesNumber { file } => {
                write!(f, "No SeriesNumber found, skipping: {}", file.display())
            }
            SortWarning::InvalidNumber {
                file,
                keyword,
                value,
            } => write!(
                f,
                "Ignoring non-integer {} '{}' in {}",
                keyword,
                value,
                file.display()
            ),
            SortWarning::MissingSeriesDescription { file } => write!(
                f,
                "No SeriesDescription or ProtocolName found for: {}",
                file.display()
            ),
            SortWarning::CannotRename {
                file,
                series,
                instance,
            } => {
                writeln!(
                    f,
                    "Missing one or more crucial DICOM-fields, cannot safely rename {}",
                    file.display()
                )?;
                writeln!(f, "patientname = {}", display_option(&instance.patient_name))?;
                writeln!(f, "seriesnumber = {}", series.number)?;
                writeln!(f, "seriesdescription = {}", series.description)?;
                writeln!(
                    f,
                    "acquisitionnr = {}",
                    display_option(&instance.acquisition_number)
                )?;
                write!(f, "instancenr = {}", display_option(&instance.instance_number))
            }
            SortWarning::DestinationExists { file, destination } => write!(
                f,
                "Not moving {} because {} already exists",
                file.display(),
                destination.display()
            ),
        }
    }
}

/// A file that was moved and/or renamed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MovedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Everything that happened while sorting one session
///
/// Collects the effects and warnings of a sort so callers can inspect them
/// without capturing log output.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SortReport {
    /// Folder the series directories were created in
    pub session_folder: PathBuf,

    /// Files moved and/or renamed
    pub moved: Vec<MovedFile>,

    /// Files whose destination equals their current location
    pub unchanged: Vec<PathBuf>,

    /// Series directories that did not exist before
    pub created_dirs: Vec<PathBuf>,

    /// Warnings in the order they were raised
    pub warnings: Vec<SortWarning>,

    /// Whether the session was abandoned before any file was touched
    pub aborted: bool,
}

impl SortReport {
    pub fn new(session_folder: impl Into<PathBuf>) -> Self {
        Self {
            session_folder: session_folder.into(),
            ..Self::default()
        }
    }

    /// Records and logs a warning
    pub fn warn(&mut self, warning: SortWarning) {
        warn!("{}", warning);
        if warning.aborts_session() {
            self.aborted = true;
        }
        self.warnings.push(warning);
    }

    pub(crate) fn record_move(&mut self, source: &Path, destination: &Path) {
        self.moved.push(MovedFile {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }

    /// Number of files that were skipped, left in place or could not be moved
    pub fn skipped_count(&self) -> usize {
        self.warnings.iter().filter(|w| w.skips_file()).count()
    }
}
