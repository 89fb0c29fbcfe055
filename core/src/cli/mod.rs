pub mod report;

use crate::types::{CollisionPolicy, SortOptions, DEFAULT_PATTERN};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicomsort
#[derive(Parser, Debug)]
#[command(name = "dicomsort")]
#[command(
    about = "Sorts and/or renames DICOM files into local subdirectories with a (3-digit) SeriesNumber-SeriesDescription directory name"
)]
#[command(after_help = "examples:
  dicomsort /project/3022026.01/raw
  dicomsort /project/3022026.01/raw --subjectid sub
  dicomsort /project/3022026.01/raw --subjectid sub-01 --sessionid ses
  dicomsort /media/cdrom/DICOMDIR --rename")]
#[command(version)]
pub struct Cli {
    /// Root folder containing rawfolder/[sub/][ses/]dicomfiles, or a DICOMDIR file
    #[arg(value_name = "RAWFOLDER")]
    pub rawfolder: PathBuf,

    /// Prefix of the subject folders in rawfolder (e.g. "sub")
    #[arg(long)]
    pub subjectid: Option<String>,

    /// Prefix of the session folders in the subject folder (e.g. "ses")
    #[arg(long)]
    pub sessionid: Option<String>,

    /// Rename files to a PatientName_SeriesNumber_SeriesDescription_AcquisitionNumber_InstanceNumber scheme
    #[arg(short, long)]
    pub rename: bool,

    /// Skip sorting into SeriesNumber-SeriesDescription folders (useful with --rename)
    #[arg(short, long)]
    pub nosort: bool,

    /// Regular expression matched against the start of each file name
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// What to do when the destination file already exists
    #[arg(long, value_enum, default_value = "overwrite")]
    pub on_collision: CollisionArg,

    /// Output format of the final report
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Sort options selected on the command line
    pub fn sort_options(&self) -> SortOptions {
        SortOptions::default()
            .with_pattern(self.pattern.clone())
            .rename(self.rename)
            .nosort(self.nosort)
            .on_collision(self.on_collision.clone().into())
    }
}

/// Collision policy options
#[derive(Debug, Clone, ValueEnum)]
pub enum CollisionArg {
    /// Replace the existing file
    Overwrite,
    /// Leave the source file in place
    Skip,
    /// Stop with an error
    Error,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Overwrite => CollisionPolicy::Overwrite,
            CollisionArg::Skip => CollisionPolicy::Skip,
            CollisionArg::Error => CollisionPolicy::Error,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
