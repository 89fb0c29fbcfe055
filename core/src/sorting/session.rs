use super::SessionSorter;
use crate::error::{DicomSortError, Result};
use crate::extraction::tags::keywords;
use crate::extraction::{is_dicomdir, DicomDir, FieldReader};
use crate::naming::{instance_file_name, series_dir_name};
use crate::types::{
    parse_number, CollisionPolicy, InstanceInfo, SeriesInfo, SortReport, SortWarning,
    DEFAULT_EXTENSION, UNKNOWN_PROTOCOL,
};
use log::{debug, info};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

impl<R: FieldReader> SessionSorter<R> {
    /// Sorts the imaging files of one session into series folders
    ///
    /// `session` is either a folder holding the imaging files, or the path of
    /// a DICOMDIR whose referenced files are sorted within the DICOMDIR's
    /// folder.
    ///
    /// # Errors
    ///
    /// Returns an error if an imaging file cannot be read or a filesystem
    /// operation fails. Files already moved stay where they are.
    pub fn sort_session(&self, session: &Path) -> Result<SortReport> {
        let session = std::path::absolute(session)?;
        info!(">> processing: {}", session.display());

        let mut report = SortReport::new(&session);
        let files = if is_dicomdir(&session) {
            let dicomdir = DicomDir::open(&session)?;
            let Some(files) = dicomdir_files(&dicomdir, &session, &mut report) else {
                return Ok(report);
            };
            if let Some(parent) = session.parent() {
                report.session_folder = parent.to_path_buf();
            }
            files
        } else {
            self.matching_files(&session)?
        };
        debug!("Found {} files to sort", files.len());

        let mut series_dirs = HashSet::new();
        for file in &files {
            self.sort_file(file, &mut series_dirs, &mut report)?;
        }

        Ok(report)
    }

    /// Lists the regular files of `folder` whose name matches the pattern
    fn matching_files(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(folder)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| self.pattern.is_match(name))
                .unwrap_or(false);
            if matches {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn sort_file(
        &self,
        file: &Path,
        series_dirs: &mut HashSet<String>,
        report: &mut SortReport,
    ) -> Result<()> {
        let Some(series) = self.series_info(file, report)? else {
            return Ok(());
        };

        let file_name = if self.options.rename {
            self.renamed_file_name(file, &series, report)?
        } else {
            original_file_name(file)
        };

        let session_folder = report.session_folder.clone();
        let output_dir = if self.options.nosort {
            session_folder
        } else {
            let dir_name = series_dir_name(&series);
            let dir = session_folder.join(&dir_name);
            if series_dirs.insert(dir_name) && !dir.is_dir() {
                info!("  Creating:  {}", dir.display());
                fs::create_dir_all(&dir)?;
                report.created_dirs.push(dir.clone());
            }
            dir
        };

        let destination = output_dir.join(file_name);
        if destination == file {
            debug!("Already in place: {}", file.display());
            report.unchanged.push(file.to_path_buf());
            return Ok(());
        }

        if destination.exists() {
            match self.options.on_collision {
                CollisionPolicy::Overwrite => {
                    debug!("Overwriting {}", destination.display());
                }
                CollisionPolicy::Skip => {
                    report.warn(SortWarning::DestinationExists {
                        file: file.to_path_buf(),
                        destination,
                    });
                    return Ok(());
                }
                CollisionPolicy::Error => {
                    return Err(DicomSortError::DestinationExists(destination));
                }
            }
        }

        move_file(file, &destination)?;
        report.record_move(file, &destination);
        Ok(())
    }

    /// Reads SeriesNumber and the series description
    ///
    /// Returns `None`, after recording a single warning, if the file has no
    /// usable SeriesNumber.
    fn series_info(&self, file: &Path, report: &mut SortReport) -> Result<Option<SeriesInfo>> {
        if self.reader.get_field(keywords::SERIES_NUMBER, file)?.is_none() {
            report.warn(SortWarning::MissingSeriesNumber {
                file: file.to_path_buf(),
            });
            return Ok(None);
        }
        let Some(number) = self.number_field(keywords::SERIES_NUMBER, file, report)? else {
            return Ok(None);
        };

        let description = match self.reader.get_field(keywords::SERIES_DESCRIPTION, file)? {
            Some(description) => description,
            None => match self.reader.get_field(keywords::PROTOCOL_NAME, file)? {
                Some(protocol) => protocol,
                None => {
                    report.warn(SortWarning::MissingSeriesDescription {
                        file: file.to_path_buf(),
                    });
                    UNKNOWN_PROTOCOL.to_string()
                }
            },
        };

        Ok(Some(SeriesInfo::new(number, description)))
    }

    /// Builds the new file name, or keeps the current one if a field is missing
    fn renamed_file_name(
        &self,
        file: &Path,
        series: &SeriesInfo,
        report: &mut SortReport,
    ) -> Result<OsString> {
        let acquisition_number = self.number_field(keywords::ACQUISITION_NUMBER, file, report)?;
        let instance_number = match self.number_field(keywords::INSTANCE_NUMBER, file, report)? {
            Some(number) => Some(number),
            None => self.number_field(keywords::IMAGE_NUMBER, file, report)?,
        };
        let patient_name = match self.reader.get_field(keywords::PATIENT_NAME, file)? {
            Some(name) => Some(name),
            None => self.reader.get_field(keywords::PATIENTS_NAME, file)?,
        };
        let extension = file
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let instance = InstanceInfo {
            patient_name,
            acquisition_number,
            instance_number,
            extension,
        };

        match (
            &instance.patient_name,
            instance.acquisition_number,
            instance.instance_number,
        ) {
            (Some(patient_name), Some(acquisition_number), Some(instance_number)) => {
                Ok(OsString::from(instance_file_name(
                    patient_name,
                    series,
                    acquisition_number,
                    instance_number,
                    &instance.extension,
                )))
            }
            _ => {
                report.warn(SortWarning::CannotRename {
                    file: file.to_path_buf(),
                    series: series.clone(),
                    instance,
                });
                Ok(original_file_name(file))
            }
        }
    }

    /// Reads an integer attribute, treating non-integer values as absent
    fn number_field(
        &self,
        keyword: &str,
        file: &Path,
        report: &mut SortReport,
    ) -> Result<Option<i64>> {
        let Some(text) = self.reader.get_field(keyword, file)? else {
            return Ok(None);
        };
        let number = parse_number(&text);
        if number.is_none() {
            report.warn(SortWarning::InvalidNumber {
                file: file.to_path_buf(),
                keyword: keyword.to_string(),
                value: text,
            });
        }
        Ok(number)
    }
}

/// Collects the referenced files of a single-patient, single-study DICOMDIR
///
/// Returns `None` (after recording why) for any other shape.
fn dicomdir_files(
    dicomdir: &DicomDir,
    path: &Path,
    report: &mut SortReport,
) -> Option<Vec<PathBuf>> {
    let dicomdir_path = path.to_path_buf();
    let patient = match dicomdir.patients.as_slice() {
        [patient] => patient,
        [] => {
            report.warn(SortWarning::NoPatients {
                dicomdir: dicomdir_path,
            });
            return None;
        }
        patients => {
            report.warn(SortWarning::MultiplePatients {
                dicomdir: dicomdir_path,
                count: patients.len(),
            });
            return None;
        }
    };
    let study = match patient.studies.as_slice() {
        [study] => study,
        [] => {
            report.warn(SortWarning::NoStudies {
                dicomdir: dicomdir_path,
            });
            return None;
        }
        studies => {
            report.warn(SortWarning::MultipleStudies {
                dicomdir: dicomdir_path,
                count: studies.len(),
            });
            return None;
        }
    };

    let base = path.parent().unwrap_or(Path::new(""));
    Some(study.image_paths(base))
}

fn original_file_name(file: &Path) -> OsString {
    file.file_name().map(OsString::from).unwrap_or_default()
}

/// Moves a file, copying it when source and destination are on different devices
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!("Copying {} across devices", from.display());
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        result => result,
    }
}
