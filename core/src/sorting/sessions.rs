use super::SessionSorter;
use crate::error::Result;
use crate::extraction::FieldReader;
use crate::types::SortReport;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

impl<R: FieldReader> SessionSorter<R> {
    /// Sorts every session below a raw-data folder
    ///
    /// With a subject prefix, each `rawfolder/<subject>*` folder is a session,
    /// or, when a session prefix is given too, each
    /// `rawfolder/<subject>*/<session>*` folder. Without a subject prefix the
    /// raw-data folder itself (or DICOMDIR path) is the only session. Empty
    /// prefixes count as absent.
    ///
    /// Sessions are sorted one after another; a session abandoned because of
    /// an unsupported DICOMDIR does not stop the others.
    pub fn sort_sessions(
        &self,
        rawfolder: &Path,
        subject_prefix: Option<&str>,
        session_prefix: Option<&str>,
    ) -> Result<Vec<SortReport>> {
        let subject_prefix = subject_prefix.filter(|p| !p.is_empty());
        let session_prefix = session_prefix.filter(|p| !p.is_empty());

        let Some(subject_prefix) = subject_prefix else {
            return Ok(vec![self.sort_session(rawfolder)?]);
        };

        let mut reports = Vec::new();
        for subject_folder in list_matching_subdirs(rawfolder, subject_prefix)? {
            match session_prefix {
                Some(session_prefix) => {
                    for session_folder in list_matching_subdirs(&subject_folder, session_prefix)? {
                        reports.push(self.sort_session(&session_folder)?);
                    }
                }
                None => reports.push(self.sort_session(&subject_folder)?),
            }
        }

        info!("Sorted {} session(s) in {}", reports.len(), rawfolder.display());
        Ok(reports)
    }
}

/// Lists the immediate subdirectories of `parent` whose name starts with `prefix`
///
/// Names are returned in sorted order. Hidden directories only match a
/// prefix that starts with a dot, as with a shell glob.
pub fn list_matching_subdirs(parent: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(parent)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping non UTF-8 folder name: {}", path.display());
            continue;
        };
        if name.starts_with('.') && !prefix.starts_with('.') {
            continue;
        }
        if name.starts_with(prefix) {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
