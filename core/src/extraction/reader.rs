use crate::error::Result;
use crate::extraction::tags::{get_string_value, tag_for_keyword};
use dicom::object::{open_file, DefaultDicomObject};
use log::debug;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Reads single attribute values from imaging files
///
/// Every lookup answers with an explicit `Option`: `Ok(None)` means the
/// attribute is absent (or empty), while `Err` means the file itself could
/// not be read. Callers branch on presence instead of on the value, so a
/// legitimately zero InstanceNumber is never mistaken for a missing one.
pub trait FieldReader {
    /// Returns the trimmed text of the attribute named `keyword` in `path`
    fn get_field(&self, keyword: &str, path: &Path) -> Result<Option<String>>;
}

/// [`FieldReader`] backed by `dicom-object`
///
/// Keeps the most recently opened file in memory, since the sorter asks for
/// several attributes of the same file in a row.
#[derive(Default)]
pub struct DicomFieldReader {
    last: RefCell<Option<(PathBuf, DefaultDicomObject)>>,
}

impl DicomFieldReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldReader for DicomFieldReader {
    fn get_field(&self, keyword: &str, path: &Path) -> Result<Option<String>> {
        let Some(tag) = tag_for_keyword(keyword) else {
            debug!("Unknown attribute keyword: {}", keyword);
            return Ok(None);
        };

        let mut last = self.last.borrow_mut();
        let cached = matches!(&*last, Some((cached_path, _)) if cached_path == path);
        if !cached {
            debug!("Reading DICOM file: {}", path.display());
            let dcm = open_file(path)?;
            *last = Some((path.to_path_buf(), dcm));
        }

        Ok((*last)
            .as_ref()
            .and_then(|(_, dcm)| get_string_value(dcm, tag)))
    }
}
