//! DICOMDIR (media storage directory) reading
//!
//! A DICOMDIR lists its directory records as one flat sequence. Records are
//! nested by position: every STUDY belongs to the PATIENT before it, every
//! SERIES to the STUDY before it, and every other record type (IMAGE, SR
//! DOCUMENT, PRIVATE, ...) to the SERIES before it. Root-level records such
//! as PALETTE or HANGING PROTOCOL sit beside the patients; they close the
//! current patient, so nothing that follows is nested under it until the
//! next PATIENT record.

use crate::error::Result;
use crate::extraction::tags::{
    get_multi_string_value, get_string_value, DIRECTORY_RECORD_SEQUENCE, DIRECTORY_RECORD_TYPE,
    REFERENCED_FILE_ID,
};
use dicom_object::{open_file, InMemDicomObject};
use log::debug;
use std::path::{Path, PathBuf};

/// File name that marks an index file
pub const DICOMDIR_NAME: &str = "DICOMDIR";

/// Record types that live at the root of the directory, next to PATIENT
const ROOT_RECORD_TYPES: &[&str] = &[
    "TOPIC",
    "HANGING PROTOCOL",
    "PALETTE",
    "IMPLANT",
    "IMPLANT GROUP",
    "IMPLANT ASSY",
];

/// Parsed patient → study → series → image hierarchy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DicomDir {
    pub patients: Vec<PatientRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientRecord {
    pub studies: Vec<StudyRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyRecord {
    pub series: Vec<SeriesRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesRecord {
    /// ReferencedFileID of each leaf record, as path components
    pub images: Vec<Vec<String>>,
}

impl DicomDir {
    /// Reads a DICOMDIR file from disk
    pub fn open(path: &Path) -> Result<Self> {
        let dcm = open_file(path)?;
        Ok(Self::from_dicom(&dcm))
    }

    /// Builds the hierarchy from an already-opened DICOMDIR object
    pub fn from_dicom(dcm: &InMemDicomObject) -> Self {
        let mut dicomdir = DicomDir::default();

        let Some(records) = dcm
            .element(DIRECTORY_RECORD_SEQUENCE)
            .ok()
            .and_then(|elem| elem.items())
        else {
            return dicomdir;
        };

        let mut at_root = false;
        for record in records {
            let record_type = get_string_value(record, DIRECTORY_RECORD_TYPE)
                .unwrap_or_default()
                .to_uppercase();

            match record_type.as_str() {
                "PATIENT" => {
                    at_root = false;
                    dicomdir.patients.push(PatientRecord::default());
                }
                root if ROOT_RECORD_TYPES.contains(&root) => {
                    debug!("Skipping root-level {} record", root);
                    at_root = true;
                }
                other if at_root => {
                    debug!("Ignoring {} record outside of a PATIENT", other);
                }
                "STUDY" => match dicomdir.patients.last_mut() {
                    Some(patient) => patient.studies.push(StudyRecord::default()),
                    None => debug!("Ignoring STUDY record without a PATIENT"),
                },
                "SERIES" => match dicomdir.current_study() {
                    Some(study) => study.series.push(SeriesRecord::default()),
                    None => debug!("Ignoring SERIES record without a STUDY"),
                },
                other => {
                    let Some(file_id) = get_multi_string_value(record, REFERENCED_FILE_ID) else {
                        debug!("Ignoring {} record without a ReferencedFileID", other);
                        continue;
                    };
                    match dicomdir
                        .current_study()
                        .and_then(|study| study.series.last_mut())
                    {
                        Some(series) => series.images.push(file_id),
                        None => debug!("Ignoring {} record without a SERIES", other),
                    }
                }
            }
        }

        dicomdir
    }

    fn current_study(&mut self) -> Option<&mut StudyRecord> {
        self.patients
            .last_mut()
            .and_then(|patient| patient.studies.last_mut())
    }
}

impl StudyRecord {
    /// Resolves every referenced file of the study against `base`
    pub fn image_paths(&self, base: &Path) -> Vec<PathBuf> {
        self.series
            .iter()
            .flat_map(|series| series.images.iter())
            .map(|components| {
                let mut path = base.to_path_buf();
                path.extend(components.iter().filter(|c| !c.is_empty()));
                path
            })
            .collect()
    }
}

/// Checks whether `path` names an index file
pub fn is_dicomdir(path: &Path) -> bool {
    path.file_name()
        .map(|name| name == DICOMDIR_NAME)
        .unwrap_or(false)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use dicom_core::value::{DataSetSequence, PrimitiveValue};
    use dicom_core::{DataElement, VR};
    use dicom_object::FileMetaTableBuilder;

    const MEDIA_STORAGE_DIRECTORY: &str = "1.2.840.10008.1.3.10";

    pub(crate) fn record(record_type: &str, file_id: Option<&[&str]>) -> InMemDicomObject {
        let mut item = InMemDicomObject::from_element_iter([DataElement::new(
            DIRECTORY_RECORD_TYPE,
            VR::CS,
            PrimitiveValue::from(record_type),
        )]);
        if let Some(components) = file_id {
            item.put(DataElement::new(
                REFERENCED_FILE_ID,
                VR::CS,
                PrimitiveValue::Strs(
                    components
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .into(),
                ),
            ));
        }
        item
    }

    pub(crate) fn dicomdir_object(records: Vec<InMemDicomObject>) -> InMemDicomObject {
        InMemDicomObject::from_element_iter([DataElement::new(
            DIRECTORY_RECORD_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(records),
        )])
    }

    /// Writes a DICOMDIR file holding the given directory records
    pub(crate) fn write_dicomdir(path: &Path, records: Vec<InMemDicomObject>) {
        dicomdir_object(records)
            .with_meta(
                FileMetaTableBuilder::new()
                    .media_storage_sop_class_uid(MEDIA_STORAGE_DIRECTORY)
                    .media_storage_sop_instance_uid("1.2.3.4.6")
                    .transfer_syntax("1.2.840.10008.1.2.1"),
            )
            .unwrap()
            .write_to_file(path)
            .unwrap();
    }

    #[test]
    fn test_open_written_dicomdir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join(DICOMDIR_NAME);
        write_dicomdir(
            &path,
            vec![
                record("PATIENT", None),
                record("STUDY", None),
                record("SERIES", None),
                record("IMAGE", Some(&["DICOM", "IM0001"])),
            ],
        );

        let dicomdir = DicomDir::open(&path).unwrap();
        assert_eq!(
            dicomdir.patients[0].studies[0].series[0].images,
            vec![vec!["DICOM", "IM0001"]]
        );
    }

    #[test]
    fn test_is_dicomdir() {
        assert!(is_dicomdir(Path::new("/media/cdrom/DICOMDIR")));
        assert!(is_dicomdir(Path::new("DICOMDIR")));
        assert!(!is_dicomdir(Path::new("/media/cdrom/dicomdir")));
        assert!(!is_dicomdir(Path::new("/media/cdrom/DICOMDIR.dcm")));
        assert!(!is_dicomdir(Path::new("/")));
    }

    #[test]
    fn test_from_dicom_empty() {
        let dcm = InMemDicomObject::new_empty();
        assert!(DicomDir::from_dicom(&dcm).patients.is_empty());
    }

    #[test]
    fn test_from_dicom_hierarchy() {
        let dcm = dicomdir_object(vec![
            record("PATIENT", None),
            record("STUDY", None),
            record("SERIES", None),
            record("IMAGE", Some(&["DICOM", "IM0001"])),
            record("IMAGE", Some(&["DICOM", "IM0002"])),
            record("SERIES", None),
            record("IMAGE", Some(&["DICOM", "IM0003"])),
        ]);

        let dicomdir = DicomDir::from_dicom(&dcm);
        assert_eq!(dicomdir.patients.len(), 1);
        assert_eq!(dicomdir.patients[0].studies.len(), 1);

        let study = &dicomdir.patients[0].studies[0];
        assert_eq!(study.series.len(), 2);
        assert_eq!(study.series[0].images.len(), 2);
        assert_eq!(study.series[1].images, vec![vec!["DICOM", "IM0003"]]);
    }

    #[test]
    fn test_from_dicom_multiple_patients() {
        let dcm = dicomdir_object(vec![
            record("PATIENT", None),
            record("STUDY", None),
            record("PATIENT", None),
            record("STUDY", None),
            record("STUDY", None),
        ]);

        let dicomdir = DicomDir::from_dicom(&dcm);
        assert_eq!(dicomdir.patients.len(), 2);
        assert_eq!(dicomdir.patients[0].studies.len(), 1);
        assert_eq!(dicomdir.patients[1].studies.len(), 2);
    }

    #[test]
    fn test_from_dicom_skips_orphans_and_missing_file_ids() {
        let dcm = dicomdir_object(vec![
            record("IMAGE", Some(&["ORPHAN"])),
            record("PATIENT", None),
            record("STUDY", None),
            record("SERIES", None),
            record("IMAGE", None),
            record("SR DOCUMENT", Some(&["DICOM", "SR0001"])),
        ]);

        let dicomdir = DicomDir::from_dicom(&dcm);
        let series = &dicomdir.patients[0].studies[0].series[0];
        assert_eq!(series.images, vec![vec!["DICOM", "SR0001"]]);
    }

    #[test]
    fn test_from_dicom_root_level_records_close_the_patient() {
        let dcm = dicomdir_object(vec![
            record("PATIENT", None),
            record("STUDY", None),
            record("SERIES", None),
            record("IMAGE", Some(&["DICOM", "IM0001"])),
            record("PALETTE", Some(&["PALETTE", "P0001"])),
            record("HANGING PROTOCOL", Some(&["HP", "HP0001"])),
            record("PRIVATE", Some(&["PRIVATE", "X0001"])),
            record("PATIENT", None),
            record("STUDY", None),
            record("SERIES", None),
            record("IMAGE", Some(&["DICOM", "IM0002"])),
        ]);

        let dicomdir = DicomDir::from_dicom(&dcm);
        assert_eq!(dicomdir.patients.len(), 2);
        assert_eq!(
            dicomdir.patients[0].studies[0].series[0].images,
            vec![vec!["DICOM", "IM0001"]]
        );
        assert_eq!(
            dicomdir.patients[1].studies[0].series[0].images,
            vec![vec!["DICOM", "IM0002"]]
        );
    }

    #[test]
    fn test_from_dicom_trailing_palette_is_not_an_image() {
        let dcm = dicomdir_object(vec![
            record("PATIENT", None),
            record("STUDY", None),
            record("SERIES", None),
            record("IMAGE", Some(&["DICOM", "IM0001"])),
            record("PALETTE", Some(&["PALETTE", "P0001"])),
        ]);

        let dicomdir = DicomDir::from_dicom(&dcm);
        let study = &dicomdir.patients[0].studies[0];
        assert_eq!(
            study.image_paths(Path::new("/media")),
            vec![PathBuf::from("/media/DICOM/IM0001")]
        );
    }

    #[test]
    fn test_image_paths() {
        let study = StudyRecord {
            series: vec![
                SeriesRecord {
                    images: vec![vec!["DICOM".to_string(), "IM0001".to_string()]],
                },
                SeriesRecord {
                    images: vec![vec!["DICOM".to_string(), "IM0002".to_string()]],
                },
            ],
        };

        let paths = study.image_paths(Path::new("/media/cdrom"));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/media/cdrom/DICOM/IM0001"),
                PathBuf::from("/media/cdrom/DICOM/IM0002"),
            ]
        );
    }
}
