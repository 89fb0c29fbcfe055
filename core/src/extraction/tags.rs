use dicom_core::dictionary::DataDictionary;
use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;
use dicom_object::InMemDicomObject;

// Series Identification Tags
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);

// Instance Identification Tags
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

// Patient Tags
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);

// Media Storage Directory (DICOMDIR) Tags
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);

/// Attribute keywords used when sorting and renaming
pub mod keywords {
    pub const SERIES_NUMBER: &str = "SeriesNumber";
    pub const SERIES_DESCRIPTION: &str = "SeriesDescription";
    pub const PROTOCOL_NAME: &str = "ProtocolName";
    pub const ACQUISITION_NUMBER: &str = "AcquisitionNumber";
    pub const INSTANCE_NUMBER: &str = "InstanceNumber";
    /// Name of InstanceNumber in earlier editions of the standard
    pub const IMAGE_NUMBER: &str = "ImageNumber";
    pub const PATIENT_NAME: &str = "PatientName";
    /// Legacy spelling of PatientName still found in some toolkits
    pub const PATIENTS_NAME: &str = "PatientsName";
}

/// Keywords the standard dictionary no longer knows by that name
const RETIRED_KEYWORDS: [(&str, Tag); 2] = [
    (keywords::IMAGE_NUMBER, INSTANCE_NUMBER),
    (keywords::PATIENTS_NAME, PATIENT_NAME),
];

/// Resolves an attribute keyword (e.g. `SeriesNumber`) to its tag
///
/// Looks up the standard data dictionary first, then the retired keyword
/// aliases. Returns `None` for unknown keywords.
pub fn tag_for_keyword(keyword: &str) -> Option<Tag> {
    StandardDataDictionary
        .by_name(keyword)
        .map(|entry| entry.tag.inner())
        .or_else(|| {
            RETIRED_KEYWORDS
                .iter()
                .find(|(alias, _)| *alias == keyword)
                .map(|(_, tag)| *tag)
        })
}

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present, cannot be converted to string,
/// or holds only whitespace
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Helper to get multi-string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to Vec<String>
pub fn get_multi_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<String>> {
    dcm.element(tag).ok().and_then(|elem| {
        if let Ok(strs) = elem.to_multi_str() {
            Some(strs.iter().map(|s| s.trim().to_string()).collect())
        } else {
            // Fallback: single string with backslash-separated values
            elem.to_str()
                .ok()
                .map(|s| s.split('\\').map(|part| part.trim().to_string()).collect())
        }
    })
}
