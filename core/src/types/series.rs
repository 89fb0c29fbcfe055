use std::fmt;

/// Description used when neither SeriesDescription nor ProtocolName is present
pub const UNKNOWN_PROTOCOL: &str = "unknown_protocol";

/// Extension given to renamed files that have none
pub const DEFAULT_EXTENSION: &str = ".dcm";

/// Series identity of one imaging file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SeriesInfo {
    pub number: i64,
    pub description: String,
}

impl SeriesInfo {
    pub fn new(number: i64, description: impl Into<String>) -> Self {
        Self {
            number,
            description: description.into(),
        }
    }
}

impl fmt::Display for SeriesInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}-{}", self.number, self.description)
    }
}

/// Fields needed to rename one imaging file
///
/// Each field is `None` when the attribute is absent from the file. Zero is
/// a valid acquisition or instance number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct InstanceInfo {
    pub patient_name: Option<String>,
    pub acquisition_number: Option<i64>,
    pub instance_number: Option<i64>,
    /// Extension including the leading dot
    pub extension: String,
}

impl InstanceInfo {
    /// Checks whether every field of the naming scheme is present
    pub fn is_complete(&self) -> bool {
        self.patient_name.is_some()
            && self.acquisition_number.is_some()
            && self.instance_number.is_some()
    }
}

/// Parses an Integer String (IS) attribute value
///
/// Returns `None` if the text is not an integer.
pub fn parse_number(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}
