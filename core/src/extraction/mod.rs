pub mod dicomdir;
pub mod reader;
pub mod tags;

pub use dicomdir::{is_dicomdir, DicomDir, DICOMDIR_NAME};
pub use reader::{DicomFieldReader, FieldReader};
pub use tags::*;
