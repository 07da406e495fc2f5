//! Hotspot data schema: runtime validation and the offline dataset checker.

pub mod consistency;
pub mod dataset;
pub mod validator;

pub use consistency::{check_consistency, NamedDataFile};
pub use dataset::{validate_directory, DatasetReport};
pub use validator::{parse_data_file, validate, validate_hotspot, FieldPath, MIN_HOTSPOTS};
