//! Intel intake: the input record, its TOML file format, and validation.

pub mod model;
pub mod parser;
pub mod template;
pub mod toml_format;

pub use model::{Intel, StrategicChoice, StrategicChoiceParseError};
pub use parser::{IntelFileError, IntelParseError, missing_fields, parse_intel_toml, read_intel_file};
pub use template::render_intel_template;
pub use toml_format::{FIELD_KEYS, IntelFields, IntelToml, is_field_key};
