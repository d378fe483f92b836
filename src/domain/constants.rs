/// File extensions handed to the converter, matched case-insensitively.
pub const DOC_EXTENSIONS: [&str; 3] = ["odt", "doc", "docx"];

/// Executable names probed on PATH, in order, when `--converter` is not given.
pub const CONVERTER_CANDIDATES: [&str; 2] = ["soffice", "libreoffice"];

/// LibreOffice conversion filter selecting plain-text output.
pub const CONVERT_FILTER: &str = "txt";

pub const TXT_EXTENSION: &str = "txt";

/// `chrono` format for the `--datetime-tag` filename tag.
pub const DATETIME_TAG_FORMAT: &str = "[%Y-%m-%d_%H%M%S]";

/// Column width for `--wrap` output.
pub const WRAP_WIDTH: usize = 112;

/// Inserted before the extension of a wrapped sibling copy.
pub const WRAP_SUFFIX: &str = "-wrap";
