use serde::{Deserialize, Serialize};

/// One documentation entry, parsed from a source line that split into
/// exactly five fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub name: String,
    pub syntax: String,
    pub default_value: String,
    pub description: String,
    pub example: String,
}

impl OptionRecord {
    /// Field count a source line must produce to form a record.
    pub const FIELD_COUNT: usize = 5;

    /// Builds a record from split fields. Any other field count is not a
    /// record and yields `None`.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match fields {
            [name, syntax, default_value, description, example] => Some(Self {
                name: (*name).to_string(),
                syntax: (*syntax).to_string(),
                default_value: (*default_value).to_string(),
                description: (*description).to_string(),
                example: (*example).to_string(),
            }),
            _ => None,
        }
    }
}

/// Output of the transform stage.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub records: Vec<OptionRecord>,
    pub rendered: String,
    /// Lines whose field count was not five. Telemetry only; malformed
    /// lines never reach either output stream.
    pub dropped: usize,
}
