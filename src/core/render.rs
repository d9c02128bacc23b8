use crate::domain::model::OptionRecord;

/// Renders one record through the fixed documentation template: a quoted
/// header line, the description indented by nine spaces, and a blank line
/// separating it from the next record. Fields are inserted verbatim, no
/// escaping.
pub fn render_record(record: &OptionRecord) -> String {
    format!(
        "'{}' (parameters: {}; default value: '{}')::\n         {} (example: {})\n\n",
        record.name, record.syntax, record.default_value, record.description, record.example
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_matches_expected_block() {
        let record = OptionRecord {
            name: "--verbose".to_string(),
            syntax: "[on|off]".to_string(),
            default_value: "off".to_string(),
            description: "Enable verbose logging".to_string(),
            example: "--verbose on".to_string(),
        };
        assert_eq!(
            render_record(&record),
            "'--verbose' (parameters: [on|off]; default value: 'off')::\n\
             \x20        Enable verbose logging (example: --verbose on)\n\n"
        );
    }

    #[test]
    fn empty_fields_render_verbatim() {
        let record = OptionRecord {
            name: String::new(),
            syntax: String::new(),
            default_value: String::new(),
            description: String::new(),
            example: String::new(),
        };
        assert_eq!(
            render_record(&record),
            "'' (parameters: ; default value: '')::\n          (example: )\n\n"
        );
    }
}
