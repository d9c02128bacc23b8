/// Field separator used by documentation source files. A field containing
/// this token cannot be represented; there is no escaping.
pub const SEPARATOR: &str = "||";

/// Splits `input` on every non-overlapping occurrence of `separator`,
/// scanning left to right. The remainder after the last occurrence is
/// included even when empty, so the result always has at least one element
/// and rejoining with the separator reproduces the input exactly.
pub fn split_on<'a>(input: &'a str, separator: &str) -> Vec<&'a str> {
    debug_assert!(!separator.is_empty(), "separator must be non-empty");
    input.split(separator).collect()
}

/// Splits one source line into record fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    split_on(line, SEPARATOR)
}
