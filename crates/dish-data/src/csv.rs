//! Minimal delimiter-separated line splitting.
//!
//! Double quotes toggle quoting and are dropped from the output; commas inside
//! a quoted run stay part of the field. Fields are trimmed.

/// Split one source line into trimmed fields.
pub(crate) fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_owned());
    fields
}

/// Split a comma-joined ingredient list, dropping blank entries.
pub(crate) fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a minute count; malformed or negative values become zero.
pub(crate) fn parse_minutes(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}
