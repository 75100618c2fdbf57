use tracing::debug;

use crate::types::ConfigMap;

/// Parses one config line into a trimmed key and de-quoted value.
///
/// Blank lines, `#` comments and lines without exactly one `=` yield `None`.
pub fn parse_config_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut parts = line.split('=');
    let (key, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(k), Some(v), None) => (k, v),
        _ => {
            debug!("ignoring config line without exactly one '=': {:?}", line);
            return None;
        }
    };
    Some((key.trim().to_string(), strip_quotes(value.trim()).to_string()))
}

const QUOTES: &[char] = &['"', '\''];

/// Removes at most one leading and one trailing quote character.
pub fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

pub fn parse_config_str(text: &str) -> ConfigMap {
    text.lines().filter_map(parse_config_line).collect()
}
