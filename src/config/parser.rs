use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::SetupError;

/// Flat key=value mapping read from the GameCache config file.
pub type FlatConfig = HashMap<String, String>;

/// Parse a simple `key = value` config file.
///
/// Empty lines and `#` comments are skipped; every other line must contain a
/// `=` and is split on the first one. Values wrapped in one matching pair of
/// single or double quotes have the quotes stripped, with no escape
/// processing inside. Later duplicates of a key overwrite earlier ones.
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<FlatConfig, SetupError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SetupError::NotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let mut config = FlatConfig::new();

    for (idx, raw_line) in raw.lines().enumerate() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(SetupError::InvalidFormat {
                line: idx + 1,
                content: line.to_string(),
            });
        };

        config.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    Ok(config)
}

/// Strip one matching pair of surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
