use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::parsing::parse_config_str;
use crate::types::ConfigMap;

/// Reads a `KEY=VALUE` file. See [`parse_config_str`] for the line rules.
pub fn read_config_file(path: &Path) -> Result<ConfigMap, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config = parse_config_str(&text);
    info!("loaded {} config entries from {}", config.len(), path.display());
    Ok(config)
}
