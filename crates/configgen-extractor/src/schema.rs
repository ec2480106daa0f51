//! Schema file loading

use crate::error::ExtractorError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON schema file into a string.
///
/// The content is embedded in the prompt as-is; it is never parsed.
pub fn load_schema(path: impl AsRef<Path>) -> Result<String, ExtractorError> {
    let path = path.as_ref();
    let schema = fs::read_to_string(path).map_err(|source| ExtractorError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded schema from {} ({} bytes)", path.display(), schema.len());
    Ok(schema)
}
