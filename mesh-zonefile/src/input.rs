use std::io::Read;
use std::path::Path;
use crate::error::ZonefileError;

/// Read the whole template file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_template(path: &Path) -> Result<String, ZonefileError> {
    let bytes = std::fs::read(path).map_err(|source| ZonefileError::MissingTemplate {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read template");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Drain the input stream. Zero bytes is an error.
pub fn read_input(mut reader: impl Read) -> Result<Vec<u8>, ZonefileError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(ZonefileError::Input)?;

    if buf.is_empty() {
        return Err(ZonefileError::EmptyInput);
    }

    tracing::debug!(bytes = buf.len(), "Read member list");
    Ok(buf)
}
