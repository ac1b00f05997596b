//! Turning picked browser files into an upload batch.

use lumina_client_core::UploadFile;
use std::fmt::Display;

/// One picked file after reading. An unreadable file cancels the whole batch before
/// anything is sent, with a message naming it.
pub fn read_upload<E: Display>(
    name: String,
    content_type: Option<String>,
    read: Result<Vec<u8>, E>,
) -> Result<UploadFile, String> {
    let bytes = read.map_err(|e| format!("Could not read {name}: {e}. Upload cancelled."))?;
    let file = UploadFile::new(name, bytes);
    Ok(match content_type.filter(|m| !m.is_empty()) {
        Some(mime) => file.with_mime(mime),
        None => file,
    })
}
