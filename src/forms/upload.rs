//! Helper for persisting multipart image uploads under the uploads dir.

use std::path::Path;

use actix_multipart::form::tempfile::TempFile;
use uuid::Uuid;

use crate::forms::FormError;

/// Copies an uploaded temp file into `uploads_dir` under a fresh name and
/// returns the public URL path it will be served from.
pub fn persist_upload(file: &TempFile, uploads_dir: &str) -> Result<String, FormError> {
    let original = file.file_name.as_deref().unwrap_or("upload");
    let extension = Path::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("bin");

    let file_name = format!("{}.{extension}", Uuid::new_v4());
    let target = Path::new(uploads_dir).join(&file_name);

    std::fs::create_dir_all(uploads_dir).map_err(|e| FormError::Upload(e.to_string()))?;
    std::fs::copy(file.file.path(), &target).map_err(|e| FormError::Upload(e.to_string()))?;

    Ok(format!("/uploads/{file_name}"))
}
