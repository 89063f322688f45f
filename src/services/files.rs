use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::forms::files::UploadFileForm;
use crate::repository::IdSequence;
use crate::services::ServiceResult;

/// Response body of the upload passthrough.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// URL the stored file can be fetched from.
    pub url: String,
    /// Storage identifier assigned to the file.
    pub file_id: String,
    /// Original filename as sent by the client.
    pub filename: String,
}

/// File-storage collaborator persisting uploads on the local disk.
///
/// Files land under the configured directory as `<id>_<filename>` and are
/// served back under `/files`, satisfying the passthrough contract of
/// "display name plus bytes in, retrievable URL out".
pub struct LocalFileStorage {
    dir: PathBuf,
    ids: IdSequence,
}

impl LocalFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ids: IdSequence::new(),
        }
    }

    /// Persists one payload and returns its retrievable location.
    pub fn store(
        &self,
        product_name: &str,
        filename: &str,
        payload: &[u8],
    ) -> ServiceResult<UploadedFile> {
        fs::create_dir_all(&self.dir)?;

        let file_id = self.ids.next().to_string();
        let stored_name = format!("{file_id}_{}", sanitize_filename(filename));
        fs::write(self.dir.join(&stored_name), payload)?;

        log::info!("stored upload `{stored_name}` for product `{product_name}`");

        Ok(UploadedFile {
            url: format!("/files/{stored_name}"),
            file_id,
            filename: filename.to_string(),
        })
    }
}

/// Reads the spooled upload and hands it to the storage collaborator.
pub fn store_upload(storage: &LocalFileStorage, form: UploadFileForm) -> ServiceResult<UploadedFile> {
    let UploadFileForm { product_name, file } = form;

    let filename = file
        .file_name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "upload.bin".to_string());
    let payload = fs::read(file.file.path())?;

    storage.store(&product_name.into_inner(), &filename, &payload)
}

/// Keeps stored names path-safe: anything outside a conservative character
/// set becomes `-`.
fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => ch,
            _ => '-',
        })
        .collect();

    if cleaned.trim_matches(|ch: char| ch == '-' || ch == '.').is_empty() {
        "upload.bin".to_string()
    } else {
        cleaned
    }
}
