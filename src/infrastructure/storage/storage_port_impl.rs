use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::application::ports::storage_port::{StoragePort, StoredUpload};

pub struct FsStoragePort {
    pub uploads_root: PathBuf,
}

/// Extension taken from the original filename, reduced to a safe
/// lowercase alphanumeric token. Anything else is dropped rather than
/// echoed into a path on disk.
fn sanitize_extension(original_filename: Option<&str>) -> Option<String> {
    let ext = Path::new(original_filename?)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

#[async_trait::async_trait]
impl StoragePort for FsStoragePort {
    async fn store_image(
        &self,
        original_filename: Option<&str>,
        bytes: &[u8],
    ) -> anyhow::Result<StoredUpload> {
        let stem = Uuid::new_v4().simple().to_string();
        let filename = match sanitize_extension(original_filename) {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem,
        };

        let path = self.uploads_root.join(&filename);
        tokio::fs::write(&path, bytes).await?;

        Ok(StoredUpload {
            filename: filename.clone(),
            relative_path: filename,
            size: bytes.len() as i64,
        })
    }
}
