use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub filename: String,
    pub relative_path: String,
    pub size: i64,
}

/// Upload sink. Implementations assign a collision-resistant name,
/// preserving the original extension, and persist the bytes durably before
/// returning.
#[async_trait]
pub trait StoragePort: Send + Sync {
    async fn store_image(
        &self,
        original_filename: Option<&str>,
        bytes: &[u8],
    ) -> anyhow::Result<StoredUpload>;
}
