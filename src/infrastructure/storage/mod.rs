use std::path::Path;

mod storage_port_impl;
pub use storage_port_impl::FsStoragePort;

/// Explicit startup step: the uploads root comes from configuration and
/// must exist before the server accepts requests.
pub async fn ensure_uploads_root(root: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(root)
        .await
        .map_err(|err| anyhow::anyhow!("failed to create uploads root {}: {err}", root.display()))
}
