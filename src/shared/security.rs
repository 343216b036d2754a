use crate::shared::Result;
use std::fs::Metadata;
use std::path::Path;

/// Maximum document size accepted for comparison (100 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that metadata describes a regular file (not a directory or symlink)
///
/// The metadata must come from `symlink_metadata` so the link itself is
/// inspected, not its target. Callers do the lookup themselves, which lets
/// async adapters use `tokio::fs` for it.
///
/// # Arguments
/// * `metadata` - Metadata of the path, not following symlinks
/// * `path` - The path the metadata belongs to, for error messages
///
/// # Errors
/// Returns an error if:
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(metadata: &Metadata, path: &Path) -> Result<u64> {
    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
