use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for BOM input files (100 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links before `operation` touches `path`.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} of {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not accepted for {}.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a regular, non-symlinked file whose size does not exceed `max_size`.
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human-readable name used in error messages (e.g. "BOM input")
/// * `max_size` - Size cap in bytes
///
/// # Errors
/// Returns an error if the path is missing, a symlink, not a regular file,
/// too large, or not valid UTF-8.
pub fn read_bounded_file(path: &Path, description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not accepted for {}.",
            path.display(),
            description
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}
