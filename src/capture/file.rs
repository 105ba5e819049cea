//! File saving for whiteboard captures.

use super::types::{CaptureError, CapturedImage};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save captures to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Mathpad"),
            filename_template: "solution_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

/// Generate a `.png` filename from the template and the current time.
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, CaptureError> {
    if !directory.exists() {
        log::info!("Creating capture directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save a capture into the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_capture(
    image: &CapturedImage,
    config: &FileSaveConfig,
) -> Result<PathBuf, CaptureError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(generate_filename(&config.filename_template));

    log::info!(
        "Saving capture to: {} ({} bytes)",
        file_path.display(),
        image.png.len()
    );

    fs::write(&file_path, &image.png)?;

    // Student work stays private to the user
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path)
}
