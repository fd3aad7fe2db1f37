use crate::core::download::Downloader;
use crate::error::{FetchError, Result};
use crate::utils::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ASSETS_ARCHIVE_URL: &str =
    "https://github.com/KhronosGroup/glTF-Sample-Assets/archive/refs/heads/main.zip";
pub const DEFAULT_DESTINATION: &str = "assets/sample-models";

const ARCHIVE_ROOT_DIR: &str = "glTF-Sample-Assets-main";
const MODELS_SUBDIR: &str = "Models";
const ARCHIVE_FILE_NAME: &str = "main.zip";

/// Downloads the glTF Sample Assets archive and installs its `Models` tree
/// at `destination`, replacing any prior contents.
pub fn fetch_assets(destination: &Path) -> Result<()> {
    fetch_assets_from(ASSETS_ARCHIVE_URL, destination)
}

fn fetch_assets_from(url: &str, destination: &Path) -> Result<()> {
    println!("Fetching glTF sample assets");

    let destination = absolutize(destination)?;
    if let Some(parent) = destination.parent() {
        fs::ensure_dir_exists(parent)?;
    }

    // Scoped workspace: removed on drop, on success and on every failure path
    let workspace = TempDir::new()?;

    let downloader = Downloader::new();
    let archive_path = workspace.path().join(ARCHIVE_FILE_NAME);
    downloader.download_file(url, &archive_path)?;

    downloader.extract_zip(&archive_path, workspace.path())?;

    let models_dir = locate_models_dir(workspace.path())?;
    install_models(&models_dir, &destination)?;

    println!("✅ Sample assets installed");
    println!("   Location: {}", destination.display());

    Ok(())
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn locate_models_dir(extracted_root: &Path) -> Result<PathBuf> {
    // Known layout of the upstream archive; deliberately no discovery logic
    let models_dir = extracted_root.join(ARCHIVE_ROOT_DIR).join(MODELS_SUBDIR);
    if !models_dir.is_dir() {
        return Err(FetchError::MissingModelsDir { path: models_dir });
    }
    Ok(models_dir)
}

fn install_models(models_src: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        fs::remove_dir_recursive(destination)?;
    }
    fs::copy_dir_recursive(models_src, destination)
}
