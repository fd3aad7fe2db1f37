use crate::error::{FetchError, Result};
use std::fs::File;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const USER_AGENT: &str = concat!("gltfetch/", env!("CARGO_PKG_VERSION"));

pub struct Downloader;

impl Default for Downloader {
    fn default() -> Self {
        Self
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self
    }

    pub fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        println!("Downloading from {url}...");

        // Ensure parent directory exists
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // The blocking client applies a 30s whole-request deadline by default,
        // too short for a full archive download.
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None)
            .build()
            .map_err(|e| network_error(url, &e))?;

        let mut response = client.get(url).send().map_err(|e| network_error(url, &e))?;

        if !response.status().is_success() {
            return Err(FetchError::Network {
                url: url.to_string(),
                reason: format!("HTTP status {}", response.status()),
            });
        }

        // Stream the body to disk rather than holding the archive in memory
        let mut file = File::create(destination)?;
        response
            .copy_to(&mut file)
            .map_err(|e| network_error(url, &e))?;

        println!("Downloaded to {destination:?}");
        Ok(())
    }

    pub fn extract_zip(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        println!("Extracting {archive_path:?} to {destination:?}");

        std::fs::create_dir_all(destination)?;

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file).map_err(|e| zip_error(archive_path, e))?;

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| zip_error(archive_path, e))?;
            let outpath = match entry.enclosed_name() {
                Some(path) => destination.join(path),
                None => continue,
            };

            if entry.name().ends_with('/') {
                std::fs::create_dir_all(&outpath)?;
            } else {
                if let Some(p) = outpath.parent() {
                    if !p.exists() {
                        std::fs::create_dir_all(p)?;
                    }
                }
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut entry, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }

        println!("Extraction completed");
        Ok(())
    }
}

fn network_error(url: &str, err: &reqwest::Error) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

fn zip_error(path: &Path, err: ZipError) -> FetchError {
    match err {
        ZipError::Io(io) => FetchError::Io(io),
        _ => FetchError::CorruptArchive {
            path: path.to_path_buf(),
        },
    }
}
