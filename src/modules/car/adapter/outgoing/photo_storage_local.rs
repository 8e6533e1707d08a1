// src/modules/car/adapter/outgoing/photo_storage_local.rs

use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::modules::car::application::ports::outgoing::{PhotoStorage, PhotoStorageError};

/// URL path under which the upload directory is served.
pub const PUBLIC_PHOTO_PATH: &str = "/uploads/cars";

/// Stores photos as plain files in one directory and hands out URLs rooted
/// at the public base URL.
#[derive(Clone, Debug)]
pub struct LocalPhotoStorage {
    dir: PathBuf,
    url_prefix: String,
}

impl LocalPhotoStorage {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: format!(
                "{}{}/",
                public_base_url.trim_end_matches('/'),
                PUBLIC_PHOTO_PATH
            ),
        }
    }

    #[cfg(test)]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name_for(&self, url: &str) -> Result<String, PhotoStorageError> {
        let name = url
            .strip_prefix(&self.url_prefix)
            .ok_or_else(|| PhotoStorageError::ForeignUrl(url.to_string()))?;

        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(PhotoStorageError::ForeignUrl(url.to_string()));
        }

        Ok(name.to_string())
    }
}

fn generate_file_name(extension: &str) -> String {
    format!(
        "car-{}-{}{}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>(),
        extension
    )
}

#[async_trait]
impl PhotoStorage for LocalPhotoStorage {
    async fn store(&self, source: &Path, extension: &str) -> Result<String, PhotoStorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PhotoStorageError::Io(e.to_string()))?;

        let file_name = generate_file_name(extension);
        let target = self.dir.join(&file_name);

        // Copy rather than rename: the temp dir may be on another filesystem.
        tokio::fs::copy(source, &target)
            .await
            .map_err(|e| PhotoStorageError::Io(e.to_string()))?;

        debug!(file = %target.display(), "Stored car photo");

        Ok(format!("{}{}", self.url_prefix, file_name))
    }

    async fn remove(&self, url: &str) -> Result<(), PhotoStorageError> {
        let file_name = self.file_name_for(url)?;

        match tokio::fs::remove_file(self.dir.join(&file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PhotoStorageError::Io(e.to_string())),
        }
    }
}
