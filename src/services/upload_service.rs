use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::errors::internal::UploadError;

/// Fixed prefix for generated file names, matching the form field name
const FILE_FIELD: &str = "images";

/// Persists uploaded images under the configured directory
///
/// File names are generated from the field prefix, the current timestamp in
/// milliseconds and a random integer, so simultaneous uploads of files with
/// identical names cannot collide.
pub struct UploadService {
    upload_dir: PathBuf,
}

impl UploadService {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the upload directory if it does not exist
    ///
    /// Called once at startup so the first submission never races directory
    /// creation.
    pub async fn ensure_upload_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|source| UploadError::CreateDir {
                path: self.upload_dir.clone(),
                source,
            })
    }

    /// Save every file of one submission, returning the saved paths in input
    /// order
    ///
    /// If any write fails, files already written for this submission are
    /// removed (best effort) before the error is returned, so a failed
    /// request leaves no partial set of images behind.
    pub async fn save_files(
        &self,
        files: &[(Option<String>, Vec<u8>)],
    ) -> Result<Vec<String>, UploadError> {
        let mut saved: Vec<PathBuf> = Vec::with_capacity(files.len());

        for (original_name, data) in files {
            let file_name = self.unique_file_name(original_name.as_deref());
            let target = self.upload_dir.join(&file_name);

            if let Err(source) = tokio::fs::write(&target, data).await {
                self.remove_saved(&saved).await;
                return Err(UploadError::WriteFile {
                    path: target,
                    source,
                });
            }

            saved.push(target);
        }

        Ok(saved
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect())
    }

    /// Generate a collision-resistant file name preserving the original
    /// extension
    fn unique_file_name(&self, original_name: Option<&str>) -> String {
        let timestamp = Utc::now().timestamp_millis();
        let random: u32 = rand::rng().random_range(0..1_000_000_000);

        let extension = original_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        format!("{}-{}-{}{}", FILE_FIELD, timestamp, random, extension)
    }

    async fn remove_saved(&self, saved: &[PathBuf]) {
        for path in saved {
            if let Err(e) = tokio::fs::remove_file(path).await {
                tracing::warn!("Failed to remove partially saved upload {:?}: {}", path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> UploadService {
        let random: u64 = rand::rng().random();
        UploadService::new(std::env::temp_dir().join(format!("market-uploads-{}", random)))
    }

    #[test]
    fn test_unique_file_name_keeps_extension() {
        let service = test_service();

        let name = service.unique_file_name(Some("bike.jpg"));

        assert!(name.starts_with("images-"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_unique_file_name_without_extension() {
        let service = test_service();

        let name = service.unique_file_name(Some("bike"));

        assert!(name.starts_with("images-"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_unique_file_name_without_original_name() {
        let service = test_service();

        let name = service.unique_file_name(None);

        assert!(name.starts_with("images-"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_unique_file_names_differ() {
        let service = test_service();

        let first = service.unique_file_name(Some("bike.jpg"));
        let second = service.unique_file_name(Some("bike.jpg"));

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_save_files_writes_bytes_in_order() {
        let service = test_service();
        service.ensure_upload_dir().await.unwrap();

        let files = vec![
            (Some("front.jpg".to_string()), b"front-bytes".to_vec()),
            (Some("back.png".to_string()), b"back-bytes".to_vec()),
        ];

        let paths = service.save_files(&files).await.unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with(".jpg"));
        assert!(paths[1].ends_with(".png"));
        assert_eq!(std::fs::read(&paths[0]).unwrap(), b"front-bytes");
        assert_eq!(std::fs::read(&paths[1]).unwrap(), b"back-bytes");

        std::fs::remove_dir_all(service.upload_dir()).ok();
    }

    #[tokio::test]
    async fn test_save_files_cleans_up_on_failure() {
        let service = test_service();
        // Directory deliberately not created, so the first write fails.

        let files = vec![(Some("front.jpg".to_string()), b"front-bytes".to_vec())];

        let result = service.save_files(&files).await;

        assert!(matches!(result, Err(UploadError::WriteFile { .. })));
        assert!(!service.upload_dir().exists());
    }
}
