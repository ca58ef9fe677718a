use std::sync::Arc;

use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::services::UploadService;
use crate::stores::{ItemStore, MemoryItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across the API
/// endpoints, so no handler reaches for process-global state.
pub struct AppData {
    pub settings: BootstrapSettings,
    pub item_store: Arc<dyn ItemStore>,
    pub upload_service: Arc<UploadService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Creates the upload directory if it does not already exist, so the
    /// first submission never races directory creation.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the upload directory cannot be created
    pub async fn init(settings: BootstrapSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let upload_service = Arc::new(UploadService::new(settings.upload_dir()));
        upload_service.ensure_upload_dir().await?;
        tracing::debug!("Upload directory ready at {:?}", settings.upload_dir());

        let item_store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
        tracing::debug!("Stores created");

        Ok(Self {
            settings,
            item_store,
            upload_service,
        })
    }
}
