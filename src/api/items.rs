use std::sync::Arc;

use poem_openapi::{payload::Json, ApiResponse, OpenApi, Tags};

use crate::errors::ItemsError;
use crate::services::UploadService;
use crate::stores::{ItemStore, NewItem};
use crate::types::dto::items::{ItemListBody, SubmitItemBody, SubmitItemPayload};

/// Item submission and listing API
pub struct ItemsApi {
    item_store: Arc<dyn ItemStore>,
    upload_service: Arc<UploadService>,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given store and upload service
    pub fn new(item_store: Arc<dyn ItemStore>, upload_service: Arc<UploadService>) -> Self {
        Self {
            item_store,
            upload_service,
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item listing endpoints
    Items,
}

/// Successful submission response
#[derive(ApiResponse)]
pub enum SubmitItemResponse {
    /// Item created and appended to the listing store
    #[oai(status = 201)]
    Created(Json<SubmitItemBody>),
}

#[OpenApi]
impl ItemsApi {
    /// Submit a new item with accompanying images
    ///
    /// Validation runs before anything touches the disk: a submission with
    /// no images or an unparseable price is rejected without writing any
    /// file or creating an item. Absent text fields are stored as empty
    /// strings.
    #[oai(path = "/submit", method = "post", tag = "ApiTags::Items")]
    async fn submit_item(
        &self,
        payload: SubmitItemPayload,
    ) -> Result<SubmitItemResponse, ItemsError> {
        if payload.images.is_empty() {
            return Err(ItemsError::missing_images());
        }

        let price = parse_price(payload.price.as_deref().unwrap_or_default())?;

        // Pull every upload into memory before writing, so a part that fails
        // to read cannot leave earlier files stranded on disk.
        let mut files = Vec::with_capacity(payload.images.len());
        for upload in payload.images {
            let original_name = upload.file_name().map(str::to_string);
            let data = upload.into_vec().await.map_err(|e| {
                tracing::error!("Failed to read uploaded image: {}", e);
                ItemsError::internal_server_error()
            })?;
            files.push((original_name, data));
        }

        let image_paths = self
            .upload_service
            .save_files(&files)
            .await
            .map_err(|e| ItemsError::from_internal_error(e.into()))?;

        let item = self.item_store.append(NewItem {
            item_name: payload.item_name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            category: payload.category.unwrap_or_default(),
            condition: payload.condition.unwrap_or_default(),
            price,
            image_paths,
        });

        tracing::info!(
            item_id = item.id,
            item_name = %item.item_name,
            images = item.image_paths.len(),
            "New item posted"
        );

        Ok(SubmitItemResponse::Created(Json(SubmitItemBody {
            success: true,
            message: "Item posted successfully!".to_string(),
            item,
        })))
    }

    /// List all posted items in submission order
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Json<ItemListBody> {
        Json(ItemListBody {
            success: true,
            items: self.item_store.list(),
        })
    }
}

/// Parse the price field, rejecting anything that is not a finite number
fn parse_price(raw: &str) -> Result<f64, ItemsError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ItemsError::invalid_price(raw)),
    }
}
