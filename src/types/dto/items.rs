use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

/// A posted marketplace listing
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct Item {
    /// 1-based position of the item in the store, assigned at insertion
    pub id: u64,

    /// Name of the item
    pub item_name: String,

    /// Free-text description
    pub description: String,

    /// Category label, e.g. "Sports"
    pub category: String,

    /// Condition label, e.g. "Used"
    pub condition: String,

    /// Asking price
    pub price: f64,

    /// Paths of the saved images, in upload order
    pub image_paths: Vec<String>,

    /// Timestamp when the item was posted (ISO 8601 format)
    pub posted_at: String,
}

/// Multipart form payload for posting a new item
///
/// Text fields are optional; an absent field is stored as an empty string,
/// never rejected. Only the price is parsed and validated by the handler.
#[derive(Multipart, Debug)]
pub struct SubmitItemPayload {
    /// Name of the item being listed
    #[oai(rename = "item-name")]
    pub item_name: Option<String>,

    /// Free-text description
    pub description: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Condition label
    pub condition: Option<String>,

    /// Asking price, must parse as a finite number
    pub price: Option<String>,

    /// Uploaded images
    pub images: Vec<Upload>,
}

/// Response body returned when an item is created
#[derive(Object, Debug)]
pub struct SubmitItemBody {
    pub success: bool,

    pub message: String,

    /// The created item, including its assigned id and image paths
    pub item: Item,
}

/// Response body for the listing endpoint
#[derive(Object, Debug)]
pub struct ItemListBody {
    pub success: bool,

    /// All posted items in submission order
    pub items: Vec<Item>,
}
