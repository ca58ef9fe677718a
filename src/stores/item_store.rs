use std::sync::RwLock;

use chrono::Utc;

use crate::types::dto::items::Item;

/// Fields of a submission before the store assigns id and posting time
#[derive(Debug)]
pub struct NewItem {
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub price: f64,
    pub image_paths: Vec<String>,
}

/// Append-only listing store
///
/// Kept deliberately small (append and list) so a durable implementation can
/// replace the in-memory one without changing the handlers.
pub trait ItemStore: Send + Sync {
    /// Append a new item, assigning the next 1-based id and the posting time
    fn append(&self, draft: NewItem) -> Item;

    /// Snapshot of all items in insertion order
    fn list(&self) -> Vec<Item>;
}

/// In-memory ItemStore; contents live only for the process lifetime
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for MemoryItemStore {
    fn append(&self, draft: NewItem) -> Item {
        // Id assignment and push share one critical section so concurrent
        // submissions never observe the same length.
        let mut items = self.items.write().unwrap();

        let item = Item {
            id: items.len() as u64 + 1,
            item_name: draft.item_name,
            description: draft.description,
            category: draft.category,
            condition: draft.condition,
            price: draft.price,
            image_paths: draft.image_paths,
            posted_at: Utc::now().to_rfc3339(),
        };

        items.push(item.clone());
        item
    }

    fn list(&self) -> Vec<Item> {
        self.items.read().unwrap().clone()
    }
}
