// Services layer - Business logic and orchestration
pub mod upload_service;

pub use upload_service::UploadService;
