use thiserror::Error;

pub mod upload;

pub use upload::UploadError;

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints must convert to ItemsError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Upload(#[from] UploadError),
}
