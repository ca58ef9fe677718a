use super::api::items::ItemsError;
use super::internal::{InternalError, UploadError};

#[test]
fn test_missing_images_error() {
    let err = ItemsError::missing_images();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message(), "Please upload at least one image.");
}

#[test]
fn test_invalid_price_error() {
    let err = ItemsError::invalid_price("abc");

    assert_eq!(err.status_code(), 400);
    assert!(err.message().contains("'abc'"));
}

#[test]
fn test_internal_error_hides_details() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "secret detail");
    let internal = InternalError::Upload(UploadError::WriteFile {
        path: "/var/uploads/x.jpg".into(),
        source: io_err,
    });

    let err = ItemsError::from_internal_error(internal);

    assert_eq!(err.status_code(), 500);
    assert_eq!(err.message(), "An internal error occurred");
    assert!(!err.message().contains("secret detail"));
}

#[test]
fn test_display_uses_message() {
    let err = ItemsError::missing_images();

    assert_eq!(format!("{}", err), "Please upload at least one image.");
}
