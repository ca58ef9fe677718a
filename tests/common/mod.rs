// Common test utilities for integration tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use poem::Endpoint;
use rand::Rng;

use fleamarket_backend::app::build_app;
use fleamarket_backend::app_data::AppData;
use fleamarket_backend::config::{BootstrapSettings, EnvironmentProvider};

pub const TEST_BOUNDARY: &str = "fleamarket-test-boundary";

/// Environment provider backed by a fixed map, so tests never touch the
/// process environment
struct TestEnvironment {
    vars: HashMap<String, String>,
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Build the full application against a fresh temporary upload directory
///
/// Returns the app endpoint plus the upload directory so tests can inspect
/// saved files and clean up afterwards.
pub async fn setup_test_app() -> (impl Endpoint, PathBuf) {
    let random: u64 = rand::rng().random();
    let upload_dir = std::env::temp_dir().join(format!("fleamarket-test-{}", random));

    let vars = HashMap::from([
        ("HOST".to_string(), "127.0.0.1".to_string()),
        ("PORT".to_string(), "3000".to_string()),
        (
            "UPLOAD_DIR".to_string(),
            upload_dir.to_string_lossy().into_owned(),
        ),
    ]);

    let settings = BootstrapSettings::from_env_provider(Arc::new(TestEnvironment { vars }))
        .expect("Failed to load test settings");

    let app_data = AppData::init(settings)
        .await
        .expect("Failed to initialize test app data");

    (build_app(&app_data), upload_dir)
}

/// Standard text fields for a bike listing
pub fn bike_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("item-name", "Bike"),
        ("description", "A used mountain bike"),
        ("category", "Sports"),
        ("condition", "Used"),
        ("price", "150.5"),
    ]
}

/// Content type header value for bodies built with `multipart_body`
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", TEST_BOUNDARY)
}

/// Hand-build a multipart/form-data body with the given text fields and
/// image files (all files go under the `images` field)
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                TEST_BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    for (filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                TEST_BOUNDARY, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());
    body
}

/// Best-effort removal of a test upload directory
pub fn cleanup_upload_dir(upload_dir: &Path) {
    std::fs::remove_dir_all(upload_dir).ok();
}
