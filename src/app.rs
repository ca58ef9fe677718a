use poem::endpoint::StaticFilesEndpoint;
use poem::middleware::Cors;
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::api::{HealthApi, ItemsApi};
use crate::app_data::AppData;

/// Assemble the HTTP surface
///
/// The OpenAPI endpoints sit at the root, uploaded files are served
/// statically under /uploads, and Swagger UI under /swagger. Cross-origin
/// requests are allowed from any origin.
pub fn build_app(app_data: &AppData) -> impl Endpoint {
    let items_api = ItemsApi::new(
        app_data.item_store.clone(),
        app_data.upload_service.clone(),
    );

    let api_service = OpenApiService::new(
        (HealthApi, items_api),
        "Fleamarket API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", app_data.settings.server_address()));

    let ui = api_service.swagger_ui();

    Route::new()
        .nest(
            "/uploads",
            StaticFilesEndpoint::new(app_data.settings.upload_dir()),
        )
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(Cors::new())
}
