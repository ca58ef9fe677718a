mod api;
mod app;
mod app_data;
mod config;
mod errors;
mod services;
mod stores;
mod types;

use poem::{listener::TcpListener, Server};

use app_data::AppData;
use config::{init_logging, BootstrapSettings};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let settings = match BootstrapSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = match AppData::init(settings).await {
        Ok(app_data) => app_data,
        Err(e) => {
            tracing::error!("Failed to initialize application data: {}", e);
            std::process::exit(1);
        }
    };

    let address = app_data.settings.server_address();
    let app = app::build_app(&app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await
}
