use crate::cli::commands::ServeArgs;
use crate::config;
use crate::errors::GitGradeError;
use crate::api;
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub async fn handle_serve(args: ServeArgs) -> Result<(), GitGradeError> {
    let server = match &args.model.config {
        Some(path) => config::parse_config(Path::new(path)).await?.server.unwrap_or_default(),
        None => Default::default(),
    };
    let host = args.host.clone().or(server.host).unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port.or(server.port).unwrap_or(DEFAULT_PORT);
    info!(host = %host, port = port, "Starting API server");

    let settings = args.model.load_settings().await?;
    if settings.llm.api_key.is_none() {
        warn!(provider = %settings.llm.provider, "No server-side API key; requests must carry api_key");
    }
    if std::env::var(api::auth::API_TOKEN_ENV).map(|t| t.is_empty()).unwrap_or(true) {
        warn!("{} is not set; the API is unauthenticated", api::auth::API_TOKEN_ENV);
    }

    let app = api::build_router(api::AppState::new(settings));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| GitGradeError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
