//! HTTP server for the form page
//!
//! `GET /` renders the page for the submitted query string, `GET /health`
//! answers `ok`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use skincare_core::{Config, ServerConfig};
use skincare_remedies::RemedyCatalog;
use skincare_weather::{ProviderOptions, WeatherProvider};
use tokio::net::TcpListener;

use crate::error::AppError;
use crate::form::{FormInput, FormQuery};
use crate::page::render_cycle;
use crate::render::render_page;
use crate::theme::PageStyle;

/// Read-only state shared by all requests
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherProvider>,
    pub catalog: Arc<RemedyCatalog>,
    pub style: Arc<PageStyle>,
    pub title: Arc<str>,
}

impl AppState {
    /// Build the shared state: load the catalog, create the weather client
    /// and resolve the page style.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let catalog = match &config.remedies.catalog_path {
            Some(path) => RemedyCatalog::from_path(path),
            None => RemedyCatalog::embedded(),
        }?;
        tracing::info!(
            "Remedy catalog v{} with {} concerns",
            catalog.version(),
            catalog.len()
        );

        let options = ProviderOptions {
            api_url: config.weather.api_url.clone(),
            api_key: config.weather.api_key.clone(),
            units: config.weather.units.clone(),
            timeout: config.weather.timeout_secs.map(Duration::from_secs),
        };
        let weather = WeatherProvider::new(options)?;
        if !weather.has_api_key() {
            tracing::warn!("No weather API key configured; season lookups will fail");
        }

        Ok(Self {
            weather: Arc::new(weather),
            catalog: Arc::new(catalog),
            style: Arc::new(PageStyle::load(&config.page)),
            title: Arc::from(config.page.title.as_str()),
        })
    }
}

/// GET / - Render the page
async fn index(State(state): State<AppState>, Query(query): Query<FormQuery>) -> Html<String> {
    let page = render_cycle(&state, FormInput::from(query)).await;
    Html(render_page(&state.title, &state.style, &page))
}

/// GET /health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serve on an already bound listener until Ctrl-C
pub async fn serve_on(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
            }
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured address and serve
pub async fn run_server(server: &ServerConfig, state: AppState) -> Result<(), AppError> {
    let addr = server.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    serve_on(listener, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        let mut config = Config::default();
        config.weather.api_key = Some(key.to_string());
        config.page.asset_dir = std::env::temp_dir();
        config.page.background_stem = "skincare-test-no-such-image".to_string();
        config
    }

    #[test]
    fn test_key_check_matches_config_validation() {
        for key in ["YOUR_OPENWEATHER_KEY", "   ", "abc123"] {
            let config = config_with_key(key);
            let state = AppState::from_config(&config).unwrap();
            assert_eq!(state.weather.has_api_key(), config.weather.has_api_key(), "{}", key);
        }
    }

    #[tokio::test]
    async fn test_run_server_reports_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            port: taken.local_addr().unwrap().port(),
        };
        let state = AppState::from_config(&config_with_key("abc123")).unwrap();

        let err = run_server(&server, state).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
