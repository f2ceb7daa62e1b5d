//! ==============================================================================
//! api.rs - API client for the link admin backend
//! ==============================================================================
//!
//! responses are read as text and handed to `shared::response` so error
//! bodies reach the user unchanged. no retries, no timeouts.

use gloo_net::http::{Request, Response};
use shared::config::DashboardConfig;
use shared::response::decode_response;
use shared::shorten::FORM_CONTENT_TYPE;
use shared::{ApiError, MappingPage, ShortenForm, ShortenResult};

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

/// Fetch one page of mappings
pub async fn fetch_mappings(
    config: &DashboardConfig,
    page: u32,
    page_size: u32,
) -> Result<MappingPage, ApiError> {
    let response = Request::get(&config.mappings_url(page, page_size))
        .send()
        .await
        .map_err(network)?;

    let (status, body) = read_body(response).await?;
    decode_response(status, &body)
}

/// Submit a URL to the shorten endpoint
pub async fn shorten_url(config: &DashboardConfig, url: &str) -> Result<ShortenResult, ApiError> {
    let response = Request::post(&config.shorten_url())
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(ShortenForm::new(url).encode())
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    let (status, body) = read_body(response).await?;
    decode_response(status, &body)
}
