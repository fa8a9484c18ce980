//! Portfolio backend client
//!
//! Read-only HTTP access to the portfolio API. Each call is a single
//! attempt: no retry, no added timeout. Failures come back as `ApiError`
//! values for the caller to turn into a visible fallback state; nothing in
//! here panics on a bad backend.

use serde::Deserialize;

use crate::state::data::{BackgroundImage, Category, ImageRecord};
use crate::state::filter;

use super::ApiError;

/// Environment variable overriding the backend base URL
const BASE_URL_VAR: &str = "PORTFOLIO_API";

/// Backend default when no override is set
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

/// Path prefix under which processed assets are served
const ASSET_PREFIX: &str = "/assets";

#[derive(Debug, Clone, Deserialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
struct PortfolioResponse {
    images: Vec<ImageRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct BackgroundResponse {
    background: Option<BackgroundImage>,
}

/// Read-only client for the portfolio backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from `PORTFOLIO_API`, falling back to the local
    /// backend default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Full URL for a processed asset
    pub fn asset_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.base_url, ASSET_PREFIX, filename)
    }

    /// Categories that have at least one image assigned
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/api/categories", self.base_url);
        let response: CategoriesResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.categories)
    }

    /// Portfolio images, optionally constrained to one category key.
    /// The `"all"` key means no constraint and sends no query parameter.
    pub async fn portfolio(&self, category: &str) -> Result<Vec<ImageRecord>, ApiError> {
        let url = format!("{}/api/portfolio", self.base_url);
        let mut request = self.http.get(&url);
        if category != filter::ALL {
            request = request.query(&[("category", category)]);
        }
        let response: PortfolioResponse = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.images)
    }

    /// The active hero background, or `None` when the backend has none
    pub async fn background(&self) -> Result<Option<BackgroundImage>, ApiError> {
        let url = format!("{}/api/background", self.base_url);
        let response: BackgroundResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.background)
    }

    /// Raw bytes of a processed asset, for decoding into a widget handle
    pub async fn fetch_asset(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let bytes = self
            .http
            .get(self.asset_url(filename))
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn asset_url_joins_prefix_and_filename() {
        let client = ApiClient::new("http://gallery.test:5001/");
        assert_eq!(
            client.asset_url("a1b2.jpg"),
            "http://gallery.test:5001/assets/a1b2.jpg"
        );
    }

    #[test]
    fn categories_envelope_parses() {
        let body = r#"{"categories": [{"name": "Nature"}, {"name": "Portrait"}]}"#;
        let parsed: CategoriesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.categories.len(), 2);
        assert_eq!(parsed.categories[0].name, "Nature");
    }

    #[test]
    fn background_envelope_parses_null() {
        let body = r#"{"background": null}"#;
        let parsed: BackgroundResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.background, None);

        let body = r#"{"background": {"filename": "sunset.jpg"}}"#;
        let parsed: BackgroundResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.background.unwrap().filename, "sunset.jpg");
    }

    #[test]
    fn portfolio_envelope_parses() {
        let body = r#"{"images": [{
            "filename": "a.jpg",
            "original_filename": "orig_a.jpg",
            "title": "A",
            "description": null,
            "categories": []
        }]}"#;
        let parsed: PortfolioResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.images[0].display_title(), "A");
    }
}
