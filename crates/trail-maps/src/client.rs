//! HTTP plumbing shared by the Places and Routes calls.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use trail_engine::ProviderError;

use crate::config::MapsConfig;

/// Google Maps API client implementing the pipeline's place-search and
/// directions provider traits.
pub struct GoogleMapsClient {
    pub(crate) http: Client,
    pub(crate) config: MapsConfig,
}

impl GoogleMapsClient {
    pub fn new(config: MapsConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ProviderError::Upstream(format!("http client setup failed: {err}")))?;
        Ok(Self { http, config })
    }

    /// POST `body` with the API key and a field mask, decoding the JSON
    /// response. All Google Maps v1 endpoints share this shape.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        field_mask: &str,
        body: &serde_json::Value,
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .post(url)
            .header("X-Goog-Api-Key", &self.config.api_key)
            .header("X-Goog-FieldMask", field_mask)
            .json(body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &detail));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ProviderError::Upstream(format!("malformed response: {err}")))
    }
}

fn request_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Upstream(format!("request failed: {err}"))
    }
}

fn status_error(code: u16, detail: &str) -> ProviderError {
    let message = match code {
        429 => "API quota exceeded".to_string(),
        403 => "API key invalid or API not enabled".to_string(),
        _ => format!("API error {code}: {detail}"),
    };
    ProviderError::Upstream(message)
}
