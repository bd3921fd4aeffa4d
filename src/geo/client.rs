use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Url, header::ACCEPT};
use tracing::{debug, info, warn};

use super::error::GeoError;
use super::types::{GeoPayload, LocationResult};

/// Providers tried in order when no configuration overrides them.
pub const DEFAULT_PROVIDERS: &[&str] = &["https://ipapi.co/json/", "https://ipwho.is/"];

/// Resolves an approximate location from an ordered list of IP geolocation
/// providers. The first provider that yields a city or a country wins.
#[derive(Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    providers: Vec<Url>,
}

impl GeoClient {
    pub fn new(providers: Vec<Url>, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            bail!("Location lookup timeout must be greater than zero");
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http, providers })
    }

    /// Query a single provider.
    pub async fn lookup(&self, provider: &Url) -> Result<GeoPayload, GeoError> {
        let resp = self
            .http
            .get(provider.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeoError::Status(status));
        }

        let body = resp.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        if !value.is_object() {
            return Err(GeoError::Malformed("expected a JSON object".into()));
        }

        let payload: GeoPayload = serde_json::from_value(value)?;
        if payload.is_empty() {
            return Err(GeoError::Malformed("no city or country".into()));
        }
        Ok(payload)
    }

    /// Walk the provider list front to back. Never fails: an exhausted list
    /// yields [`LocationResult::Unknown`].
    pub async fn resolve(&self) -> LocationResult {
        for provider in &self.providers {
            match self.lookup(provider).await {
                Ok(payload) => {
                    let location = payload.to_location();
                    info!(%provider, %location, "resolved location");
                    return location;
                }
                Err(e) => warn!(%provider, error = %e, "location lookup failed"),
            }
        }
        debug!(providers = self.providers.len(), "no provider resolved a location");
        LocationResult::Unknown
    }
}
