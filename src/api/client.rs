//! HTTP client for the state/city directory and the brewery directory.
//!
//! Request construction is split from sending so URLs and headers can be
//! checked without touching the network.

use crate::api::error::ApiError;
use crate::api::model::{filter_states, Brewery, CityOption, StateOption, StateRecord};
use crate::config::ApiConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Header carrying the state/city provider key.
pub const API_KEY_HEADER: &str = "X-CSCAPI-KEY";

pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub fn states_request(&self) -> Result<RequestBuilder, ApiError> {
        let url = join_segments(
            &self.config.state_city_base_url,
            &["countries", &self.config.country_code, "states"],
        )?;
        self.with_api_key(self.http.get(url))
    }

    pub fn cities_request(&self, iso_code: &str) -> Result<RequestBuilder, ApiError> {
        let url = join_segments(
            &self.config.state_city_base_url,
            &["countries", &self.config.country_code, "states", iso_code, "cities"],
        )?;
        self.with_api_key(self.http.get(url))
    }

    /// The city name is percent-encoded into the `by_city` query parameter.
    pub fn breweries_request(&self, city: &str) -> Result<RequestBuilder, ApiError> {
        let url = join_segments(&self.config.brewery_base_url, &["breweries"])?;
        Ok(self.http.get(url).query(&[("by_city", city)]))
    }

    pub async fn fetch_states(&self) -> Result<Vec<StateOption>, ApiError> {
        let records: Vec<StateRecord> = send_json(self.states_request()?).await?;
        Ok(filter_states(records))
    }

    pub async fn fetch_cities(&self, iso_code: &str) -> Result<Vec<CityOption>, ApiError> {
        send_json(self.cities_request(iso_code)?).await
    }

    pub async fn fetch_breweries(&self, city: &str) -> Result<Vec<Brewery>, ApiError> {
        send_json(self.breweries_request(city)?).await
    }

    fn with_api_key(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self.config.api_key.as_deref() {
            Some(key) => {
                let mut value = HeaderValue::from_str(key)?;
                value.set_sensitive(true);
                Ok(request.header(API_KEY_HEADER, value))
            }
            None => Ok(request),
        }
    }
}

/// Any non-2xx status is an error; the body is only decoded on success.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?.error_for_status()?;
    Ok(response.json::<T>().await?)
}

fn join_segments(base: &str, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = Url::parse(base)
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base, e)))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base URL", base)))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}
