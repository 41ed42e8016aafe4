use crate::domain::{DirectoryError, DirectoryResult, DirectoryService, PlaceRecord, RegionRecord};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// HTTP client for the IBGE localidades API.
pub struct IbgeDirectory {
    client: Client,
    base_url: String,
}

impl IbgeDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> DirectoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn regions_url(&self) -> String {
        format!("{}/estados", self.base_url)
    }

    pub fn places_url(&self, region: &str) -> String {
        format!("{}/estados/{}/municipios", self.base_url, region)
    }

    fn get(&self, url: &str) -> DirectoryResult<String> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }
        response.text().map_err(|e| DirectoryError::Transport(e.to_string()))
    }
}

impl DirectoryService for IbgeDirectory {
    fn fetch_regions(&self) -> DirectoryResult<Vec<RegionRecord>> {
        decode_records(&self.get(&self.regions_url())?)
    }

    fn fetch_places(&self, region: &str) -> DirectoryResult<Vec<PlaceRecord>> {
        decode_records(&self.get(&self.places_url(region))?)
    }
}

/// Decodes a JSON array of directory records.
pub fn decode_records<T: DeserializeOwned>(body: &str) -> DirectoryResult<Vec<T>> {
    serde_json::from_str(body).map_err(|e| DirectoryError::Decode(e.to_string()))
}
