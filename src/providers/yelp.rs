use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::memo::MemoCache;
use super::ProviderError;

pub const YELP_BASE_URL: &str = "https://api.yelp.com/v3";

/// A business from the restaurant directory. All fields may be missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub name: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub location: BusinessLocation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessLocation {
    pub address1: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug)]
pub struct YelpClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    cache: MemoCache,
}

impl YelpClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, YELP_BASE_URL)
    }

    /// Same client against a different host, used by tests.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
            cache: MemoCache::new(),
        }
    }

    /// Up to five businesses near `location` matching the cuisine term.
    /// Any failure collapses to an empty list; the cause goes to the log.
    /// Memoized on (location, cuisine) for the lifetime of the client.
    pub async fn search(&self, location: &str, cuisine: &str) -> Vec<Business> {
        let params = [
            ("term", cuisine.to_string()),
            ("location", location.to_string()),
            ("limit", "5".to_string()),
        ];

        let key = MemoCache::key("businesses/search", &params);
        let result = match self.cache.get(&key) {
            Some(cached) => {
                log::debug!("memoized restaurants for {} in {}", cuisine, location);
                cached
            }
            None => {
                let fresh = self.request(&params).await;
                self.cache.insert(key, fresh.clone());
                fresh
            }
        };

        match result {
            Ok(body) => parse_businesses(&body),
            Err(err) => {
                log::warn!(
                    "restaurant search failed for {} in {}: {}",
                    cuisine,
                    location,
                    err
                );
                Vec::new()
            }
        }
    }

    async fn request(&self, params: &[(&str, String)]) -> Result<Value, ProviderError> {
        let url = format!("{}/businesses/search", self.base_url);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

fn parse_businesses(body: &Value) -> Vec<Business> {
    body.get("businesses")
        .and_then(|b| b.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
