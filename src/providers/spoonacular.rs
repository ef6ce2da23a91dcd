use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::memo::MemoCache;
use super::ProviderError;

pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// A recipe as the provider returns it. Every field beyond the id may be
/// missing; rendering substitutes placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    pub nutrition: Option<NutritionInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    /// Display form, e.g. "2 cups of flour".
    pub original: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionInfo {
    #[serde(default)]
    pub nutrients: Vec<NutrientAmount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientAmount {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug)]
pub struct SpoonacularClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    cache: MemoCache,
}

impl SpoonacularClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, SPOONACULAR_BASE_URL)
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

    /// One GET against `path` with `params` plus the API key. A 200 body
    /// parses to JSON; any other status or transport failure collapses to
    /// a `ProviderError`. The outcome, success or failure, is memoized for
    /// the lifetime of the client.
    pub async fn fetch_json(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ProviderError> {
        let key = MemoCache::key(path, params);
        if let Some(cached) = self.cache.get(&key) {
            log::debug!("memoized response for {}", path);
            return cached;
        }

        let result = self.request(path, params).await;
        self.cache.insert(key, result.clone());
        result
    }

    /// Full detail for one recipe, nutrition included.
    pub async fn recipe_information(&self, id: i64) -> Result<Value, ProviderError> {
        let path = format!("recipes/{}/information", id);
        self.fetch_json(&path, &[("includeNutrition", "true".to_string())])
            .await
    }

    async fn request(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {} with {} params", url, params.len());

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.api_key.as_str())])
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_json_returns_body_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/random"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": [{"id": 7}]})))
            .mount(&server)
            .await;

        let client = SpoonacularClient::with_base_url("test-key".to_string(), server.uri());
        let body = client.fetch_json("recipes/random", &[]).await.unwrap();
        assert_eq!(body["recipes"][0]["id"], 7);
    }

    #[tokio::test]
    async fn non_200_statuses_collapse_to_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/random"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = SpoonacularClient::with_base_url("test-key".to_string(), server.uri());
        let err = client.fetch_json("recipes/random", &[]).await.unwrap_err();
        assert_eq!(err, ProviderError::Status(404));
    }

    #[tokio::test]
    async fn transport_failures_collapse_to_transport_error() {
        // Grab a port that stops listening before the request goes out.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = SpoonacularClient::with_base_url("test-key".to_string(), uri);
        let err = client.fetch_json("recipes/random", &[]).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[tokio::test]
    async fn identical_requests_hit_upstream_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpoonacularClient::with_base_url("test-key".to_string(), server.uri());
        let params = [("number", "1".to_string())];
        let first = client.fetch_json("recipes/random", &params).await.unwrap();
        let second = client.fetch_json("recipes/random", &params).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn differing_params_hit_upstream_twice() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipes": []})))
            .expect(2)
            .mount(&server)
            .await;

        let client = SpoonacularClient::with_base_url("test-key".to_string(), server.uri());
        client
            .fetch_json("recipes/random", &[("number", "1".to_string())])
            .await
            .unwrap();
        client
            .fetch_json("recipes/random", &[("number", "2".to_string())])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failures_are_memoized_too() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/random"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpoonacularClient::with_base_url("test-key".to_string(), server.uri());
        let first = client.fetch_json("recipes/random", &[]).await.unwrap_err();
        let second = client.fetch_json("recipes/random", &[]).await.unwrap_err();
        assert_eq!(first, ProviderError::Status(503));
        assert_eq!(second, ProviderError::Status(503));
    }

    #[tokio::test]
    async fn recipe_information_targets_the_detail_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/716429/information"))
            .and(query_param("includeNutrition", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 716429, "title": "Pasta"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpoonacularClient::with_base_url("test-key".to_string(), server.uri());
        let body = client.recipe_information(716429).await.unwrap();
        assert_eq!(body["title"], "Pasta");
    }

    #[test]
    fn recipe_tolerates_missing_fields() {
        let recipe: Recipe = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(recipe.id, Some(1));
        assert!(recipe.title.is_none());
        assert!(recipe.extended_ingredients.is_empty());
        assert!(recipe.nutrition.is_none());

        let bare: Recipe = serde_json::from_value(json!({})).unwrap();
        assert!(bare.id.is_none());
    }
}
