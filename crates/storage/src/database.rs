use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Result, StorageError};
use crate::query::RestQuery;

const PREFER_REPRESENTATION: &str = "return=representation";
const PREFER_MERGE: &str = "resolution=merge-duplicates,return=representation";

/// Handle on the REST data store.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
/// Every request is authenticated with the key this handle was built with, so
/// the application keeps one handle per role (anon and service).
#[derive(Debug, Clone)]
pub struct Database {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Database {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fairway-pool/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(http, base_url, api_key))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// GET rows matching the query.
    pub async fn fetch<T: DeserializeOwned>(&self, query: &RestQuery) -> Result<Vec<T>> {
        let body = self.execute(self.request(Method::GET, query)).await?;
        decode_rows(&body)
    }

    /// GET the first row matching the query, if any.
    pub async fn fetch_optional<T: DeserializeOwned>(&self, query: &RestQuery) -> Result<Option<T>> {
        let rows = self.fetch(&query.clone().limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    /// GET exactly one row or fail with [`StorageError::NotFound`].
    pub async fn fetch_one<T: DeserializeOwned>(&self, query: &RestQuery) -> Result<T> {
        self.fetch_optional(query)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn insert<B, T>(&self, query: &RestQuery, body: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, query)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(body);

        decode_rows(&self.execute(request).await?)
    }

    /// POST with merge-duplicates resolution. The query must declare
    /// `on_conflict` for the store to know which constraint to merge on.
    pub async fn upsert<B, T>(&self, query: &RestQuery, body: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, query)
            .header("Prefer", PREFER_MERGE)
            .json(body);

        decode_rows(&self.execute(request).await?)
    }

    pub async fn update<B, T>(&self, query: &RestQuery, body: &B) -> Result<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::PATCH, query)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(body);

        decode_rows(&self.execute(request).await?)
    }

    /// DELETE rows matching the query and return how many were removed.
    pub async fn delete(&self, query: &RestQuery) -> Result<usize> {
        let request = self
            .request(Method::DELETE, query)
            .header("Prefer", PREFER_REPRESENTATION);

        let removed: Vec<serde_json::Value> = decode_rows(&self.execute(request).await?)?;
        Ok(removed.len())
    }

    fn request(&self, method: Method, query: &RestQuery) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, query.table_name());

        self.http
            .request(method, url)
            .query(&query.params())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        tracing::warn!(status = status.as_u16(), "Data store request failed");
        Err(StorageError::from_upstream(status.as_u16(), body))
    }
}

fn decode_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(body)?)
}
