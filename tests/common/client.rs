//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per catalog endpoint.
//! When API routes change, update only this file.
#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    pub async fn list_files(&self) -> Response {
        self.get("/v1/files").await
    }

    /// Lists files filtered by free-text query and/or category
    pub async fn search_files(&self, query: Option<&str>, category: Option<&str>) -> Response {
        let mut params: Vec<(&str, &str)> = vec![];
        if let Some(query) = query {
            params.push(("q", query));
        }
        if let Some(category) = category {
            params.push(("category", category));
        }
        self.client
            .get(format!("{}/v1/files", self.base_url))
            .query(&params)
            .send()
            .await
            .expect("Search request failed")
    }

    pub async fn get_file(&self, id: &str) -> Response {
        self.get(&format!("/v1/files/{}", id)).await
    }

    pub async fn get_related_files(&self, id: &str) -> Response {
        self.get(&format!("/v1/files/{}/related", id)).await
    }

    pub async fn get_resolved_file(&self, id: &str) -> Response {
        self.get(&format!("/v1/files/{}/resolved", id)).await
    }

    pub async fn get_categories(&self) -> Response {
        self.get("/v1/categories").await
    }
}
