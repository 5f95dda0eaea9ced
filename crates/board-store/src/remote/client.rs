//! Thin HTTP client for the remote table API.
//!
//! Every call names its operation ("select issues", "delete sprints", ...)
//! and any transport or non-2xx failure comes back as a `Backend` error
//! with that operation as the prefix. Nothing is retried here.

use crate::error::{Result, StoreError};

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct TableClient {
    base_url: String,
    service_key: String,
    client: ReqwestClient,
}

impl TableClient {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request against one table, with PostgREST-style filters
    /// ("id" -> "eq.ARBO-1") passed as query parameters.
    fn request(&self, method: Method, table: &str, query: &[(&str, String)]) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.client
            .request(method, &url)
            .query(query)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// Execute a request and map transport/status failures to Backend errors
    async fn execute(&self, op: &str, req: RequestBuilder) -> Result<Response> {
        let response = req
            .send()
            .await
            .map_err(|e| StoreError::backend(op, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::backend(op, format!("{status}: {body}")));
        }

        Ok(response)
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let op = format!("select {table}");

        let mut query: Vec<(&str, String)> = vec![("select", columns.to_string())];
        query.extend_from_slice(filters);

        let req = self.request(Method::GET, table, &query);
        let response = self.execute(&op, req).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::backend(&op, e.to_string()))
    }

    pub async fn insert<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<()> {
        let op = format!("insert {table}");

        let req = self
            .request(Method::POST, table, &[])
            .header("Prefer", "return=minimal")
            .json(&rows);
        self.execute(&op, req).await?;
        Ok(())
    }

    /// Idempotent insert: rows whose primary key already exists are skipped.
    pub async fn insert_or_skip<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<()> {
        let op = format!("seed {table}");

        let req = self
            .request(Method::POST, table, &[])
            .header("Prefer", "resolution=ignore-duplicates,return=minimal")
            .json(&rows);
        self.execute(&op, req).await?;
        Ok(())
    }

    /// Patch matching rows and return the updated representations.
    pub async fn update<P: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
        changes: &P,
    ) -> Result<Vec<R>> {
        let op = format!("update {table}");

        let req = self
            .request(Method::PATCH, table, filters)
            .header("Prefer", "return=representation")
            .json(changes);
        let response = self.execute(&op, req).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::backend(&op, e.to_string()))
    }

    pub async fn delete(&self, table: &str, filters: &[(&str, String)]) -> Result<()> {
        let op = format!("delete {table}");

        let req = self
            .request(Method::DELETE, table, filters)
            .header("Prefer", "return=minimal");
        self.execute(&op, req).await?;
        Ok(())
    }
}
