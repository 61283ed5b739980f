use std::collections::HashMap;

use reqwest::{header, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, error, instrument, warn};

use crate::{
    client::Sanity,
    error::{ApiErrorResponse, ClientError, ResponseError},
};

/// A GET request against the query API. The surface is read-only, so no
/// other methods exist.
pub struct HttpRequest {
    path: String,
    query_params: Vec<(String, String)>,
    custom_headers: HashMap<String, String>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query_params: Vec::new(),
            custom_headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.query_params.push((key.into(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(key.into(), value.into());
        self
    }

    fn url(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }
        let params: Vec<String> = self
            .query_params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.path, params.join("&"))
    }
}

/// Response envelope of the query endpoint. `result` is `null` when a
/// single-document query matches nothing; that is an absent document, not
/// an error.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryEnvelope<T> {
    pub result: Option<T>,
}

// Extension trait giving the client typed request execution.
#[async_trait::async_trait]
pub trait HttpClient {
    async fn request<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ClientError>;
    async fn request_json(&self, req: HttpRequest) -> Result<serde_json::Value, ClientError>;
}

#[async_trait::async_trait]
impl HttpClient for Sanity {
    async fn request<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ClientError> {
        let res = self.execute_single_request(req).await?;
        Ok(res.json::<T>().await?)
    }

    async fn request_json(&self, req: HttpRequest) -> Result<serde_json::Value, ClientError> {
        let res = self.execute_single_request(req).await?;
        Ok(res.json::<serde_json::Value>().await?)
    }
}

impl Sanity {
    /// Runs a GROQ query, wiring `params` through as `$name` values, and
    /// unwraps the response envelope. Parameter values are JSON-encoded
    /// strings on the wire.
    #[instrument(skip(self, groq))]
    pub(crate) async fn run_query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ClientError> {
        let mut req = HttpRequest::get(self.query_endpoint()).query("query", groq);
        for (name, value) in params {
            req = req.query(format!("${name}"), serde_json::to_string(value)?);
        }
        let envelope: QueryEnvelope<T> = self.request(req).await?;
        Ok(envelope.result)
    }

    // One attempt per request. A fetch failure propagates to the caller;
    // the surrounding request lifecycle owns any recovery.
    async fn execute_single_request(&self, req: HttpRequest) -> Result<Response, ClientError> {
        let url = req.url();
        debug!("Built request URL: {}", url);

        let mut request_builder = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, mime::APPLICATION_JSON.to_string());

        if let Some(token) = &self.token {
            request_builder =
                request_builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        for (key, value) in &req.custom_headers {
            request_builder = request_builder.header(key, value);
        }

        let res = request_builder.send().await.map_err(|e| {
            warn!("Network error occurred: {}", e);
            ClientError::RequestError(e)
        })?;

        if let Err(err) = res.error_for_status_ref() {
            let Some(status) = err.status() else {
                error!("HTTP error without status code: {}", err);
                return Err(ResponseError::invalid(err.to_string()).into());
            };

            if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                warn!("Query rejected with {}", status.as_u16());
                return Err(ClientError::Unauthorized);
            }

            error!(
                "Received HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );

            let body_text = res.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&body_text) {
                error!("API error response: {}", error_response);
                return Err(ClientError::ApiError(error_response));
            }

            return Err(ResponseError::http_status(status, body_text).into());
        }

        debug!("HTTP request completed with status: {}", res.status());

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_query_params() {
        let req = HttpRequest::get("https://example.test/data/query/production")
            .query("query", r#"*[_type == "news"]"#)
            .query("$slug", r#""a b""#);
        let url = req.url();
        assert!(url.starts_with("https://example.test/data/query/production?query="));
        assert!(url.contains("%3D%3D")); // "=="
        assert!(url.contains("%24slug=")); // "$slug"
        assert!(!url.contains(' '));
    }

    #[test]
    fn envelope_null_result_is_absent() {
        let envelope: QueryEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"query": "...", "result": null, "ms": 3}"#).unwrap();
        assert!(envelope.result.is_none());

        let envelope: QueryEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"result": [1, 2], "ms": 3}"#).unwrap();
        assert_eq!(envelope.result, Some(vec![1, 2]));
    }
}
