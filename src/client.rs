use std::time::Duration;

use bon::Builder;
use tracing::debug;

use crate::{error::ClientError, paths};

fn default_http_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .https_only(true)
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}

/// Read-only client for one project/dataset on the hosted content platform.
///
/// Cheap to clone; the underlying HTTP client is shared. Queries always go
/// to the live API host so every page render sees the current dataset state.
#[derive(Clone, Builder)]
pub struct Sanity {
    #[builder(into)]
    pub(crate) project_id: String,
    #[builder(into)]
    pub(crate) dataset: String,
    #[builder(into, default = paths::DEFAULT_API_VERSION.to_string())]
    pub(crate) api_version: String,
    /// Bearer token; only needed for private datasets.
    #[builder(into)]
    pub(crate) token: Option<String>,
    #[builder(default = default_http_client())]
    pub(crate) http_client: reqwest::Client,
}

impl Sanity {
    pub fn from_env() -> Result<Self, ClientError> {
        let project_id = std::env::var("SANITY_PROJECT_ID").map_err(|_| {
            ClientError::MissingConfig("SANITY_PROJECT_ID environment variable not set".to_string())
        })?;
        let dataset = std::env::var("SANITY_DATASET").map_err(|_| {
            ClientError::MissingConfig("SANITY_DATASET environment variable not set".to_string())
        })?;
        let api_version = std::env::var("SANITY_API_VERSION")
            .unwrap_or_else(|_| paths::DEFAULT_API_VERSION.to_string());

        let client = Self::builder()
            .project_id(project_id)
            .dataset(dataset)
            .api_version(api_version)
            .maybe_token(std::env::var("SANITY_API_TOKEN").ok())
            .build();

        debug!(
            project_id = %client.project_id,
            dataset = %client.dataset,
            "Configured content client from environment"
        );

        Ok(client)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Query endpoint for this project/dataset.
    pub(crate) fn query_endpoint(&self) -> String {
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.project_id,
            paths::API_HOST,
            self.api_version,
            self.dataset
        )
    }
}
