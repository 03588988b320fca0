//! Portal API client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::models::{CreateOrganizationOpts, GenerateLinkOpts, ListOrganizationsOpts, Organization};
use super::{ListOrganizationsResponse, PortalApi};
use crate::config::{ClientConfig, DEFAULT_TIMEOUT, USER_AGENT};
use crate::error::{ApiError, ConfigError, Result};

/// Organizations collection path
const ORGANIZATIONS_PATH: &str = "/organizations";

/// Portal link generation path
const GENERATE_LINK_PATH: &str = "/portal/generate_link";

/// Admin Portal API client.
///
/// Holds static configuration and a `reqwest` client; no mutable state, so
/// one instance can serve concurrent callers. Construct with [`new`] for a
/// stock transport or [`with_http_client`] to inject one.
///
/// [`new`]: PortalClient::new
/// [`with_http_client`]: PortalClient::with_http_client
pub struct PortalClient {
    http: HttpClient,
    config: ClientConfig,
}

impl PortalClient {
    /// Create a client with a stock HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Create a client around an externally built HTTP transport.
    ///
    /// Use this to supply custom TLS, proxy, or pooling settings; the
    /// transport's own timeout applies instead of `config.timeout`.
    pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Self {
        Self { http, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint_or_default(), path)
    }

    /// API key for the Authorization header, required before any request
    /// leaves the client.
    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingApiKey.into())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let api_key = self.api_key()?;
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request, api_key, path).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let api_key = self.api_key()?;
        let request = self.http.post(self.url(path)).json(body);
        self.send(request, api_key, path).await
    }

    /// Attach auth headers, dispatch, and decode the response.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        api_key: &str,
        path: &str,
    ) -> Result<T> {
        log::debug!("request: {}", path);

        let response = request
            .header("Authorization", format!("Bearer {}", api_key))
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("{} returned {}", path, status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ApiError::Response { status, message }.into());
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(data)
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn list_organizations(
        &self,
        opts: &ListOrganizationsOpts,
    ) -> Result<ListOrganizationsResponse> {
        self.get(ORGANIZATIONS_PATH, &opts.to_query_params()).await
    }

    async fn create_organization(&self, opts: &CreateOrganizationOpts) -> Result<Organization> {
        self.post(ORGANIZATIONS_PATH, opts).await
    }

    async fn generate_link(&self, opts: &GenerateLinkOpts) -> Result<String> {
        #[derive(Deserialize)]
        struct GenerateLinkResponse {
            link: String,
        }

        let response: GenerateLinkResponse = self.post(GENERATE_LINK_PATH, opts).await?;
        Ok(response.link)
    }
}
