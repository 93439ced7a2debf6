//! HTTP client for the node management API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::types::{RenterContracts, RenterFiles, RenterInfo, WalletInfo};
use crate::error::{MonitorError, Result};

/// The user agent the node API requires on every request.
const USER_AGENT: &str = "Sia-Agent";

/// The four query operations the snapshot builder needs from a node.
///
/// Implemented by [`SiaClient`] for real nodes; tests supply stub
/// implementations to exercise the builder without a network.
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Fetch the renter's active and inactive contracts.
    async fn renter_contracts(&self) -> Result<RenterContracts>;

    /// Fetch the renter's file list.
    async fn renter_files(&self) -> Result<RenterFiles>;

    /// Fetch wallet balances.
    async fn wallet(&self) -> Result<WalletInfo>;

    /// Fetch renter settings and financial metrics.
    async fn renter(&self) -> Result<RenterInfo>;
}

/// HTTP implementation of [`NodeClient`] against a node's local API.
///
/// Every request carries the `Sia-Agent` user agent and a bounded timeout;
/// a hung node surfaces as a query error instead of stalling the poll loop
/// forever.
#[derive(Debug, Clone)]
pub struct SiaClient {
    http_client: Client,
    base_url: String,
}

impl SiaClient {
    /// Creates a client for the API listening at `host:port`, with the
    /// default request timeout.
    ///
    /// # Errors
    /// Returns `MonitorError::Config` if the HTTP client cannot be built.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        Self::with_timeout(
            host,
            port,
            Duration::from_secs(crate::DEFAULT_API_TIMEOUT_SECS),
        )
    }

    /// Creates a client with a custom per-request timeout.
    pub fn with_timeout(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::config_error(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: format!("http://{}:{}", host.trim_end_matches('/'), port),
        })
    }

    /// Creates a client for an already-formed base URL (used by tests).
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MonitorError::config_error(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Performs a GET request and decodes the JSON body.
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(MonitorError::api_error(format!(
                "{} returned {}: {}",
                path, status, body
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl NodeClient for SiaClient {
    async fn renter_contracts(&self) -> Result<RenterContracts> {
        self.get("/renter/contracts").await
    }

    async fn renter_files(&self) -> Result<RenterFiles> {
        self.get("/renter/files").await
    }

    async fn wallet(&self) -> Result<WalletInfo> {
        self.get("/wallet").await
    }

    async fn renter(&self) -> Result<RenterInfo> {
        self.get("/renter").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn wallet_query_sends_sia_agent_and_decodes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/wallet"))
            .and(header("user-agent", "Sia-Agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "confirmedsiacoinbalance": "75",
                "unconfirmedoutgoingsiacoins": 26,
                "unconfirmedincomingsiacoins": 83
            })))
            .mount(&mock_server)
            .await;

        let client = SiaClient::from_base_url(mock_server.uri()).unwrap();
        let wallet = client.wallet().await.unwrap();
        assert_eq!(wallet.confirmed_siacoin_balance, 75);
        assert_eq!(wallet.unconfirmed_outgoing_siacoins, 26);
        assert_eq!(wallet.unconfirmed_incoming_siacoins, 83);
    }

    #[tokio::test]
    async fn http_error_status_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/renter"))
            .respond_with(ResponseTemplate::new(500).set_body_string("renter module disabled"))
            .mount(&mock_server)
            .await;

        let client = SiaClient::from_base_url(mock_server.uri()).unwrap();
        let result = client.renter().await;
        assert!(matches!(result, Err(MonitorError::Api(_))));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_parse_error() {
        let mock_server = MockServer::start().await;

        // Missing the inactivecontracts key entirely.
        Mock::given(method("GET"))
            .and(path("/renter/contracts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "activecontracts": [] })),
            )
            .mount(&mock_server)
            .await;

        let client = SiaClient::from_base_url(mock_server.uri()).unwrap();
        let result = client.renter_contracts().await;
        assert!(matches!(result, Err(MonitorError::Parse(_))));
    }

    #[tokio::test]
    async fn unreachable_node_maps_to_api_error() {
        // Port 9 (discard) is closed in practice; connection is refused fast.
        let client = SiaClient::from_base_url("http://127.0.0.1:9").unwrap();
        let result = client.wallet().await;
        assert!(matches!(result, Err(MonitorError::Api(_))));
    }
}
