use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{ApiHost, ClientConfig};
use crate::domain::{
    filter_available_coefficients, filter_warehouses_by_name, AcceptanceCoefficient, Pagination,
    SuppliesPage, Supply, SupplyId, Warehouse, WarehouseIds,
};
use crate::error::ApiError;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient};

const SUPPLIES_PATH: &str = "/v3/supplies";
const WAREHOUSES_PATH: &str = "/v1/warehouses";
const COEFFICIENTS_PATH: &str = "/v1/acceptance/coefficients";

/// Client for the supplies, warehouses and acceptance coefficient endpoints.
///
/// Each call performs exactly one GET round trip. Failures come back as
/// [`ApiError`] and are logged once at `warn` level.
#[derive(Clone)]
pub struct MarketplaceClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl MarketplaceClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Lists supplies starting at `cursor` (0 for the first page).
    pub async fn fetch_supplies(&self, limit: u32, cursor: i64) -> Result<Vec<Supply>, ApiError> {
        let pagination = Pagination::new(limit, cursor)?;
        Ok(self.fetch_supplies_page(pagination).await?.supplies)
    }

    /// Lists supplies and returns the cursor for the next page.
    pub async fn fetch_supplies_page(
        &self,
        pagination: Pagination,
    ) -> Result<SuppliesPage, ApiError> {
        let request = self
            .request(ApiHost::Marketplace, SUPPLIES_PATH)
            .with_query("limit", pagination.limit())
            .with_query("next", pagination.next());
        self.get_json(request).await
    }

    pub async fn fetch_supply(&self, id: &SupplyId) -> Result<Supply, ApiError> {
        let path = format!("{SUPPLIES_PATH}/{}", urlencoding::encode(id.as_str()));
        self.get_json(self.request(ApiHost::Marketplace, &path))
            .await
    }

    pub async fn fetch_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.get_json(self.request(ApiHost::Supplies, WAREHOUSES_PATH))
            .await
    }

    /// Without ids (or with an empty list) the vendor returns every warehouse.
    pub async fn fetch_acceptance_coefficients(
        &self,
        warehouse_ids: Option<&WarehouseIds>,
    ) -> Result<Vec<AcceptanceCoefficient>, ApiError> {
        let mut request = self.request(ApiHost::Supplies, COEFFICIENTS_PATH);
        if let Some(ids) = warehouse_ids.filter(|ids| !ids.is_empty()) {
            request = request.with_query("warehouseIDs", ids.to_query_value());
        }
        self.get_json(request).await
    }

    pub async fn find_warehouses_by_name(&self, needle: &str) -> Result<Vec<Warehouse>, ApiError> {
        let warehouses = self.fetch_warehouses().await?;
        Ok(filter_warehouses_by_name(warehouses, needle))
    }

    pub async fn find_available_coefficients(
        &self,
        coefficient: f64,
        warehouse_name: &str,
    ) -> Result<Vec<AcceptanceCoefficient>, ApiError> {
        let rows = self.fetch_acceptance_coefficients(None).await?;
        Ok(filter_available_coefficients(
            rows,
            coefficient,
            warehouse_name,
        ))
    }

    fn request(&self, host: ApiHost, path: &str) -> HttpRequest {
        HttpRequest::get(format!("{}{path}", self.config.base_url(host)))
            .with_auth(&HttpAuth::ApiKey(self.config.api_key.clone()))
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.config.timeout_ms)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let url = request.url.clone();
        tracing::debug!(url = %url, query = ?request.query, "sending request");

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(url = %url, error = %error, "request failed");
            if error.timed_out() {
                ApiError::timeout(error.message())
            } else {
                ApiError::transport(error.message())
            }
        })?;

        if !response.is_success() {
            let message = vendor_error_message(&response.body)
                .unwrap_or_else(|| format!("upstream returned status {}", response.status));
            tracing::warn!(url = %url, status = response.status, message = %message, "request rejected");
            return Err(ApiError::from_status(response.status, message));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            tracing::warn!(url = %url, error = %error, "response body did not match schema");
            ApiError::decode(format!("failed to decode response from {url}: {error}"))
        })
    }
}

/// Error bodies differ per host: `{code, message}` on the marketplace host and
/// `{title, detail}` on the supplies host.
#[derive(Debug, Default, Deserialize)]
struct VendorErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

fn vendor_error_message(body: &str) -> Option<String> {
    let parsed: VendorErrorBody = serde_json::from_str(body).ok()?;
    let headline = parsed.code.or(parsed.title);
    let text = parsed.message.or(parsed.detail);
    match (headline, text) {
        (Some(headline), Some(text)) => Some(format!("{headline}: {text}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}
