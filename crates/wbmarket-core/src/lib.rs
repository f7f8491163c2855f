//! # wbmarket Core
//!
//! Typed client for the Wildberries seller APIs: supplies on the marketplace
//! host, warehouses and acceptance coefficients on the supplies host.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`MarketplaceClient`] and its fetch/find operations |
//! | [`config`] | [`ClientConfig`], [`ApiKey`] and environment loading |
//! | [`domain`] | Records, request types and client-side filters |
//! | [`error`] | [`ApiError`] and [`ValidationError`] |
//! | [`http_client`] | Transport trait and the reqwest implementation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wbmarket_core::{ClientConfig, MarketplaceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketplaceClient::new(ClientConfig::from_env()?);
//!
//!     for row in client.find_available_coefficients(1.0, "Коледино").await? {
//!         println!("{} {}", row.date, row.box_type_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Calls never swallow failures. An empty `Vec` means the vendor had no data;
//! a failed request is an `Err`:
//!
//! ```rust
//! use wbmarket_core::{ApiError, ApiErrorKind};
//!
//! fn describe(error: &ApiError) -> &'static str {
//!     match error.kind() {
//!         ApiErrorKind::Unauthorized => "check WB_API",
//!         ApiErrorKind::RateLimited => "slow down",
//!         ApiErrorKind::InvalidRequest => "fix the arguments",
//!         _ => "upstream problem",
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;

pub use client::MarketplaceClient;

pub use config::{ApiHost, ApiKey, ClientConfig};

pub use domain::{
    filter_available_coefficients, filter_warehouses_by_name, AcceptanceCoefficient, Pagination,
    SuppliesPage, Supply, SupplyId, Warehouse, WarehouseIds,
};

pub use error::{ApiError, ApiErrorKind, ValidationError};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
