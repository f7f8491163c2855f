//! # Domain Records
//!
//! Read-only value types mapped from vendor JSON, plus the small request
//! types that validate caller input before anything is sent.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Supply`] | Shipment batch |
//! | [`SuppliesPage`] | Supplies plus the `next` cursor |
//! | [`Warehouse`] | Acceptance location |
//! | [`AcceptanceCoefficient`] | Acceptance cost for a warehouse, date and box type |
//! | [`Pagination`] | `limit` / `next` pair for the supplies list |
//! | [`SupplyId`] | Non-empty supply identifier |
//! | [`WarehouseIds`] | Optional id filter for coefficients |
//!
//! Timestamps stay as the vendor sent them; `*_utc` accessors parse RFC 3339
//! on demand.

mod filters;
mod models;
mod request;

pub use filters::{filter_available_coefficients, filter_warehouses_by_name};
pub use models::{AcceptanceCoefficient, SuppliesPage, Supply, Warehouse};
pub use request::{Pagination, SupplyId, WarehouseIds};
