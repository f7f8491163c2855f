use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::ValidationError;

/// Shipment batch on the marketplace host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: String,
    pub done: bool,
    pub created_at: String,
    /// `None` until the supply is closed.
    #[serde(default)]
    pub closed_at: Option<String>,
    /// `None` until the supply is scanned at a warehouse.
    #[serde(default)]
    pub scan_dt: Option<String>,
    pub name: String,
    pub cargo_type: i64,
}

impl Supply {
    pub fn created_at_utc(&self) -> Result<OffsetDateTime, ValidationError> {
        parse_timestamp(&self.created_at)
    }

    pub fn closed_at_utc(&self) -> Result<Option<OffsetDateTime>, ValidationError> {
        self.closed_at.as_deref().map(parse_timestamp).transpose()
    }

    pub fn scan_dt_utc(&self) -> Result<Option<OffsetDateTime>, ValidationError> {
        self.scan_dt.as_deref().map(parse_timestamp).transpose()
    }
}

/// One page of `/v3/supplies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppliesPage {
    #[serde(default)]
    pub supplies: Vec<Supply>,
    /// Cursor for the following request.
    #[serde(default)]
    pub next: i64,
}

/// Acceptance location on the supplies host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub work_time: String,
    #[serde(rename = "acceptsQR")]
    pub accepts_qr: bool,
    pub is_active: bool,
    pub is_transit_active: bool,
}

/// Per-warehouse, per-date acceptance cost for a box type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceCoefficient {
    pub date: String,
    #[serde(default)]
    pub coefficient: Option<f64>,
    #[serde(rename = "warehouseID")]
    pub warehouse_id: i64,
    pub warehouse_name: String,
    pub allow_unload: bool,
    pub box_type_name: String,
    #[serde(rename = "boxTypeID")]
    pub box_type_id: i64,
    pub is_sorting_center: bool,
}

impl AcceptanceCoefficient {
    pub fn date_utc(&self) -> Result<OffsetDateTime, ValidationError> {
        parse_timestamp(&self.date)
    }
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, ValidationError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|_| ValidationError::InvalidTimestamp {
        value: value.to_owned(),
    })
}
