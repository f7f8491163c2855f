use super::models::{AcceptanceCoefficient, Warehouse};

/// Keeps warehouses whose name contains `needle`, ignoring case.
pub fn filter_warehouses_by_name(warehouses: Vec<Warehouse>, needle: &str) -> Vec<Warehouse> {
    let needle = needle.to_lowercase();
    warehouses
        .into_iter()
        .filter(|warehouse| warehouse.name.to_lowercase().contains(&needle))
        .collect()
}

/// Keeps rows that allow unloading, carry exactly `coefficient`, and belong to
/// `warehouse_name` (case-insensitive exact match). A missing coefficient never
/// matches.
pub fn filter_available_coefficients(
    rows: Vec<AcceptanceCoefficient>,
    coefficient: f64,
    warehouse_name: &str,
) -> Vec<AcceptanceCoefficient> {
    let warehouse_name = warehouse_name.to_lowercase();
    rows.into_iter()
        .filter(|row| row.allow_unload)
        .filter(|row| row.coefficient == Some(coefficient))
        .filter(|row| row.warehouse_name.to_lowercase() == warehouse_name)
        .collect()
}
