//! Exact-match lookups over the record table.

use crate::records::{RecordStore, RecordTable, ShipmentRecord};

/// A tracking-code hit. The tracking code itself is the query key and is
/// not repeated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrekMatch {
    pub shipping_name: String,
    pub package_number: String,
    pub weight_kg: String,
    pub quantity: String,
    pub flight: String,
    pub customer_code: String,
}

impl From<&ShipmentRecord> for TrekMatch {
    fn from(record: &ShipmentRecord) -> Self {
        Self {
            shipping_name: record.shipping_name.clone(),
            package_number: record.package_number.clone(),
            weight_kg: record.weight_kg.clone(),
            quantity: record.quantity.clone(),
            flight: record.flight.clone(),
            customer_code: record.customer_code.clone(),
        }
    }
}

/// Trim and lowercase, applied to both the query and the column cells.
fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

impl RecordTable {
    /// All rows whose tracking code matches, in table order.
    /// Empty result means not found.
    pub fn find_by_tracking_code(&self, code: &str) -> Vec<TrekMatch> {
        let code = normalize(code);
        self.records
            .iter()
            .filter(|r| normalize(&r.tracking_code) == code)
            .map(TrekMatch::from)
            .collect()
    }

    /// All rows whose customer code matches, in table order,
    /// tracking codes included.
    pub fn find_by_customer_code(&self, code: &str) -> Vec<ShipmentRecord> {
        let code = normalize(code);
        self.records
            .iter()
            .filter(|r| normalize(&r.customer_code) == code)
            .cloned()
            .collect()
    }
}

impl RecordStore {
    /// Re-read the dataset and search by tracking code.
    pub fn search_by_tracking_code(&self, code: &str) -> Vec<TrekMatch> {
        self.load().find_by_tracking_code(code)
    }

    /// Re-read the dataset and search by customer code.
    pub fn search_by_customer_code(&self, code: &str) -> Vec<ShipmentRecord> {
        self.load().find_by_customer_code(code)
    }
}
