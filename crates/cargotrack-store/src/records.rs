//! Record table loading: CSV cache first, XLSX source as fallback.

use cargotrack_core::config::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use tracing::{error, info};

/// One row of the shipment dataset.
///
/// Field values stay as strings: the uploaded spreadsheets are not clean
/// enough to force numeric types at parse time, and replies echo cells
/// verbatim anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    #[serde(rename = "Shipment Tracking Code")]
    pub tracking_code: String,
    #[serde(rename = "Shipping Name")]
    pub shipping_name: String,
    #[serde(rename = "Package Number")]
    pub package_number: String,
    #[serde(rename = "Weight/KG")]
    pub weight_kg: String,
    #[serde(rename = "Quantity")]
    pub quantity: String,
    #[serde(rename = "Flight")]
    pub flight: String,
    #[serde(rename = "Customer code")]
    pub customer_code: String,
}

/// In-memory dataset, rebuilt from disk on every load.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub records: Vec<ShipmentRecord>,
}

/// Loads the shipment dataset from the configured data directory.
pub struct RecordStore {
    config: StoreConfig,
}

impl RecordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load the dataset.
    ///
    /// Prefers the canonical CSV cache. If only the XLSX source exists it
    /// is converted and cached first. Fails open: a missing file or any
    /// parse error is logged and yields an empty table.
    pub fn load(&self) -> RecordTable {
        let csv_path = self.config.csv_path();

        if !csv_path.exists() {
            let xlsx_path = self.config.xlsx_path();
            if xlsx_path.exists() {
                info!("{} found, converting to CSV cache", xlsx_path.display());
                match crate::dataset::convert_xlsx_file(&xlsx_path, &csv_path) {
                    Ok(()) => info!("converted {} to {}", xlsx_path.display(), csv_path.display()),
                    Err(e) => {
                        error!("xlsx conversion failed: {e}");
                        return RecordTable::default();
                    }
                }
            } else {
                error!("dataset not found at {}", csv_path.display());
                return RecordTable::default();
            }
        }

        let file = match File::open(&csv_path) {
            Ok(f) => f,
            Err(e) => {
                error!("failed to open {}: {e}", csv_path.display());
                return RecordTable::default();
            }
        };

        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let mut records = Vec::new();
        for row in reader.deserialize::<ShipmentRecord>() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => {
                    // No partial-read recovery: one bad row voids the load.
                    error!("failed to parse {}: {e}", csv_path.display());
                    return RecordTable::default();
                }
            }
        }

        RecordTable { records }
    }
}
