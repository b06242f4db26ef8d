//! # cargotrack-store
//!
//! Flat-file record store for shipment data: CSV cache loading with an
//! XLSX fallback, exact-match lookups, admin dataset replacement, and the
//! append-only feedback log.
//!
//! The store deliberately re-reads the dataset on every lookup — there is
//! no caching or consistency layer. Replacement swaps the whole file.

mod dataset;
mod feedback;
mod lookup;
mod records;

#[cfg(test)]
mod tests;

pub use dataset::UploadFormat;
pub use feedback::FeedbackLog;
pub use lookup::TrekMatch;
pub use records::{RecordStore, RecordTable, ShipmentRecord};
