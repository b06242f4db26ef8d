//! Admin dataset replacement and XLSX-to-CSV conversion.

use crate::records::RecordStore;
use calamine::{Data, Reader, Xlsx};
use cargotrack_core::error::CargotrackError;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use tracing::info;

/// Accepted upload formats, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Csv,
    Xlsx,
}

impl UploadFormat {
    /// Classify an uploaded filename. `None` means the upload must be
    /// rejected without touching the cached dataset.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".csv") {
            Some(Self::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(Self::Xlsx)
        } else {
            None
        }
    }
}

impl RecordStore {
    /// Replace the canonical dataset with an uploaded file.
    ///
    /// CSV uploads are stored byte-for-byte. XLSX uploads are converted to
    /// CSV first. The swap is write-to-temp-then-rename, so readers never
    /// observe a torn file.
    pub fn replace_dataset(
        &self,
        format: UploadFormat,
        bytes: &[u8],
    ) -> Result<(), CargotrackError> {
        let csv_path = self.config().csv_path();
        let payload = match format {
            UploadFormat::Csv => bytes.to_vec(),
            UploadFormat::Xlsx => xlsx_to_csv(Cursor::new(bytes))?,
        };
        write_atomic(&csv_path, &payload)?;
        info!("dataset replaced at {}", csv_path.display());
        Ok(())
    }
}

/// Convert the XLSX source file into the CSV cache on disk.
pub(crate) fn convert_xlsx_file(xlsx_path: &Path, csv_path: &Path) -> Result<(), CargotrackError> {
    let file = File::open(xlsx_path)?;
    let payload = xlsx_to_csv(BufReader::new(file))?;
    write_atomic(csv_path, &payload)?;
    Ok(())
}

/// Render the first worksheet of an XLSX workbook as UTF-8 CSV bytes.
fn xlsx_to_csv<R: Read + Seek>(reader: R) -> Result<Vec<u8>, CargotrackError> {
    let mut workbook: Xlsx<R> =
        Xlsx::new(reader).map_err(|e| CargotrackError::Store(format!("invalid xlsx: {e}")))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CargotrackError::Store("xlsx has no worksheets".into()))?
        .map_err(|e| CargotrackError::Store(format!("failed to read worksheet: {e}")))?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(format_cell).collect();
        writer
            .write_record(&cells)
            .map_err(|e| CargotrackError::Store(format!("csv write failed: {e}")))?;
    }
    writer
        .into_inner()
        .map_err(|e| CargotrackError::Store(format!("csv flush failed: {e}")))
}

fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        // Whole floats come back from spreadsheets as e.g. 5.0 — print 5.
        // Values outside the i64 range would saturate in the cast, so those
        // keep the float rendering.
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}

/// Write-to-temp-then-rename in the target's directory.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), CargotrackError> {
    let tmp = path.with_extension("csv.tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
