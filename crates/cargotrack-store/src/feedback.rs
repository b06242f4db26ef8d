//! Append-only feedback log.

use cargotrack_core::error::CargotrackError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Plain-text feedback log, one `user_id: text` entry per line.
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, user_id: i64, text: &str) -> Result<(), CargotrackError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{user_id}: {text}")?;
        Ok(())
    }
}
