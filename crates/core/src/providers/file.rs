use async_trait::async_trait;
use std::path::PathBuf;

use crate::errors::CoreError;
use super::traits::DataSource;

/// Reads the CSV file from local disk (native only).
///
/// The read is a plain blocking `std::fs` call; fine for the one load at
/// startup, not for a busy async runtime.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch_text(&self) -> Result<String, CoreError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            CoreError::FileIO(format!("{}: {e}", self.path.display()))
        })?;
        Ok(text)
    }
}
