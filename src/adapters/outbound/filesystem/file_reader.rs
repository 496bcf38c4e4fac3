use super::super::bom_payload::parse_edges;
use crate::bom_analysis::domain::BomEdge;
use crate::ports::outbound::BomSource;
use crate::shared::error::BomError;
use crate::shared::security::{read_bounded_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// JsonFileBomSource adapter reading a saved `/billofmaterials` payload
///
/// The file is re-read on every fetch, so edits show up on the next load.
/// Symbolic links, non-regular files and files over the input size cap are
/// refused.
pub struct JsonFileBomSource {
    path: PathBuf,
    max_size: u64,
}

impl JsonFileBomSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            max_size: MAX_INPUT_FILE_SIZE,
        }
    }

    /// Overrides the size cap
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BomSource for JsonFileBomSource {
    async fn fetch_edges(&self) -> Result<Vec<BomEdge>> {
        let content = read_bounded_file(&self.path, "BOM input", self.max_size).map_err(|e| {
            BomError::FileReadError {
                path: self.path.clone(),
                details: format!("{:#}", e),
            }
        })?;

        parse_edges(&content, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
