//! Library sizing knobs.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Bucket count used by the id index unless configured otherwise.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Construction-time settings for [`crate::library::Library`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Initial number of index buckets.
    pub bucket_count: usize,
    /// Entries-per-bucket ratio above which the index doubles and rehashes.
    /// `None` keeps the bucket count fixed.
    pub max_load_factor: Option<f64>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            max_load_factor: None,
        }
    }
}

impl LibraryConfig {
    /// Checks that the settings describe a usable index.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(CatalogError::Validation(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        if let Some(lf) = self.max_load_factor {
            if !lf.is_finite() || lf <= 0.0 {
                return Err(CatalogError::Validation(format!(
                    "max_load_factor must be a positive number, got {lf}"
                )));
            }
        }
        Ok(())
    }
}
