use std::fs;
use std::path::Path;

use crate::error::DatasetLoadError;
use crate::models::{Customer, DatasetDocument, Product};

/// Location of the bundled fixture, relative to the process working
/// directory. Fixed on purpose: the dataset ships with the artifact and is
/// never selected at runtime.
const DATASET_PATH: &str = "data/dataset.json";

/// Owner of the parsed dataset for the whole process lifetime.
///
/// A store only exists once [`DatasetStore::load`] has fully succeeded, and
/// nothing mutates it afterwards, so request handlers can share it through
/// an `Arc` without any locking.
#[derive(Debug)]
pub struct DatasetStore {
    document: DatasetDocument,
}

impl DatasetStore {
    /// Reads and parses the bundled fixture. Called exactly once, from
    /// `main`, before the listener binds. Any failure here is fatal to
    /// startup; there is no partial load and no retry.
    pub fn load() -> Result<Self, DatasetLoadError> {
        Self::load_from(Path::new(DATASET_PATH))
    }

    fn load_from(path: &Path) -> Result<Self, DatasetLoadError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, DatasetLoadError> {
        let document: DatasetDocument = serde_json::from_str(raw)?;
        Ok(Self { document })
    }

    /// All customer records, in fixture order. A missing `crm` section and
    /// an empty one are indistinguishable here: both read as zero records.
    pub fn customers(&self) -> &[Customer] {
        self.document
            .crm
            .as_ref()
            .map(|crm| crm.customers.as_slice())
            .unwrap_or_default()
    }

    /// All product records, in fixture order. Same absence rule as
    /// [`DatasetStore::customers`].
    pub fn products(&self) -> &[Product] {
        self.document
            .inventory
            .as_ref()
            .map(|inventory| inventory.products.as_slice())
            .unwrap_or_default()
    }
}
