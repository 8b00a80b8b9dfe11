//! Local inventory snapshot loaded from the supplier export.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// One row of the supplier's stock export.
///
/// All fields are kept as the raw strings the supplier sent. Codes are
/// string-typed even when they look numeric, so `12345` and `"12345"` in the
/// export both become `"12345"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryRecord {
    #[serde(alias = "Код", deserialize_with = "scalar_as_string")]
    pub code: String,
    #[serde(alias = "Количество", deserialize_with = "scalar_as_string")]
    pub quantity: String,
    #[serde(alias = "Цена", deserialize_with = "scalar_as_string")]
    pub price: String,
}

impl InventoryRecord {
    pub fn new(
        code: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}

/// Parses an inventory snapshot from a JSON array of records.
///
/// # Errors
///
/// Returns [`CoreError::InventoryFileParse`] if the content is not a JSON
/// array of records; `origin` names the source in the error.
pub fn parse_inventory(content: &str, origin: &str) -> Result<Vec<InventoryRecord>, CoreError> {
    serde_json::from_str(content).map_err(|e| CoreError::InventoryFileParse {
        path: origin.to_owned(),
        source: e,
    })
}

/// Loads the inventory snapshot from a JSON file.
///
/// # Errors
///
/// Returns `CoreError` if the file cannot be read or parsed.
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryRecord>, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::InventoryFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_inventory(&content, &path.display().to_string())
}
