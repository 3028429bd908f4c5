/*
SPDX-License-Identifier: MPL-2.0
*/

//! File loading for catalogs and documents.
//!
//! Formats are sniffed from the file extension; JSON and YAML are accepted.
//! Catalogs may be either a list of references or a map keyed by id (the
//! key fills in a missing `id` field).

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use manucite_core::{Catalog, Reference};

use crate::document::Document;
use crate::error::EngineError;

/// Load a reference catalog from a file.
pub fn load_catalog(path: &Path) -> Result<Catalog, EngineError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match ext {
        "yaml" | "yml" => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| EngineError::Parse("YAML".to_string(), e.to_string()))?;

            if let Ok(refs) = serde_yaml::from_str::<Vec<Reference>>(&content) {
                return Ok(catalog_from_list(refs));
            }
            match serde_yaml::from_str::<IndexMap<String, Reference>>(&content) {
                Ok(map) => Ok(catalog_from_map(map)),
                Err(e) => Err(EngineError::Parse("YAML".to_string(), e.to_string())),
            }
        }
        _ => {
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| EngineError::Parse("JSON".to_string(), e.to_string()))?;

            if let Ok(refs) = serde_json::from_slice::<Vec<Reference>>(&bytes) {
                return Ok(catalog_from_list(refs));
            }
            match serde_json::from_slice::<IndexMap<String, Reference>>(&bytes) {
                Ok(map) => Ok(catalog_from_map(map)),
                Err(e) => Err(EngineError::Parse("JSON".to_string(), e.to_string())),
            }
        }
    }
}

/// Load a document (a block list) from a file.
pub fn load_document(path: &Path) -> Result<Document, EngineError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match ext {
        "yaml" | "yml" => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str::<Document>(&content)
                .map_err(|e| EngineError::Parse("YAML".to_string(), e.to_string()))
        }
        _ => serde_json::from_slice::<Document>(&bytes)
            .map_err(|e| EngineError::Parse("JSON".to_string(), e.to_string())),
    }
}

fn catalog_from_list(refs: Vec<Reference>) -> Catalog {
    let mut catalog = Catalog::new();
    for reference in refs {
        catalog.insert(reference.id.clone(), reference);
    }
    catalog
}

fn catalog_from_map(map: IndexMap<String, Reference>) -> Catalog {
    let mut catalog = Catalog::new();
    for (id, mut reference) in map {
        if reference.id.is_empty() {
            reference.id = id.clone();
        }
        catalog.insert(id, reference);
    }
    catalog
}
