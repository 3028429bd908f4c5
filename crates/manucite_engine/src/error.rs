/*
SPDX-License-Identifier: MPL-2.0
*/

//! Engine errors.
//!
//! The numbering/formatting core never fails; errors only arise at the file
//! I/O boundary when loading catalogs and documents.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A file failed to parse: (format, underlying message).
    #[error("{0} parse error: {1}")]
    Parse(String, String),
}
