/*
SPDX-License-Identifier: MPL-2.0
*/

//! manucite core
//!
//! Data model shared by the manucite citation engine: bibliographic
//! references, inline citation nodes, and citation styles. The engine crate
//! (`manucite_engine`) consumes these types; nothing here performs numbering
//! or formatting.
//!
//! # Example
//!
//! ```rust
//! use manucite_core::{Author, CitationNode, CitationStyle, Reference, StyleFamily};
//!
//! let reference = Reference::article("smith2020", "Topical Fluoride Revisited")
//!     .with_author(Author::new("Smith", "Ada"))
//!     .with_year(2020);
//! assert_eq!(reference.year_label(), "2020");
//!
//! let node = CitationNode::new(["smith2020"]);
//! assert_eq!(node.reference_ids, vec!["smith2020".to_string()]);
//!
//! assert_eq!(CitationStyle::Vancouver.family(), StyleFamily::Numeric);
//! assert_eq!(CitationStyle::Apa.family(), StyleFamily::AuthorYear);
//! ```

pub mod citation;
pub mod reference;
pub mod style;

pub use citation::{CitationNode, CitationOverride, LocatorType};
pub use reference::{Author, Catalog, CslDate, CslItem, CslName, Reference, ReferenceType};
pub use style::{CitationStyle, StyleFamily, StyleInfo};
