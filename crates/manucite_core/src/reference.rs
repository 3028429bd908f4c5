/*
SPDX-License-Identifier: MPL-2.0
*/

//! Bibliographic reference model.
//!
//! References are created by external collaborators (identifier resolution or
//! manual entry) and are read-only to the engine. The catalog preserves
//! insertion order so that UI listings are stable across recomputes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All references for a document, keyed by id, in insertion order.
pub type Catalog = IndexMap<String, Reference>;

/// A single contributor, given/family form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub given: String,
    pub family: String,
}

impl Author {
    pub fn new(family: &str, given: &str) -> Self {
        Self {
            given: given.to_string(),
            family: family.to_string(),
        }
    }

    /// Initials derived from the given name: "Thomas S." → "TS".
    pub fn initials(&self) -> String {
        self.given
            .split_whitespace()
            .filter_map(|part| part.chars().find(|c| c.is_alphanumeric()))
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// The kind of work a reference describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceType {
    #[default]
    Article,
    Book,
    Chapter,
    Website,
    Guideline,
    Conference,
    Thesis,
    Preprint,
    Other,
}

/// A bibliographic record.
///
/// `year` uses `0` as the "unknown" sentinel so catalogs exported by the
/// editing surface round-trip unchanged; [`Reference::year_label`] renders
/// the sentinel as `"n.d."`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Reference {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub ref_type: ReferenceType,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmcid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Structured CSL-JSON payload for style-specific rendering by external
    /// formatters. Never consulted by the numbering pipeline.
    #[serde(rename = "cslData", skip_serializing_if = "Option::is_none")]
    pub csl: Option<CslItem>,
}

impl Reference {
    /// Create a journal-article reference with the minimal required fields.
    pub fn article(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            ref_type: ReferenceType::Article,
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Create a book reference with the minimal required fields.
    pub fn book(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            ref_type: ReferenceType::Book,
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_journal(mut self, journal: &str) -> Self {
        self.journal = Some(journal.to_string());
        self
    }

    pub fn with_doi(mut self, doi: &str) -> Self {
        self.doi = Some(doi.to_string());
        self
    }

    /// True when the publication year is known.
    pub fn has_year(&self) -> bool {
        self.year != 0
    }

    /// The year as display text, `"n.d."` when unknown.
    pub fn year_label(&self) -> String {
        if self.has_year() {
            self.year.to_string()
        } else {
            "n.d.".to_string()
        }
    }

    /// Title with the `"Untitled"` fallback applied.
    pub fn title_or_untitled(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Subset of a CSL-JSON item (field names follow the CSL-JSON spec).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CslItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<CslName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<CslDate>,
    #[serde(rename = "container-title", skip_serializing_if = "Option::is_none")]
    pub container_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "DOI", skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "PMID", skip_serializing_if = "Option::is_none")]
    pub pmid: Option<String>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// A CSL-JSON name part.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CslName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    pub family: String,
}

/// A CSL-JSON date, `date-parts` form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CslDate {
    #[serde(rename = "date-parts")]
    pub date_parts: Vec<Vec<i32>>,
}

impl CslDate {
    pub fn year(y: i32) -> Self {
        Self {
            date_parts: vec![vec![y]],
        }
    }

    pub fn year_value(&self) -> Option<i32> {
        self.date_parts.first().and_then(|parts| parts.first()).copied()
    }
}
