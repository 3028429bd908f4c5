/*
SPDX-License-Identifier: MPL-2.0
*/

//! Inline citation node model.
//!
//! A citation node is atomic: it carries reference ids and optional display
//! overrides, and its visual content is entirely derived by the engine. The
//! node never stores its own number or display text.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Locator types for pinpoint citations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocatorType {
    #[default]
    Page,
    Chapter,
    Figure,
    Table,
    Section,
}

/// Per-reference display overrides carried on a citation node.
///
/// These are authored by the citation dialog and consumed by external
/// style formatters; numbering and the built-in display formatter ignore
/// them entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CitationOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub suppress_author: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator_type: Option<LocatorType>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// An inline citation marker.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CitationNode {
    /// Reference ids in authored order, not necessarily sorted.
    pub reference_ids: Vec<String>,
    /// Optional per-reference overrides, keyed by reference id.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, CitationOverride>,
}

impl CitationNode {
    /// Create a node citing the given reference ids.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reference_ids: ids.into_iter().map(Into::into).collect(),
            overrides: IndexMap::new(),
        }
    }

    /// True when the node cites nothing (contributes nothing to numbering).
    pub fn is_empty(&self) -> bool {
        self.reference_ids.is_empty()
    }

    /// Remove one reference id from the node, keeping authored order.
    pub fn remove_reference(&mut self, id: &str) {
        self.reference_ids.retain(|r| r != id);
        self.overrides.shift_remove(id);
    }
}
