/*
SPDX-License-Identifier: MPL-2.0
*/

//! Reference store.
//!
//! Owns the only shared mutable state in the engine: the reference catalog,
//! the published numbering map, the active citation style, and any
//! pre-formatted bibliography entries supplied by an external formatter.
//! All access is single-threaded; the numbering map is written exclusively
//! through the equality-gated [`ReferenceStore::publish_numbering_map`].

use crate::bibliography::FormattedEntry;
use crate::numbering::{maps_equal, NumberingMap};
use manucite_core::{Catalog, CitationStyle, Reference};
use tracing::debug;

/// The document's citation state, read by formatters and UI consumers.
#[derive(Debug, Default)]
pub struct ReferenceStore {
    catalog: Catalog,
    numbering: NumberingMap,
    style: CitationStyle,
    preformatted: Vec<FormattedEntry>,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    /// Add or replace a catalog entry.
    pub fn add_reference(&mut self, reference: Reference) {
        self.catalog.insert(reference.id.clone(), reference);
    }

    /// Remove a catalog entry. Citations pointing at the id degrade to the
    /// placeholder glyph at render time; numbering is unaffected until the
    /// next document mutation.
    pub fn remove_reference(&mut self, id: &str) -> Option<Reference> {
        self.catalog.shift_remove(id)
    }

    pub fn get_reference(&self, id: &str) -> Option<&Reference> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn numbering_map(&self) -> &NumberingMap {
        &self.numbering
    }

    pub fn citation_style(&self) -> CitationStyle {
        self.style
    }

    /// Change the active style. Numbering is untouched; only display output
    /// changes.
    pub fn set_citation_style(&mut self, style: CitationStyle) {
        self.style = style;
    }

    pub fn preformatted_entries(&self) -> &[FormattedEntry] {
        &self.preformatted
    }

    /// Replace the externally supplied pre-formatted bibliography entries.
    pub fn set_preformatted_entries(&mut self, entries: Vec<FormattedEntry>) {
        self.preformatted = entries;
    }

    /// Publish a freshly computed numbering map.
    ///
    /// Skips the write when the map is value-equal to the published one and
    /// returns whether a write happened. This is the only write path for the
    /// numbering map.
    pub fn publish_numbering_map(&mut self, map: NumberingMap) -> bool {
        if maps_equal(&self.numbering, &map) {
            debug!(entries = map.len(), "numbering unchanged, publish skipped");
            return false;
        }
        debug!(entries = map.len(), "numbering map published");
        self.numbering = map;
        true
    }

    /// Drop all per-document state (document closed).
    pub fn clear(&mut self) {
        self.catalog.clear();
        self.numbering.clear();
        self.preformatted.clear();
    }
}
