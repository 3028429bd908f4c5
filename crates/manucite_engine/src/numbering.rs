/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation number assignment and change detection.
//!
//! Numbers are assigned in order of first appearance while walking citation
//! nodes in document order (Vancouver convention). The map is derived state:
//! it is recomputed wholesale on every cycle and never patched in place,
//! because deleting or reordering one node can shift the first-appearance
//! order of every later id.

use crate::document::CitationScan;
use indexmap::IndexMap;

/// Reference id → assigned citation number. Dense and contiguous from 1.
///
/// Iteration order is first-appearance order, which is also ascending number
/// order; consumers that need number order must still sort rather than rely
/// on it, since the map type does not enforce the invariant.
pub type NumberingMap = IndexMap<String, usize>;

/// Scan a document and assign numbers by first appearance.
///
/// A node with an empty id list contributes nothing; an id cited more than
/// once keeps the number from its first occurrence; ids never cited are
/// absent from the map.
pub fn assign_numbers<D: CitationScan + ?Sized>(document: &D) -> NumberingMap {
    let mut map = NumberingMap::new();
    let mut counter = 1usize;

    for site in document.citation_sites() {
        for id in &site.node.reference_ids {
            if !map.contains_key(id.as_str()) {
                map.insert(id.clone(), counter);
                counter += 1;
            }
        }
    }

    map
}

/// Shallow value equality between two numbering maps.
///
/// The recompute pipeline must call this before publishing: a value-equal
/// map must never be republished, since every downstream consumer reacts to
/// map changes.
pub fn maps_equal(old: &NumberingMap, new: &NumberingMap) -> bool {
    if old.len() != new.len() {
        return false;
    }
    old.iter().all(|(id, number)| new.get(id) == Some(number))
}
