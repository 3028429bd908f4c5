/*
SPDX-License-Identifier: MPL-2.0
*/

#![allow(dead_code)]

use manucite_core::{Author, CitationNode, Reference};
use manucite_engine::{Document, ReferenceStore};

// --- Helper Functions for Test Data Construction ---

/// Create an article reference with a single author.
pub fn make_article(id: &str, family: &str, given: &str, year: i32, title: &str) -> Reference {
    Reference::article(id, title)
        .with_author(Author::new(family, given))
        .with_year(year)
}

/// Create an article reference with multiple authors.
pub fn make_article_multi_author(
    id: &str,
    authors: Vec<(&str, &str)>,
    year: i32,
    title: &str,
) -> Reference {
    let mut reference = Reference::article(id, title).with_year(year);
    for (family, given) in authors {
        reference = reference.with_author(Author::new(family, given));
    }
    reference
}

/// Create a store whose catalog holds the given references.
pub fn make_store(references: Vec<Reference>) -> ReferenceStore {
    let mut store = ReferenceStore::new();
    for reference in references {
        store.add_reference(reference);
    }
    store
}

/// Create a document whose citation nodes cite the given id lists in order,
/// separated by text blocks.
pub fn make_document(nodes: &[&[&str]]) -> Document {
    let mut document = Document::new();
    for (i, ids) in nodes.iter().enumerate() {
        document.push_text(&format!("paragraph {i}"));
        document.push_citation(CitationNode::new(ids.iter().copied()));
    }
    document
}
