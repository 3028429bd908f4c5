/*
SPDX-License-Identifier: MPL-2.0
*/

//! Document traversal boundary.
//!
//! The engine never depends on a particular rich-text tree. Any document
//! representation that can produce an in-order walk of its citation nodes
//! implements [`CitationScan`]; the concrete [`Document`] here is a flat
//! block sequence used by the CLI and the test suites.

use manucite_core::CitationNode;
use serde::{Deserialize, Serialize};

/// A citation node together with its position in the document walk.
#[derive(Debug, Clone)]
pub struct CitationSite {
    /// Ordinal position of the node within the walk. Positions are strictly
    /// increasing but need not be contiguous.
    pub position: usize,
    pub node: CitationNode,
}

/// In-order walk over a document's citation nodes.
pub trait CitationScan {
    /// Citation sites in document order.
    fn citation_sites(&self) -> Vec<CitationSite>;
}

/// One block of document content.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    Text {
        text: String,
    },
    Citation {
        #[serde(flatten)]
        node: CitationNode,
    },
}

/// A flat, ordered document model.
///
/// Rich enough to express every structural edit the numbering invariants
/// care about: inserting, removing, and reordering citation nodes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a text block.
    pub fn push_text(&mut self, text: &str) {
        self.blocks.push(Block::Text {
            text: text.to_string(),
        });
    }

    /// Append a citation node at the end of the document.
    pub fn push_citation(&mut self, node: CitationNode) {
        self.blocks.push(Block::Citation { node });
    }

    /// Insert a citation node at a block index (the citation-insertion
    /// event boundary: the ids become visible to the next recomputation).
    pub fn insert_citation(&mut self, index: usize, node: CitationNode) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, Block::Citation { node });
    }

    /// Remove the block at `index`, if any.
    pub fn remove_block(&mut self, index: usize) {
        if index < self.blocks.len() {
            self.blocks.remove(index);
        }
    }

    /// Move the block at `from` so it ends up at index `to`.
    pub fn move_block(&mut self, from: usize, to: usize) {
        if from >= self.blocks.len() || to >= self.blocks.len() {
            return;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
    }

    /// Mutable access to the citation node at a block index.
    pub fn citation_mut(&mut self, index: usize) -> Option<&mut CitationNode> {
        match self.blocks.get_mut(index) {
            Some(Block::Citation { node }) => Some(node),
            _ => None,
        }
    }
}

impl CitationScan for Document {
    fn citation_sites(&self) -> Vec<CitationSite> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(position, block)| match block {
                Block::Citation { node } => Some(CitationSite {
                    position,
                    node: node.clone(),
                }),
                Block::Text { .. } => None,
            })
            .collect()
    }
}
