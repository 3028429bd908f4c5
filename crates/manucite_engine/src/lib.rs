/*
SPDX-License-Identifier: MPL-2.0
*/

//! manucite engine
//!
//! Citation numbering and bibliography synthesis for a live-edited document.
//! The engine assigns dense, order-stable numbers to cited references,
//! formats inline citation display text for the active style, and compiles
//! the trailing reference list.
//!
//! The pipeline is: document mutation → debounce → scan → assign →
//! change-detect → publish. Scanning always reads the current document at
//! fire time, the whole map is recomputed on every cycle, and a value-equal
//! map is never republished, so reactive consumers re-render exactly when
//! something actually changed.
//!
//! # Example
//!
//! ```rust
//! use manucite_core::{Author, CitationNode, Reference};
//! use manucite_engine::{CitationEngine, Document, ManualClock, ReferenceStore};
//!
//! let mut store = ReferenceStore::new();
//! store.add_reference(
//!     Reference::article("smith2020", "A Study")
//!         .with_author(Author::new("Smith", "Ada"))
//!         .with_year(2020),
//! );
//!
//! let mut document = Document::new();
//! document.push_text("As shown previously");
//! document.push_citation(CitationNode::new(["smith2020"]));
//!
//! let clock = ManualClock::new();
//! let mut engine = CitationEngine::new(store, clock);
//! engine.on_document_mutation();
//! engine.clock().advance(100);
//! engine.tick(&document);
//!
//! let node = CitationNode::new(["smith2020"]);
//! assert_eq!(engine.display_text(&node), "[1]");
//! ```

pub mod bibliography;
pub mod display;
pub mod document;
pub mod engine;
pub mod error;
pub mod io;
pub mod numbering;
pub mod scheduler;
pub mod store;

pub use bibliography::{
    compile_bibliography, format_reference_vancouver, BibliographyEntry, CompiledBibliography,
    FormattedEntry, NO_CITATIONS_PLACEHOLDER,
};
pub use display::{compute_display_text, format_ranges};
pub use document::{Block, CitationScan, CitationSite, Document};
pub use engine::CitationEngine;
pub use error::EngineError;
pub use numbering::{assign_numbers, maps_equal, NumberingMap};
pub use scheduler::{
    recompute, Clock, DebounceScheduler, ManualClock, RecomputeOutcome, SchedulerState,
    SystemClock, DEFAULT_QUIET_MS,
};
pub use store::ReferenceStore;
