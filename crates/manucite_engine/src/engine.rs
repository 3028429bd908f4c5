/*
SPDX-License-Identifier: MPL-2.0
*/

//! Engine facade.
//!
//! [`CitationEngine`] ties the reference store, the debounce scheduler, and
//! an injected clock into the single service object UI layers hold. The host
//! run loop reports mutations via [`CitationEngine::on_document_mutation`]
//! and drives pending work via [`CitationEngine::tick`]; all reads go
//! through the store it owns.

use crate::bibliography::{compile_bibliography, CompiledBibliography};
use crate::display::compute_display_text;
use crate::document::CitationScan;
use crate::scheduler::{recompute, Clock, DebounceScheduler, RecomputeOutcome};
use crate::store::ReferenceStore;
use manucite_core::CitationNode;
use tracing::debug;

#[derive(Debug)]
pub struct CitationEngine<C: Clock> {
    store: ReferenceStore,
    scheduler: DebounceScheduler,
    clock: C,
}

impl<C: Clock> CitationEngine<C> {
    pub fn new(store: ReferenceStore, clock: C) -> Self {
        Self {
            store,
            scheduler: DebounceScheduler::new(),
            clock,
        }
    }

    /// Override the debounce quiet interval.
    pub fn with_quiet_ms(mut self, quiet_ms: u64) -> Self {
        self.scheduler = DebounceScheduler::with_quiet_ms(quiet_ms);
        self
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ReferenceStore {
        &mut self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Called synchronously on every document change; cancels and re-arms
    /// the debounce timer.
    pub fn on_document_mutation(&mut self) {
        let now = self.clock.now_ms();
        self.scheduler.on_mutation(now);
    }

    /// A citation-insertion request from the dialog/search UI. The only
    /// obligation is that the next recomputation observes the new ids, so
    /// this is a mutation like any other.
    pub fn on_citation_inserted(&mut self, reference_ids: &[String]) {
        debug!(ids = ?reference_ids, "citation inserted");
        self.on_document_mutation();
    }

    /// Run the recompute pipeline if the quiet interval has elapsed.
    pub fn tick<D: CitationScan + ?Sized>(&mut self, document: &D) -> RecomputeOutcome {
        let now = self.clock.now_ms();
        self.scheduler.run_due(now, document, &mut self.store)
    }

    /// Recompute immediately, bypassing the debounce (one-shot callers).
    pub fn flush<D: CitationScan + ?Sized>(&mut self, document: &D) -> RecomputeOutcome {
        self.scheduler.cancel();
        recompute(document, &mut self.store)
    }

    /// Document/editor disposed: drop any pending recompute.
    pub fn teardown(&mut self) {
        self.scheduler.cancel();
    }

    /// Display text for one citation node under the published numbering map
    /// and active style. Derived per call, never cached.
    pub fn display_text(&self, node: &CitationNode) -> String {
        compute_display_text(
            &node.reference_ids,
            self.store.numbering_map(),
            self.store.catalog(),
            self.store.citation_style(),
        )
    }

    /// The compiled bibliography for the published numbering map.
    pub fn bibliography(&self) -> CompiledBibliography {
        compile_bibliography(
            self.store.numbering_map(),
            self.store.catalog(),
            self.store.preformatted_entries(),
        )
    }
}
