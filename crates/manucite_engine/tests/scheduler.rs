/*
SPDX-License-Identifier: MPL-2.0
*/

//! Debounce behavior: burst coalescing, deadline resets, fire-time document
//! state, teardown cancellation, and the no-op publish path, driven by a
//! logical clock.

mod common;
use common::*;

use manucite_core::CitationNode;
use manucite_engine::{CitationEngine, CitationScan, ManualClock, RecomputeOutcome};

#[test]
fn burst_of_mutations_recomputes_once() {
    let store = make_store(vec![make_article("a", "Ames", "A", 2020, "Alpha")]);
    let mut engine = CitationEngine::new(store, ManualClock::new());
    let document = make_document(&[&["a"]]);

    // Five rapid mutations within the quiet window.
    for _ in 0..5 {
        engine.on_document_mutation();
        engine.clock().advance(10);
        // Not due yet: nothing runs.
        assert_eq!(engine.tick(&document), RecomputeOutcome::NotDue);
    }

    // Quiet period elapses after the last mutation.
    engine.clock().advance(100);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Published);
    assert_eq!(engine.store().numbering_map()["a"], 1);

    // Timer disarmed: a later tick does nothing.
    engine.clock().advance(1000);
    assert_eq!(engine.tick(&document), RecomputeOutcome::NotDue);
}

#[test]
fn each_mutation_resets_the_deadline() {
    let store = make_store(vec![make_article("a", "Ames", "A", 2020, "Alpha")]);
    let mut engine = CitationEngine::new(store, ManualClock::new());
    let document = make_document(&[&["a"]]);

    engine.on_document_mutation();
    engine.clock().advance(90);
    // Second mutation 10ms before the first deadline would have fired.
    engine.on_document_mutation();
    engine.clock().advance(90);
    assert_eq!(engine.tick(&document), RecomputeOutcome::NotDue);
    engine.clock().advance(10);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Published);
}

#[test]
fn fire_scans_current_document_not_schedule_time_snapshot() {
    let store = make_store(vec![
        make_article("a", "Ames", "A", 2020, "Alpha"),
        make_article("b", "Bos", "B", 2021, "Beta"),
    ]);
    let mut engine = CitationEngine::new(store, ManualClock::new());

    let mut document = make_document(&[&["a"]]);
    engine.on_document_mutation();

    // Before the timer fires, the document changes again in a way the
    // pending recompute must observe: intermediate states never publish.
    document.insert_citation(0, CitationNode::new(["b"]));
    engine.on_document_mutation();

    engine.clock().advance(100);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Published);
    assert_eq!(engine.store().numbering_map()["b"], 1);
    assert_eq!(engine.store().numbering_map()["a"], 2);
}

#[test]
fn teardown_cancels_pending_recompute() {
    let store = make_store(vec![make_article("a", "Ames", "A", 2020, "Alpha")]);
    let mut engine = CitationEngine::new(store, ManualClock::new());
    let document = make_document(&[&["a"]]);

    engine.on_document_mutation();
    engine.teardown();
    engine.clock().advance(1000);
    assert_eq!(engine.tick(&document), RecomputeOutcome::NotDue);
    assert!(engine.store().numbering_map().is_empty());
}

#[test]
fn value_identical_recompute_is_a_silent_noop() {
    let store = make_store(vec![make_article("a", "Ames", "A", 2020, "Alpha")]);
    let mut engine = CitationEngine::new(store, ManualClock::new());
    let document = make_document(&[&["a"]]);

    engine.on_document_mutation();
    engine.clock().advance(100);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Published);

    // A mutation that does not affect citation structure (text typing).
    engine.on_document_mutation();
    engine.clock().advance(100);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Unchanged);
}

#[test]
fn citation_insertion_event_schedules_recompute() {
    let store = make_store(vec![
        make_article("a", "Ames", "A", 2020, "Alpha"),
        make_article("b", "Bos", "B", 2021, "Beta"),
    ]);
    let mut engine = CitationEngine::new(store, ManualClock::new());

    let mut document = make_document(&[&["a"]]);
    engine.on_document_mutation();
    engine.clock().advance(100);
    engine.tick(&document);

    // The dialog inserts a new citation carrying one reference id.
    let new_ids = vec!["b".to_string()];
    document.push_citation(CitationNode::new(new_ids.clone()));
    engine.on_citation_inserted(&new_ids);

    engine.clock().advance(100);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Published);
    assert_eq!(engine.store().numbering_map()["b"], 2);
}

#[test]
fn custom_quiet_interval_is_respected() {
    let store = make_store(vec![make_article("a", "Ames", "A", 2020, "Alpha")]);
    let mut engine = CitationEngine::new(store, ManualClock::new()).with_quiet_ms(250);
    let document = make_document(&[&["a"]]);

    engine.on_document_mutation();
    engine.clock().advance(249);
    assert_eq!(engine.tick(&document), RecomputeOutcome::NotDue);
    engine.clock().advance(1);
    assert_eq!(engine.tick(&document), RecomputeOutcome::Published);

    // The walk saw exactly the one citation node.
    assert_eq!(document.citation_sites().len(), 1);
}
