/*
SPDX-License-Identifier: MPL-2.0
*/

//! Bibliography compilation: empty state, pre-formatted pass-through, and
//! the Vancouver fallback formatter.

mod common;
use common::*;

use manucite_core::{Author, Reference};
use manucite_engine::{
    assign_numbers, compile_bibliography, format_reference_vancouver, CompiledBibliography,
    FormattedEntry,
};

#[test]
fn empty_numbering_is_explicit_empty_state() {
    let store = make_store(vec![make_article("a", "Ames", "A", 2020, "Alpha")]);
    let compiled = compile_bibliography(&Default::default(), store.catalog(), &[]);
    assert_eq!(compiled, CompiledBibliography::NoCitations);
    assert!(compiled.is_empty());
    assert!(compiled.entries().is_empty());
}

#[test]
fn preformatted_entries_win_verbatim_in_supplied_order() {
    let store = make_store(vec![
        make_article("a", "Ames", "A", 2020, "Alpha"),
        make_article("b", "Bos", "B", 2021, "Beta"),
    ]);
    let document = make_document(&[&["a"], &["b"]]);
    let numbering = assign_numbers(&document);

    let preformatted = vec![
        FormattedEntry {
            id: "b".to_string(),
            html: "<i>Beta</i>".to_string(),
            text: "Bos B. Beta. 2021.".to_string(),
        },
        FormattedEntry {
            id: "a".to_string(),
            html: String::new(),
            text: "Ames A. Alpha. 2020.".to_string(),
        },
    ];

    let compiled = compile_bibliography(&numbering, store.catalog(), &preformatted);
    let entries = compiled.entries();
    assert_eq!(entries.len(), 2);
    // Supplied order preserved, text verbatim, numbers from the map.
    assert_eq!(entries[0].id, "b");
    assert_eq!(entries[0].number, 2);
    assert_eq!(entries[0].text, "Bos B. Beta. 2021.");
    assert_eq!(entries[0].html.as_deref(), Some("<i>Beta</i>"));
    assert_eq!(entries[1].id, "a");
    assert_eq!(entries[1].number, 1);
    assert_eq!(entries[1].html, None);
}

#[test]
fn fallback_sorts_by_assigned_number_and_skips_unresolved() {
    let store = make_store(vec![
        make_article("a", "Ames", "Ada", 2020, "Alpha"),
        make_article("c", "Cid", "Cy", 2022, "Gamma"),
    ]);
    // b is cited but missing from the catalog.
    let document = make_document(&[&["c"], &["b"], &["a"]]);
    let numbering = assign_numbers(&document);

    let compiled = compile_bibliography(&numbering, store.catalog(), &[]);
    let entries = compiled.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "c");
    assert_eq!(entries[0].number, 1);
    assert_eq!(entries[1].id, "a");
    assert_eq!(entries[1].number, 3);
    assert!(entries[0].text.starts_with("Cid C. Gamma."));
}

#[test]
fn vancouver_journal_segment() {
    let mut reference = make_article("r", "Smith", "Ada B.", 2020, "A fluoride study");
    reference.journal = Some("J Dent Res".to_string());
    reference.volume = Some("99".to_string());
    reference.issue = Some("4".to_string());
    reference.pages = Some("362-373".to_string());
    reference.doi = Some("10.1000/xyz".to_string());

    assert_eq!(
        format_reference_vancouver(&reference),
        "Smith AB. A fluoride study. J Dent Res. 2020;99(4):362-373. doi:10.1000/xyz"
    );
}

#[test]
fn vancouver_omits_absent_subfields() {
    let mut reference = make_article("r", "Smith", "A", 2020, "Partial");
    reference.journal = Some("BMJ".to_string());
    // No volume, issue, pages, doi.
    assert_eq!(format_reference_vancouver(&reference), "Smith A. Partial. BMJ. 2020.");

    // Volume without issue.
    reference.volume = Some("12".to_string());
    assert_eq!(format_reference_vancouver(&reference), "Smith A. Partial. BMJ. 2020;12.");
}

#[test]
fn vancouver_no_journal_uses_bare_year() {
    let reference = make_article("r", "Smith", "A", 2019, "No venue");
    assert_eq!(format_reference_vancouver(&reference), "Smith A. No venue. 2019.");
}

#[test]
fn vancouver_six_author_cap() {
    let authors: Vec<(&str, &str)> = vec![
        ("Aa", "A"),
        ("Bb", "B"),
        ("Cc", "C"),
        ("Dd", "D"),
        ("Ee", "E"),
        ("Ff", "F"),
        ("Gg", "G"),
    ];
    let reference = make_article_multi_author("r", authors, 2020, "Crowd");
    let rendered = format_reference_vancouver(&reference);
    assert!(rendered.starts_with("Aa A, Bb B, Cc C, Dd D, Ee E, Ff F, et al."));
    assert!(!rendered.contains("Gg"));
}

#[test]
fn vancouver_never_fails_on_missing_fields() {
    let bare = Reference::default();
    assert_eq!(format_reference_vancouver(&bare), "Untitled.");

    let only_author = Reference {
        authors: vec![Author::new("Solo", "")],
        ..Default::default()
    };
    assert_eq!(format_reference_vancouver(&only_author), "Solo. Untitled.");
}
