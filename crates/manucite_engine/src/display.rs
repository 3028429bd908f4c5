/*
SPDX-License-Identifier: MPL-2.0
*/

//! Inline citation display formatting.
//!
//! Display text is re-derived on every render from the live numbering map
//! and catalog and is never cached on the node, so a style change or a
//! renumbering is reflected everywhere at once. Missing data degrades to the
//! `[?]` / `(?)` placeholders; nothing here can fail.

use crate::numbering::NumberingMap;
use manucite_core::{Author, Catalog, CitationStyle, StyleFamily};

/// Placeholder shown when a numeric citation resolves to nothing.
const NUMERIC_PLACEHOLDER: &str = "[?]";
/// Placeholder shown when an author-year citation resolves to nothing.
const AUTHOR_YEAR_PLACEHOLDER: &str = "(?)";

/// Collapse a sorted ascending list of numbers into compact range notation.
///
/// Maximal runs of consecutive integers become `start-end`; singletons are
/// emitted as-is; runs are joined with commas: `[1,2,3,5,6,8]` → `"1-3,5-6,8"`.
pub fn format_ranges(numbers: &[usize]) -> String {
    let mut first = match numbers.first() {
        Some(n) => *n,
        None => return String::new(),
    };
    let mut last = first;
    let mut ranges: Vec<String> = Vec::new();

    let flush = |ranges: &mut Vec<String>, start: usize, end: usize| {
        if start == end {
            ranges.push(start.to_string());
        } else {
            ranges.push(format!("{}-{}", start, end));
        }
    };

    for &n in &numbers[1..] {
        if n == last + 1 {
            last = n;
        } else {
            flush(&mut ranges, first, last);
            first = n;
            last = n;
        }
    }
    flush(&mut ranges, first, last);

    ranges.join(",")
}

/// Compute the display text for one citation node under the active style.
///
/// Numeric family: ids are mapped through the numbering map, unresolved ids
/// dropped, numbers sorted and range-compacted inside brackets. Author-year
/// family: ids are resolved through the catalog and rendered as
/// `(Author, Year; ...)`.
pub fn compute_display_text(
    reference_ids: &[String],
    numbering: &NumberingMap,
    catalog: &Catalog,
    style: CitationStyle,
) -> String {
    if reference_ids.is_empty() {
        return NUMERIC_PLACEHOLDER.to_string();
    }

    match style.family() {
        StyleFamily::Numeric => {
            let mut numbers: Vec<usize> = reference_ids
                .iter()
                .filter_map(|id| numbering.get(id.as_str()).copied())
                .collect();
            numbers.sort_unstable();

            if numbers.is_empty() {
                return NUMERIC_PLACEHOLDER.to_string();
            }
            format!("[{}]", format_ranges(&numbers))
        }
        StyleFamily::AuthorYear => {
            let parts: Vec<String> = reference_ids
                .iter()
                .filter_map(|id| catalog.get(id.as_str()))
                .map(|reference| {
                    format!("{}, {}", author_label(&reference.authors), reference.year_label())
                })
                .collect();

            if parts.is_empty() {
                return AUTHOR_YEAR_PLACEHOLDER.to_string();
            }
            format!("({})", parts.join("; "))
        }
    }
}

/// Short author label: family names joined with `" & "` for one or two
/// authors, `"<first> et al."` for three or more.
fn author_label(authors: &[Author]) -> String {
    match authors {
        [] => "Unknown".to_string(),
        [one] => one.family.clone(),
        [first, second] => format!("{} & {}", first.family, second.family),
        [first, ..] => format!("{} et al.", first.family),
    }
}
