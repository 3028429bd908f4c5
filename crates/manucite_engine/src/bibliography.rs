/*
SPDX-License-Identifier: MPL-2.0
*/

//! Bibliography compilation.
//!
//! The compiled reference list is derived state: one entry per cited
//! reference, ordered by assigned number. When an external style formatter
//! has supplied pre-formatted entries those win verbatim; otherwise a
//! deterministic Vancouver fallback renders each catalog entry. Every field
//! is independently optional and nothing here can fail.

use crate::numbering::NumberingMap;
use manucite_core::{Catalog, Reference};
use serde::{Deserialize, Serialize};

/// Empty-state message shown where the bibliography block would render.
pub const NO_CITATIONS_PLACEHOLDER: &str =
    "References will appear here when you add citations to your text.";

/// A pre-formatted entry supplied by an external formatting collaborator.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormattedEntry {
    pub id: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub text: String,
}

/// One rendered bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibliographyEntry {
    pub id: String,
    /// The assigned citation number.
    pub number: usize,
    /// Plain-text rendering.
    pub text: String,
    /// HTML rendering, when a pre-formatted entry supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// The compiled reference list.
///
/// `NoCitations` is an explicit empty state, distinct from a list that ended
/// up empty because every id failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledBibliography {
    NoCitations,
    Entries(Vec<BibliographyEntry>),
}

impl CompiledBibliography {
    pub fn entries(&self) -> &[BibliographyEntry] {
        match self {
            CompiledBibliography::NoCitations => &[],
            CompiledBibliography::Entries(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CompiledBibliography::NoCitations)
    }
}

/// Compile the ordered reference list for the current numbering map.
///
/// Pre-formatted entries are used verbatim in their supplied order when
/// present; otherwise entries are the numbering map's pairs sorted by
/// number, rendered with [`format_reference_vancouver`]. Unresolvable ids
/// are skipped.
pub fn compile_bibliography(
    numbering: &NumberingMap,
    catalog: &Catalog,
    preformatted: &[FormattedEntry],
) -> CompiledBibliography {
    if numbering.is_empty() {
        return CompiledBibliography::NoCitations;
    }

    if !preformatted.is_empty() {
        let entries = preformatted
            .iter()
            .enumerate()
            .map(|(index, entry)| BibliographyEntry {
                id: entry.id.clone(),
                number: numbering.get(entry.id.as_str()).copied().unwrap_or(index + 1),
                text: entry.text.clone(),
                html: if entry.html.is_empty() {
                    None
                } else {
                    Some(entry.html.clone())
                },
            })
            .collect();
        return CompiledBibliography::Entries(entries);
    }

    let mut pairs: Vec<(&String, usize)> =
        numbering.iter().map(|(id, number)| (id, *number)).collect();
    pairs.sort_unstable_by_key(|(_, number)| *number);

    let entries = pairs
        .into_iter()
        .filter_map(|(id, number)| {
            let reference = catalog.get(id.as_str())?;
            Some(BibliographyEntry {
                id: id.clone(),
                number,
                text: format_reference_vancouver(reference),
                html: None,
            })
        })
        .collect();

    CompiledBibliography::Entries(entries)
}

/// Deterministic Vancouver-style rendering of one reference.
///
/// Up to six authors as `Family Initials` joined with `", "`; more than six
/// append `"et al."`. Title gets exactly one trailing period. When a journal
/// is present the source segment is `Journal. Year;Volume(Issue):Pages.`,
/// otherwise just `Year.`; a DOI appends `doi:<doi>`. Absent fields are
/// silently omitted.
pub fn format_reference_vancouver(reference: &Reference) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !reference.authors.is_empty() {
        let author_str = reference
            .authors
            .iter()
            .take(6)
            .map(|author| {
                let initials = author.initials();
                if initials.is_empty() {
                    author.family.clone()
                } else {
                    format!("{} {}", author.family, initials)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        if reference.authors.len() > 6 {
            parts.push(format!("{}, et al.", author_str));
        } else {
            parts.push(format!("{}.", author_str));
        }
    }

    let title = reference.title_or_untitled();
    if title.ends_with('.') {
        parts.push(title.to_string());
    } else {
        parts.push(format!("{}.", title));
    }

    if let Some(journal) = &reference.journal {
        let mut source = journal.clone();
        if reference.has_year() {
            source.push_str(&format!(". {}", reference.year));
        }
        if let Some(volume) = &reference.volume {
            source.push_str(&format!(";{}", volume));
            if let Some(issue) = &reference.issue {
                source.push_str(&format!("({})", issue));
            }
        }
        if let Some(pages) = &reference.pages {
            source.push_str(&format!(":{}", pages));
        }
        parts.push(format!("{}.", source));
    } else if reference.has_year() {
        parts.push(format!("{}.", reference.year));
    }

    if let Some(doi) = &reference.doi {
        parts.push(format!("doi:{}", doi));
    }

    parts.join(" ")
}
