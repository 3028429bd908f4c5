/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation styles.
//!
//! The engine only distinguishes two formatting families; individual style
//! ids exist so documents can record the author's choice and so UIs can
//! present a style picker.

use serde::{Deserialize, Serialize};

/// A selectable citation style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationStyle {
    #[default]
    Vancouver,
    Ieee,
    Ama,
    Icmje,
    Apa,
    Harvard,
    ChicagoAuthorDate,
}

/// The formatting family a style belongs to.
///
/// Display formatting dispatches exhaustively on this, so adding a style
/// forces a decision about which algorithm renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFamily {
    /// Compact bracketed number lists: `[1-3,5]`.
    Numeric,
    /// Parenthetical author-year citations: `(Smith & Doe, 2020)`.
    AuthorYear,
}

/// Descriptive metadata for one style, for pickers and CLI listings.
#[derive(Debug, Clone, Serialize)]
pub struct StyleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub is_numeric: bool,
}

impl CitationStyle {
    /// Every selectable style, in picker order.
    pub const ALL: [CitationStyle; 7] = [
        CitationStyle::Vancouver,
        CitationStyle::Ieee,
        CitationStyle::Ama,
        CitationStyle::Icmje,
        CitationStyle::Apa,
        CitationStyle::Harvard,
        CitationStyle::ChicagoAuthorDate,
    ];

    /// The formatting family this style renders with.
    pub fn family(self) -> StyleFamily {
        match self {
            CitationStyle::Vancouver
            | CitationStyle::Ieee
            | CitationStyle::Ama
            | CitationStyle::Icmje => StyleFamily::Numeric,
            CitationStyle::Apa | CitationStyle::Harvard | CitationStyle::ChicagoAuthorDate => {
                StyleFamily::AuthorYear
            }
        }
    }

    /// Stable string id, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            CitationStyle::Vancouver => "vancouver",
            CitationStyle::Ieee => "ieee",
            CitationStyle::Ama => "ama",
            CitationStyle::Icmje => "icmje",
            CitationStyle::Apa => "apa",
            CitationStyle::Harvard => "harvard",
            CitationStyle::ChicagoAuthorDate => "chicago-author-date",
        }
    }

    pub fn info(self) -> StyleInfo {
        let is_numeric = matches!(self.family(), StyleFamily::Numeric);
        let (name, description, example) = match self {
            CitationStyle::Vancouver => (
                "Vancouver",
                "Numbered, order of first citation. Common in biomedical journals.",
                "[1] or [1-3]",
            ),
            CitationStyle::Ieee => (
                "IEEE",
                "Numbered, bracketed. Engineering and computer science.",
                "[1], [2]",
            ),
            CitationStyle::Ama => (
                "AMA",
                "American Medical Association numbered style.",
                "[1,3]",
            ),
            CitationStyle::Icmje => (
                "ICMJE",
                "Uniform requirements for biomedical manuscripts.",
                "[1-4]",
            ),
            CitationStyle::Apa => (
                "APA",
                "Author-date, 7th edition.",
                "(Smith & Doe, 2020)",
            ),
            CitationStyle::Harvard => (
                "Harvard",
                "Author-date, parenthetical.",
                "(Smith, 2020; Jones, 2021)",
            ),
            CitationStyle::ChicagoAuthorDate => (
                "Chicago (author-date)",
                "Chicago Manual of Style, author-date system.",
                "(Smith et al., 2020)",
            ),
        };
        StyleInfo {
            id: self.id(),
            name,
            description,
            example,
            is_numeric,
        }
    }
}

impl std::str::FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CitationStyle::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| format!("unknown citation style: {s}"))
    }
}

impl std::fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
