/*
SPDX-License-Identifier: MPL-2.0
*/

//! manucite CLI
//!
//! Renders a document's inline citations and its compiled bibliography from
//! a reference catalog and a block-list document file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use manucite_core::CitationStyle;
use manucite_engine::{
    io, CitationEngine, CitationScan, CompiledBibliography, ReferenceStore, SystemClock,
    NO_CITATIONS_PLACEHOLDER,
};

#[derive(Parser)]
#[command(name = "manucite", about = "Citation numbering and bibliography synthesis", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render inline citations and the bibliography for a document.
    Render {
        /// Reference catalog file (JSON or YAML).
        #[arg(long)]
        references: PathBuf,
        /// Document file (JSON or YAML block list).
        #[arg(long)]
        document: PathBuf,
        /// Citation style id (vancouver, ieee, ama, icmje, apa, harvard,
        /// chicago-author-date).
        #[arg(long, default_value = "vancouver")]
        style: CitationStyle,
        /// Skip the bibliography, print only inline citations.
        #[arg(long)]
        no_bibliography: bool,
    },
    /// List the available citation styles.
    Styles,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            references,
            document,
            style,
            no_bibliography,
        } => match render(&references, &document, style, no_bibliography) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Commands::Styles => {
            list_styles();
            ExitCode::SUCCESS
        }
    }
}

fn render(
    references: &std::path::Path,
    document: &std::path::Path,
    style: CitationStyle,
    no_bibliography: bool,
) -> Result<(), manucite_engine::EngineError> {
    let catalog = io::load_catalog(references)?;
    let document = io::load_document(document)?;

    let mut store = ReferenceStore::with_catalog(catalog);
    store.set_citation_style(style);

    // One-shot run: no edit loop, so bypass the debounce entirely.
    let mut engine = CitationEngine::new(store, SystemClock::new());
    engine.flush(&document);

    for site in document.citation_sites() {
        println!("{:>4}  {}", site.position, engine.display_text(&site.node));
    }

    if no_bibliography {
        return Ok(());
    }

    println!();
    println!("References");
    println!();
    match engine.bibliography() {
        CompiledBibliography::NoCitations => println!("{NO_CITATIONS_PLACEHOLDER}"),
        CompiledBibliography::Entries(entries) => {
            for entry in entries {
                println!("{}. {}", entry.number, entry.text);
            }
        }
    }

    Ok(())
}

fn list_styles() {
    for style in CitationStyle::ALL {
        let info = style.info();
        let family = if info.is_numeric { "numeric" } else { "author-year" };
        println!("{:<20} {:<24} [{}]", info.id, info.name, family);
        println!("{:<20} {} e.g. {}", "", info.description, info.example);
    }
}
