//! Print the italic spans of card rules text.
//!
//! Reads card blocks from stdin, separated by `---` lines:
//!
//! ```text
//! Name: Mirrodin Besieged
//! As Mirrodin Besieged enters, choose Mirran or Phyrexian.
//! • Mirran — At the beginning of your upkeep, create a 1/1 Myr artifact creature token.
//! ---
//! Name: ...
//! ```
//!
//! A line holding only `//` separates the faces of a split card. A reminder
//! that ends every face is reported once for the card instead of per face.
//!
//! Set `RUST_LOG=oracle_italics=trace` to follow each match.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use oracle_italics::italics::{ItalicSpan, ItalicsEngine};
use oracle_italics::lines::{LINE_BREAK, normalize_line_breaks};
use oracle_italics::registry::AbilityWordRegistry;
use oracle_italics::reminder_text::{split_shared_reminder, strip_reminder_text};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "italicize_text", about = "List the italic spans of card rules text")]
struct Args {
    /// JSON ability word list (array or catalog object) replacing the bundled one.
    #[arg(long, env = "ORACLE_ITALICS_REGISTRY")]
    registry: Option<PathBuf>,

    /// Extra ability words, comma separated.
    #[arg(long, env = "ORACLE_ITALICS_EXTRA_WORDS", value_delimiter = ',')]
    extra_words: Vec<String>,

    /// Show why each span is italic.
    #[arg(long)]
    reasons: bool,

    /// Emit one JSON object per card.
    #[arg(long)]
    json: bool,

    /// Also print each face with reminder text removed.
    #[arg(long)]
    strip_reminder: bool,
}

const FACE_SEPARATOR: &str = "//";

#[derive(Debug, Serialize)]
struct CardReport<'a> {
    name: &'a str,
    faces: Vec<FaceReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shared_reminder: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct FaceReport<'a> {
    italics: Vec<ItalicSpan<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stripped: Option<String>,
}

struct CardBlock {
    name: String,
    text: String,
}

impl CardBlock {
    fn faces(&self) -> Vec<&str> {
        let separator = format!("{LINE_BREAK}{FACE_SEPARATOR}{LINE_BREAK}");
        self.text.split(separator.as_str()).collect()
    }
}

fn parse_blocks(input: &str) -> Vec<CardBlock> {
    let input = input.replace("\r\n", "\n");
    let mut blocks = Vec::new();
    for block in input.split("\n---\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let mut lines = block.lines();
        let name_line = lines.next().unwrap_or_default();
        let name = name_line.strip_prefix("Name: ").unwrap_or(name_line).trim();
        if name.is_empty() {
            continue;
        }

        let text = lines.collect::<Vec<_>>().join("\n");
        blocks.push(CardBlock {
            name: name.to_string(),
            text: normalize_line_breaks(text.trim()).into_owned(),
        });
    }
    blocks
}

fn load_registry(args: &Args) -> Result<AbilityWordRegistry, Box<dyn std::error::Error>> {
    let base = match &args.registry {
        Some(path) => AbilityWordRegistry::load(path)?,
        None => AbilityWordRegistry::bundled().clone(),
    };
    Ok(base.with_extra_words(args.extra_words.iter().map(String::as_str)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let registry = load_registry(&args)?;
    tracing::info!(words = registry.len(), "ability word registry ready");
    let engine = ItalicsEngine::new(&registry);

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let blocks = parse_blocks(&input);
    if blocks.is_empty() {
        tracing::warn!("no card blocks on stdin");
    }

    for block in &blocks {
        let (faces, shared_reminder) = split_shared_reminder(&block.faces());
        if let Some(reminder) = shared_reminder {
            tracing::debug!(card = %block.name, reminder, "reminder shared by all faces");
        }
        let report = CardReport {
            name: &block.name,
            faces: faces
                .iter()
                .map(|&face| FaceReport {
                    italics: engine.spans(face),
                    stripped: args.strip_reminder.then(|| strip_reminder_text(face)),
                })
                .collect(),
            shared_reminder: shared_reminder.filter(|_| !args.strip_reminder),
        };

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        println!("{}", report.name);
        let multi_face = report.faces.len() > 1;
        for (index, face) in report.faces.iter().enumerate() {
            if multi_face {
                println!("  face {}:", index + 1);
            }
            if face.italics.is_empty() {
                println!("  (no italics)");
            }
            for span in &face.italics {
                if args.reasons {
                    println!("  [{}] {}", span.reason.as_str(), span.text);
                } else {
                    println!("  {}", span.text);
                }
            }
            if let Some(stripped) = &face.stripped {
                println!("  stripped: {}", stripped.replace(LINE_BREAK, " / "));
            }
        }
        if let Some(reminder) = report.shared_reminder {
            println!("  shared reminder: {reminder}");
        }
    }

    Ok(())
}
