//! Italic span detection for trading-card rules text.
//!
//! Given a card's rules text (lines separated by `'\r'`) and a registry of
//! ability words, [`generate_italics`] returns the substrings a textbox layout
//! should set in italics: reminder text, ability words, and mode titles.
//!
//! ```
//! use oracle_italics::{AbilityWordRegistry, generate_italics};
//!
//! let registry = AbilityWordRegistry::from_words(["Landfall"]);
//! let text = "Landfall — Whenever a land you control enters, scry 1. (Look at the top card of your library.)";
//! assert_eq!(
//!     generate_italics(text, &registry),
//!     vec!["(Look at the top card of your library.)", "Landfall"],
//! );
//! ```

pub mod italics;
pub mod lines;
pub mod registry;
pub mod reminder_text;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm_api;

pub use italics::{ItalicReason, ItalicSpan, ItalicsEngine, generate_italics};
pub use lines::{LINE_BREAK, Line, normalize_line_breaks, split_lines};
pub use registry::{AbilityWordRegistry, RegistryError};
pub use reminder_text::{shared_trailing_reminder, split_shared_reminder, strip_reminder_text};
