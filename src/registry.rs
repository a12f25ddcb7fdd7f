//! Ability-word registry.
//!
//! The registry is plain data: a case-sensitive set of the ability words that
//! may open a rules-text line. It is built once, then shared read-only with
//! every classification call.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::OnceLock;

#[cfg(feature = "serialization")]
use std::path::Path;

use thiserror::Error;

mod bundled {
    include!(concat!(env!("OUT_DIR"), "/bundled_ability_words.rs"));
}

pub use bundled::BUNDLED_ABILITY_WORDS;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read ability word registry {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ability word registry JSON: {0}")]
    Json(String),

    #[error("ability word registry must be a JSON array of strings or a catalog object")]
    UnsupportedShape,

    #[error("ability word registry entry {index} is blank")]
    EmptyWord { index: usize },
}

/// Accepted JSON shapes for an ability word list.
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RegistryDocument {
    Words(Vec<String>),
    Catalog { data: Vec<String> },
}

/// Known ability words, matched exactly against line prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityWordRegistry {
    words: HashSet<String>,
}

impl AbilityWordRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry shipped with the crate, built on first use.
    pub fn bundled() -> &'static Self {
        static BUNDLED: OnceLock<AbilityWordRegistry> = OnceLock::new();
        BUNDLED.get_or_init(|| {
            let registry = Self::from_words(BUNDLED_ABILITY_WORDS.iter().copied());
            tracing::debug!(words = registry.len(), "loaded bundled ability words");
            registry
        })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for word in words {
            registry.insert(word);
        }
        registry
    }

    /// Validate a word list, rejecting blank entries.
    pub fn try_from_words<I, S>(words: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (index, word) in words.into_iter().enumerate() {
            let word: String = word.into();
            if word.trim().is_empty() {
                return Err(RegistryError::EmptyWord { index });
            }
            registry.insert(word);
        }
        Ok(registry)
    }

    /// Parse a JSON word list.
    ///
    /// Accepts either a bare array (`["Landfall", "Raid"]`) or a catalog
    /// object whose `data` field holds the array.
    #[cfg(feature = "serialization")]
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|err| RegistryError::Json(err.to_string()))?;
        let document: RegistryDocument =
            serde_json::from_value(value).map_err(|_| RegistryError::UnsupportedShape)?;
        let words = match document {
            RegistryDocument::Words(words) => words,
            RegistryDocument::Catalog { data } => data,
        };
        Self::try_from_words(words)
    }

    /// Load a JSON word list from disk.
    #[cfg(feature = "serialization")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            words = registry.len(),
            "loaded ability word registry"
        );
        Ok(registry)
    }

    /// Copy of this registry extended with `extra` words.
    pub fn with_extra_words<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = self.clone();
        for word in extra {
            registry.insert(word);
        }
        registry
    }

    /// Add a word. Surrounding whitespace is trimmed; blank words are ignored.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word: String = word.into();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.len() == word.len() {
            self.words.insert(word)
        } else {
            self.words.insert(trimmed.to_string())
        }
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.words.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_registry_contains_known_ability_words() {
        let registry = AbilityWordRegistry::bundled();
        assert!(registry.contains("Landfall"));
        assert!(registry.contains("Council's dilemma"));
        assert!(registry.contains("Will of the council"));
        assert!(!registry.contains("Forecast"));
        assert!(!registry.contains("landfall"));
    }

    #[test]
    fn bundled_registry_is_shared() {
        assert!(std::ptr::eq(
            AbilityWordRegistry::bundled(),
            AbilityWordRegistry::bundled()
        ));
    }

    #[test]
    fn insert_trims_and_ignores_blank_words() {
        let mut registry = AbilityWordRegistry::new();
        assert!(registry.insert(" Raid "));
        assert!(!registry.insert("Raid"));
        assert!(!registry.insert("   "));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Raid"));
    }

    #[test]
    fn try_from_words_rejects_blank_entries() {
        let err = AbilityWordRegistry::try_from_words(["Raid", " "]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyWord { index: 1 }));
    }

    #[test]
    fn with_extra_words_leaves_original_untouched() {
        let base = AbilityWordRegistry::from_words(["Raid"]);
        let extended = base.with_extra_words(["Gotcha"]);
        assert!(!base.contains("Gotcha"));
        assert!(extended.contains("Gotcha"));
        assert!(extended.contains("Raid"));
    }

    #[test]
    fn iter_is_sorted() {
        let registry = AbilityWordRegistry::from_words(["Raid", "Landfall", "Morbid"]);
        let words: Vec<&str> = registry.iter().collect();
        assert_eq!(words, vec!["Landfall", "Morbid", "Raid"]);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn json_array_and_catalog_shapes_parse() {
        let array = AbilityWordRegistry::from_json_str(r#"["Landfall", "Raid"]"#).unwrap();
        assert_eq!(array.len(), 2);

        let catalog = AbilityWordRegistry::from_json_str(
            r#"{"object": "catalog", "total_values": 1, "data": ["Council's dilemma"]}"#,
        )
        .unwrap();
        assert!(catalog.contains("Council's dilemma"));
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn json_with_wrong_shape_is_rejected() {
        let err = AbilityWordRegistry::from_json_str(r#"{"words": 3}"#).unwrap_err();
        assert!(matches!(err, RegistryError::UnsupportedShape));

        let err = AbilityWordRegistry::from_json_str("not json").unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }
}
