//! Word Records
//!
//! Corpus rows as delivered by the persistent word store.

use std::str::FromStr;

/// A word with its POS flags and embedding vector
#[derive(Debug, Clone, PartialEq)]
pub struct WordRecord {
    /// The word itself (case-sensitive, unique in the corpus)
    pub word: String,
    /// Whether the word can be used as a noun
    pub is_noun: bool,
    /// Whether the word can be used as a verb
    pub is_verb: bool,
    /// Embedding vector (corpus-wide fixed dimension)
    pub embedding: Vec<f32>,
}

impl WordRecord {
    /// Create a record with no POS flags set
    pub fn new(word: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            word: word.into(),
            is_noun: false,
            is_verb: false,
            embedding,
        }
    }

    /// Mark the record as a noun
    pub fn noun(mut self) -> Self {
        self.is_noun = true;
        self
    }

    /// Mark the record as a verb
    pub fn verb(mut self) -> Self {
        self.is_verb = true;
        self
    }

    /// Get embedding dimension
    pub fn dim(&self) -> usize {
        self.embedding.len()
    }

    /// Check that every embedding component is a finite number
    pub fn is_finite(&self) -> bool {
        self.embedding.iter().all(|x| x.is_finite())
    }
}

/// Part-of-speech restriction for candidate words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosFilter {
    /// No restriction
    Any,
    /// Nouns only
    Noun,
    /// Verbs only
    Verb,
}

impl Default for PosFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl PosFilter {
    /// Check whether a row with the given flags passes the filter
    pub fn admits(&self, is_noun: bool, is_verb: bool) -> bool {
        match self {
            PosFilter::Any => true,
            PosFilter::Noun => is_noun,
            PosFilter::Verb => is_verb,
        }
    }

    /// Label for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            PosFilter::Any => "any",
            PosFilter::Noun => "noun",
            PosFilter::Verb => "verb",
        }
    }
}

impl FromStr for PosFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "any" | "none" => Ok(PosFilter::Any),
            "noun" => Ok(PosFilter::Noun),
            "verb" => Ok(PosFilter::Verb),
            other => Err(format!(
                "pos filter must be 'noun', 'verb' or 'any', got '{}'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builders() {
        let record = WordRecord::new("run", vec![0.1, 0.2]).noun().verb();
        assert_eq!(record.word, "run");
        assert!(record.is_noun);
        assert!(record.is_verb);
        assert_eq!(record.dim(), 2);
        assert!(record.is_finite());
    }

    #[test]
    fn test_non_finite_embedding() {
        let record = WordRecord::new("bad", vec![0.1, f32::NAN]);
        assert!(!record.is_finite());
    }

    #[test]
    fn test_filter_admits() {
        assert!(PosFilter::Any.admits(false, false));
        assert!(PosFilter::Noun.admits(true, false));
        assert!(!PosFilter::Noun.admits(false, true));
        assert!(PosFilter::Verb.admits(false, true));
        assert!(!PosFilter::Verb.admits(true, false));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("noun".parse::<PosFilter>(), Ok(PosFilter::Noun));
        assert_eq!("verb".parse::<PosFilter>(), Ok(PosFilter::Verb));
        assert_eq!("".parse::<PosFilter>(), Ok(PosFilter::Any));
        assert_eq!("none".parse::<PosFilter>(), Ok(PosFilter::Any));
        assert!("adjective".parse::<PosFilter>().is_err());
    }
}
