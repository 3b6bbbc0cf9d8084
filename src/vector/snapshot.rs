//! Corpus Snapshot
//!
//! Immutable, versioned in-memory view of the word corpus. Embeddings
//! live in a flat row-major matrix alongside a precomputed unit-length
//! copy, so a query costs one dot product per candidate row.

use hashbrown::HashMap;
use tracing::{info, warn};

use crate::corpus::WordRecord;
use crate::error::EngineError;
use crate::vector::similarity::unit_rows;

/// Summary of a snapshot build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows in the published snapshot
    pub loaded: usize,
    /// Records rejected or superseded during the build
    pub skipped: usize,
    /// Corpus embedding dimension (0 for an empty corpus)
    pub dim: usize,
    /// Version of the published snapshot
    pub version: u64,
}

/// Read-only corpus snapshot
///
/// Row i of every column (token, flags, raw matrix, unit matrix) refers to
/// the same word for the snapshot's whole lifetime. Never mutated after
/// build; reloads publish a replacement.
#[derive(Debug)]
pub struct Snapshot {
    version: u64,
    dim: usize,
    tokens: Vec<String>,
    index: HashMap<String, usize>,
    noun_flags: Vec<bool>,
    verb_flags: Vec<bool>,
    raw: Vec<f32>,
    unit: Vec<f32>,
}

impl Snapshot {
    /// Create an empty snapshot (zero rows, dimension unknown)
    pub fn empty(version: u64) -> Self {
        Self {
            version,
            dim: 0,
            tokens: Vec::new(),
            index: HashMap::new(),
            noun_flags: Vec::new(),
            verb_flags: Vec::new(),
            raw: Vec::new(),
            unit: Vec::new(),
        }
    }

    /// Build a snapshot from word records
    ///
    /// The first valid record establishes the corpus dimension; records
    /// that disagree with it, carry empty or non-finite embeddings, are
    /// logged and skipped. Duplicate words keep the latest record. Fails
    /// only when records were offered and none survived.
    pub fn build(version: u64, records: Vec<WordRecord>) -> Result<(Self, LoadReport), EngineError> {
        let offered = records.len();
        let mut dim = 0usize;
        let mut skipped = 0usize;

        let mut tokens: Vec<String> = Vec::with_capacity(offered);
        let mut index: HashMap<String, usize> = HashMap::with_capacity(offered);
        let mut noun_flags: Vec<bool> = Vec::with_capacity(offered);
        let mut verb_flags: Vec<bool> = Vec::with_capacity(offered);
        let mut raw: Vec<f32> = Vec::new();

        for record in records {
            if record.embedding.is_empty() {
                warn!(word = %record.word, "skipping record with empty embedding");
                skipped += 1;
                continue;
            }
            if !record.is_finite() {
                warn!(word = %record.word, "skipping record with non-finite embedding");
                skipped += 1;
                continue;
            }
            if dim == 0 {
                dim = record.dim();
            } else if record.dim() != dim {
                warn!(
                    word = %record.word,
                    got = record.dim(),
                    expected = dim,
                    "skipping record with mismatched dimension"
                );
                skipped += 1;
                continue;
            }

            if let Some(&row) = index.get(&record.word) {
                // Duplicate token: latest record wins
                warn!(word = %record.word, "duplicate word, keeping latest record");
                raw[row * dim..(row + 1) * dim].copy_from_slice(&record.embedding);
                noun_flags[row] = record.is_noun;
                verb_flags[row] = record.is_verb;
                skipped += 1;
                continue;
            }

            index.insert(record.word.clone(), tokens.len());
            tokens.push(record.word);
            noun_flags.push(record.is_noun);
            verb_flags.push(record.is_verb);
            raw.extend_from_slice(&record.embedding);
        }

        if offered > 0 && tokens.is_empty() {
            return Err(EngineError::DataIntegrity(format!(
                "no valid records out of {} offered",
                offered
            )));
        }

        let unit = unit_rows(&raw, dim);
        let loaded = tokens.len();

        info!(
            rows = loaded,
            skipped = skipped,
            dim = dim,
            version = version,
            "corpus snapshot built"
        );

        let snapshot = Self {
            version,
            dim,
            tokens,
            index,
            noun_flags,
            verb_flags,
            raw,
            unit,
        };
        let report = LoadReport {
            loaded,
            skipped,
            dim,
            version,
        };
        Ok((snapshot, report))
    }

    /// Snapshot version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Corpus embedding dimension (0 for an empty corpus)
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the snapshot has no rows
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Row index for an exact, case-sensitive word
    pub fn row_index(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Word at row i
    pub fn token(&self, i: usize) -> &str {
        &self.tokens[i]
    }

    /// Raw embedding at row i
    pub fn row(&self, i: usize) -> &[f32] {
        &self.raw[i * self.dim..(i + 1) * self.dim]
    }

    /// Unit-length embedding at row i
    pub fn unit_row(&self, i: usize) -> &[f32] {
        &self.unit[i * self.dim..(i + 1) * self.dim]
    }

    /// Noun flag at row i
    pub fn is_noun(&self, i: usize) -> bool {
        self.noun_flags[i]
    }

    /// Verb flag at row i
    pub fn is_verb(&self, i: usize) -> bool {
        self.verb_flags[i]
    }

    /// Reconstruct the full record for a word, if present
    pub fn record(&self, word: &str) -> Option<WordRecord> {
        self.row_index(word).map(|i| WordRecord {
            word: self.tokens[i].clone(),
            is_noun: self.noun_flags[i],
            is_verb: self.verb_flags[i],
            embedding: self.row(i).to_vec(),
        })
    }
}
