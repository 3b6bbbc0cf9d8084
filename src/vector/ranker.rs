//! Similarity Ranker
//!
//! Full-scan cosine ranking against a snapshot's precomputed unit rows.

use std::cmp::Ordering;

use crate::config::DEFAULT_LIMIT;
use crate::corpus::PosFilter;
use crate::error::EngineError;
use crate::vector::similarity::{dot_product, normalized};
use crate::vector::snapshot::Snapshot;

/// A ranked candidate word
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    /// The candidate word
    pub word: String,
    /// Cosine similarity against the query, in [-1, 1]
    pub score: f32,
}

/// Score every snapshot row against `target` and return the top matches
///
/// The target is normalized once; each candidate costs a single dot
/// product against its precomputed unit row. Rows failing the POS filter,
/// the `exclude_row` (the query word itself) and scores below
/// `min_similarity` are dropped. Results are ordered by descending score,
/// ties broken by ascending word; `limit == 0` falls back to the default.
pub fn rank(
    target: &[f32],
    snapshot: &Snapshot,
    pos: PosFilter,
    limit: usize,
    min_similarity: f32,
    exclude_row: Option<usize>,
) -> Result<Vec<SimilarityResult>, EngineError> {
    if snapshot.is_empty() {
        return Ok(Vec::new());
    }
    if target.len() != snapshot.dim() {
        return Err(EngineError::DataIntegrity(format!(
            "target dimension {} does not match corpus dimension {}",
            target.len(),
            snapshot.dim()
        )));
    }

    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
    // Zero-norm targets stay zero and score 0 against everything
    let unit_target = normalized(target);

    let mut results: Vec<SimilarityResult> = Vec::new();
    for i in 0..snapshot.len() {
        if exclude_row == Some(i) {
            continue;
        }
        if !pos.admits(snapshot.is_noun(i), snapshot.is_verb(i)) {
            continue;
        }

        let score = dot_product(&unit_target, snapshot.unit_row(i)).clamp(-1.0, 1.0);
        if score >= min_similarity {
            results.push(SimilarityResult {
                word: snapshot.token(i).to_string(),
                score,
            });
        }
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    results.truncate(limit);
    Ok(results)
}
