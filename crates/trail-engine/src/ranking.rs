//! Candidate scoring and ordering.

use std::sync::Arc;

use thiserror::Error;
use trail_core::models::RouteCandidate;

use crate::providers::{ProviderError, RouteScorer};

/// Scoring failures are fatal to the run: ranking cannot proceed without
/// scores and guessing them would silently misorder results.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("scorer call failed: {0}")]
    Scorer(#[from] ProviderError),
    #[error("scorer returned {got} scores for {expected} candidates")]
    ScoreCountMismatch { expected: usize, got: usize },
}

/// Delegates scoring to the external scorer and sorts by score descending.
pub struct RankingStage {
    scorer: Arc<dyn RouteScorer>,
}

impl RankingStage {
    pub fn new(scorer: Arc<dyn RouteScorer>) -> Self {
        Self { scorer }
    }

    /// Score `candidates` in one batched call and return them ordered by
    /// score descending. An empty input returns empty without invoking the
    /// scorer. Ties keep their relative input order; a non-finite score
    /// sorts below every finite one.
    pub async fn rank(
        &self,
        mut candidates: Vec<RouteCandidate>,
    ) -> Result<Vec<RouteCandidate>, RankingError> {
        if candidates.is_empty() {
            return Ok(candidates);
        }

        let scores = self.scorer.score_batch(&candidates).await?;
        if scores.len() != candidates.len() {
            return Err(RankingError::ScoreCountMismatch {
                expected: candidates.len(),
                got: scores.len(),
            });
        }

        for (candidate, score) in candidates.iter_mut().zip(scores) {
            candidate.score = score;
        }

        candidates.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));

        tracing::debug!(count = candidates.len(), "candidates ranked");
        Ok(candidates)
    }
}

fn sort_key(score: f64) -> f64 {
    if score.is_finite() {
        score
    } else {
        f64::NEG_INFINITY
    }
}
