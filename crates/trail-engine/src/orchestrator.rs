//! Pipeline sequencing: sample, assemble, rank, build.

use futures::stream::{self, StreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use trail_core::models::{RouteCriteria, RouteResponse};

use crate::assembler::RouteAssembler;
use crate::ranking::{RankingError, RankingStage};
use crate::response::ResponseBuilder;
use crate::sampler::CandidateSampler;

/// How many routes the final response is truncated to.
const TOP_N: usize = 5;
/// Assembly attempts per run; attempts, not guaranteed successes.
const DEFAULT_MAX_ATTEMPTS: usize = 20;
/// Concurrent assembly attempts in flight, kept modest for downstream
/// provider rate limits.
const DEFAULT_MAX_PARALLEL: usize = 4;

/// Fatal pipeline failure. Everything recoverable (failed category
/// searches, dropped assembly attempts, skipped malformed candidates) is
/// absorbed before this surface; only scoring failures escape.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Ranking(#[from] RankingError),
}

/// Drives one route-generation run end to end.
///
/// "No candidates found" is a valid outcome: the run short-circuits to an
/// empty successful response rather than an error.
pub struct RouteOrchestrator {
    sampler: CandidateSampler,
    assembler: RouteAssembler,
    ranking: RankingStage,
    max_attempts: usize,
    max_parallel: usize,
}

impl RouteOrchestrator {
    pub fn new(sampler: CandidateSampler, assembler: RouteAssembler, ranking: RankingStage) -> Self {
        Self {
            sampler,
            assembler,
            ranking,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }

    /// Cap on assembly attempts per run.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Cap on concurrently in-flight assembly attempts.
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }

    /// Generate ranked route proposals for `criteria`.
    ///
    /// Criteria are assumed pre-validated by the caller.
    pub async fn generate(&self, criteria: &RouteCriteria) -> Result<RouteResponse, EngineError> {
        self.generate_with_rng(criteria, StdRng::from_os_rng()).await
    }

    /// Like [`generate`](Self::generate) but with a fixed seed, so waypoint
    /// selection is reproducible.
    pub async fn generate_seeded(
        &self,
        criteria: &RouteCriteria,
        seed: u64,
    ) -> Result<RouteResponse, EngineError> {
        self.generate_with_rng(criteria, StdRng::seed_from_u64(seed))
            .await
    }

    async fn generate_with_rng(
        &self,
        criteria: &RouteCriteria,
        mut rng: StdRng,
    ) -> Result<RouteResponse, EngineError> {
        let pool = self.sampler.sample(criteria).await;
        if pool.is_empty() {
            tracing::info!("no waypoint candidates found, returning empty result");
            return Ok(ResponseBuilder::build(Vec::new()));
        }

        // Fan out assembly attempts. Each attempt owns a forked RNG and
        // reads the shared pool immutably; results are collected in
        // completion order, which is fine because the final order comes
        // from ranking. Dropping this future abandons in-flight attempts.
        let attempts = (0..self.max_attempts).map(|attempt| {
            let mut attempt_rng = StdRng::from_rng(&mut rng);
            let pool = &pool;
            async move {
                self.assembler
                    .build(criteria, pool, attempt, &mut attempt_rng)
                    .await
            }
        });

        let mut results = stream::iter(attempts).buffer_unordered(self.max_parallel);
        let mut candidates = Vec::new();
        while let Some(result) = results.next().await {
            match result {
                Ok(candidate) => candidates.push(candidate),
                Err(err) => tracing::warn!(error = %err, "assembly attempt dropped"),
            }
        }
        drop(results);
        tracing::info!(
            assembled = candidates.len(),
            attempts = self.max_attempts,
            "assembly stage finished"
        );

        let mut ranked = self.ranking.rank(candidates).await?;
        ranked.truncate(TOP_N);

        Ok(ResponseBuilder::build(ranked))
    }
}
