pub mod assembler;
pub mod orchestrator;
pub mod providers;
pub mod ranking;
pub mod response;
pub mod sampler;
pub mod scoring;

pub use assembler::{AssemblyError, RouteAssembler};
pub use orchestrator::{EngineError, RouteOrchestrator};
pub use providers::{DirectionsProvider, PlaceProvider, ProviderError, RouteScorer};
pub use ranking::{RankingError, RankingStage};
pub use response::ResponseBuilder;
pub use sampler::{CandidateSampler, DEFAULT_CATEGORIES};
pub use scoring::RatingScorer;
