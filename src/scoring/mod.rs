//! Page scoring.
//!
//! Two models share one set of rule bodies:
//!
//! - `factors`: the legacy four-pillar scorers (technical, content,
//!   AI readiness, performance)
//! - `dimensions`: the seven-dimension scorers used by the v2 engine, plus
//!   the adapter back to pillar scores
//! - `engine`: aggregation, grading and the error-page short circuit

pub mod dimensions;
pub mod engine;
pub mod factors;
pub mod signals;
pub mod state;
pub mod thresholds;
pub mod weights;

pub use dimensions::{
    dimensions_to_legacy_scores, score_dimension, Dimension, DimensionScores, PillarScores,
    PARITY_TOLERANCE,
};
pub use engine::{
    score_page, score_page_v2, Engine, EngineKind, EngineOutput, LetterGrade, ScoringResult,
    ScoringResultV2,
};
pub use factors::score_factor;
pub use state::{DeductionScale, DimensionResult, FactorResult, ScoreState, MAX_SCORE};
pub use weights::{
    DimensionWeights, PillarWeights, DEFAULT_DIMENSION_WEIGHTS, DEFAULT_PILLAR_WEIGHTS,
};
