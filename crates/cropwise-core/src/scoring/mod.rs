pub mod engine;
pub mod outcome;

pub use engine::{rank, score_crop, RecommendOptions};
pub use outcome::{Criterion, CriterionScore, Recommendation, ScoredCrop, Suitability};
