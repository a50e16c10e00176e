pub mod backend;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod overrides;
pub mod patterns;
pub mod result;
pub mod shaper;

pub use backend::{ClassifierBackend, KeywordBackend, RuleBackend};
pub use engine::{classify, explain, shared_engine, Evaluation, RuleEngine};
pub use error::ClassifierError;
pub use normalize::normalize;
pub use patterns::{Category, PatternScore, PatternSet};
pub use result::{assemble, Label, ScoringResult};
