pub mod rank;
pub mod score;
pub mod suggestion;
pub mod weights;

pub use rank::{rank, RankedEntry};
pub use score::{breakdown, score, ScoreBreakdown};
pub use suggestion::{classify, Suggestion};
pub use weights::ScoreWeights;
