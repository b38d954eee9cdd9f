//! Category scoring
//!
//! A category score is the weighted arithmetic mean of its scorable audit
//! refs: `sum(weight * score) / sum(weight)`, on the closed interval
//! [0, 1]. Refs with weight 0, manual/not-applicable/errored results, or
//! no result at all are excluded from both terms. When nothing is
//! scorable the category score is null, never 0.

mod aggregator;
mod order;

pub use aggregator::ScoreAggregator;
pub use order::group_render_order;
