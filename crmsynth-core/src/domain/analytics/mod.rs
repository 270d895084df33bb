// crmsynth-core/src/domain/analytics/mod.rs

pub mod metrics;
pub mod pain_points;
pub mod recommendation;

pub use metrics::{ActionSignals, ChurnDistribution, GroupBreakdown, Kpis, MetricsAggregator, MetricsSnapshot};
pub use pain_points::{PainPointAnalyzer, PainPointCount, PainPointSummary};
pub use recommendation::{Priority, Recommendation, RecommendationEngine};
