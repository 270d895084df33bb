// crmsynth-core/src/application/dashboard.rs

use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use crate::domain::analytics::{MetricsAggregator, MetricsSnapshot, Recommendation, RecommendationEngine};
use crate::domain::model::Dataset;
use crate::error::CrmSynthError;
use crate::infrastructure::error::InfrastructureError;

// --- DTOs ---
// What the presentation side receives: the snapshot plus the advice derived from it.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    pub seed: u64,
    pub as_of: NaiveDate,
    pub customer_count: usize,
    pub deal_count: usize,
    pub feedback_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub dataset: DatasetInfo,
    pub metrics: MetricsSnapshot,
    pub recommendations: Vec<Recommendation>,
}

impl Dashboard {
    #[instrument(skip_all)]
    pub fn build(dataset: &Dataset) -> Self {
        let metrics = MetricsAggregator::compute(dataset);
        let recommendations = RecommendationEngine::recommend(&metrics);

        Self {
            dataset: DatasetInfo {
                seed: dataset.config().seed,
                as_of: dataset.config().as_of,
                customer_count: dataset.customers().len(),
                deal_count: dataset.deals().len(),
                feedback_count: dataset.feedback().len(),
            },
            metrics,
            recommendations,
        }
    }

    pub fn to_json(&self) -> Result<String, CrmSynthError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CrmSynthError::Infrastructure(InfrastructureError::Json(e)))
    }

    pub fn to_value(&self) -> Result<serde_json::Value, CrmSynthError> {
        serde_json::to_value(self)
            .map_err(|e| CrmSynthError::Infrastructure(InfrastructureError::Json(e)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::assembler::DatasetAssembler;
    use crate::domain::generation::GenerationConfig;

    #[test]
    fn test_dashboard_payload_field_names() -> anyhow::Result<()> {
        let config = GenerationConfig {
            customer_count: 30,
            ..Default::default()
        };
        let dashboard = Dashboard::build(&DatasetAssembler::assemble(&config)?);
        let json = dashboard.to_value()?;

        assert_eq!(json["dataset"]["customer_count"], 30);
        for key in ["churn_percent", "avg_sentiment", "resolution_rate", "win_rate"] {
            assert!(json["metrics"]["kpis"][key].is_number(), "missing kpi {}", key);
        }
        for tier in ["Low", "Medium", "High"] {
            assert!(json["metrics"]["churn_risk_distribution"][tier].is_number());
        }
        assert!(json["metrics"]["sentiment_by_region"].is_object());
        for rec in json["recommendations"].as_array().unwrap() {
            assert!(rec["category"].is_string());
            assert!(rec["priority"].is_string());
        }
        Ok(())
    }

    #[test]
    fn test_build_is_repeatable() -> anyhow::Result<()> {
        let dataset = DatasetAssembler::assemble(&GenerationConfig {
            customer_count: 40,
            ..Default::default()
        })?;
        assert_eq!(Dashboard::build(&dataset), Dashboard::build(&dataset));
        Ok(())
    }
}
