// crmsynth-core/src/domain/generation/customers.rs

use chrono::{Duration, NaiveDate};

use crate::domain::error::DomainError;
use crate::domain::model::{
    ChurnTier, CompanySize, Customer, CustomerStatus, Industry, Region, Segment,
};
use crate::domain::random::RandomSource;

// Weighted towards SMB and North America.
const SEGMENT_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];
const REGION_WEIGHTS: [f64; 3] = [0.4, 0.35, 0.25];
const INDUSTRY_WEIGHTS: [f64; 8] = [1.0; 8];
const COMPANY_SIZE_WEIGHTS: [f64; 5] = [0.30, 0.25, 0.20, 0.15, 0.10];

pub const CHURN_RISK_STDDEV: f64 = 0.20;

/// Mean churn risk per segment. Larger accounts churn less.
pub fn churn_risk_mean(segment: Segment) -> f64 {
    match segment {
        Segment::Smb => 0.40,
        Segment::MidMarket => 0.30,
        Segment::Enterprise => 0.20,
    }
}

/// Status weights (Active, Inactive, Churned) per churn tier, so that the
/// status field never contradicts the sampled risk.
fn status_weights(tier: ChurnTier) -> [f64; 3] {
    match tier {
        ChurnTier::Low => [0.90, 0.08, 0.02],
        ChurnTier::Medium => [0.80, 0.15, 0.05],
        ChurnTier::High => [0.55, 0.30, 0.15],
    }
}

/// Selected options with their base weights, in declaration order.
fn restrict<T: Copy + PartialEq>(all: &[T], weights: &[f64], selected: &[T]) -> (Vec<T>, Vec<f64>) {
    all.iter()
        .zip(weights)
        .filter(|(option, _)| selected.contains(option))
        .map(|(option, weight)| (*option, *weight))
        .unzip()
}

pub struct CustomerGenerator {
    as_of: NaiveDate,
    signup_window_days: i64,
    regions: (Vec<Region>, Vec<f64>),
    segments: (Vec<Segment>, Vec<f64>),
}

impl CustomerGenerator {
    pub fn new(as_of: NaiveDate, signup_window_days: i64) -> Self {
        Self {
            as_of,
            signup_window_days,
            regions: (Region::ALL.to_vec(), REGION_WEIGHTS.to_vec()),
            segments: (Segment::ALL.to_vec(), SEGMENT_WEIGHTS.to_vec()),
        }
    }

    /// Limits draws to the given regions and segments. The relative weights
    /// of the remaining options are kept.
    pub fn restricted_to(mut self, regions: &[Region], segments: &[Segment]) -> Self {
        self.regions = restrict(&Region::ALL, &REGION_WEIGHTS, regions);
        self.segments = restrict(&Segment::ALL, &SEGMENT_WEIGHTS, segments);
        self
    }

    /// Produces `count` customers with ids `CUST_00001..`, in order.
    pub fn generate(&self, count: i64, rng: &mut RandomSource) -> Result<Vec<Customer>, DomainError> {
        if count <= 0 {
            return Err(DomainError::InvalidConfig(format!(
                "customer count must be positive, got {}",
                count
            )));
        }
        let count = usize::try_from(count)
            .map_err(|_| DomainError::InvalidConfig(format!("customer count {} is too large", count)))?;

        if self.regions.0.is_empty() || self.segments.0.is_empty() {
            return Err(DomainError::InvalidConfig(
                "at least one region and one segment must be selected".to_string(),
            ));
        }

        let window_start = Duration::try_days(self.signup_window_days.max(0))
            .and_then(|window| self.as_of.checked_sub_signed(window))
            .ok_or_else(|| {
                DomainError::InvalidConfig(format!(
                    "signup window of {} days before {} is out of the calendar range",
                    self.signup_window_days, self.as_of
                ))
            })?;

        Ok((0..count)
            .map(|i| self.generate_one(i + 1, window_start, rng))
            .collect())
    }

    fn generate_one(&self, seq: usize, window_start: NaiveDate, rng: &mut RandomSource) -> Customer {
        let segment = rng
            .weighted_choice(&self.segments.0, &self.segments.1)
            .unwrap_or_default();
        let region = rng
            .weighted_choice(&self.regions.0, &self.regions.1)
            .unwrap_or_default();
        let industry = rng
            .weighted_choice(&Industry::ALL, &INDUSTRY_WEIGHTS)
            .unwrap_or_default();
        let company_size = rng
            .weighted_choice(&CompanySize::ALL, &COMPANY_SIZE_WEIGHTS)
            .unwrap_or_default();
        let signup_date = rng.date_between(window_start, self.as_of);

        let churn_risk_score = round3(rng.gaussian(
            churn_risk_mean(segment),
            CHURN_RISK_STDDEV,
            0.0,
            1.0,
        ));
        let status = rng
            .weighted_choice(
                &CustomerStatus::ALL,
                &status_weights(ChurnTier::from_score(churn_risk_score)),
            )
            .unwrap_or_default();

        Customer {
            id: format!("CUST_{:05}", seq),
            region,
            segment,
            industry,
            company_size,
            status,
            signup_date,
            churn_risk_score,
        }
    }
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}
