// crmsynth-core/src/domain/generation/config.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::error::DomainError;
use crate::domain::model::{Region, Segment};

pub const MAX_CUSTOMERS: i64 = 100_000;
pub const MAX_RECORDS_PER_CUSTOMER: i64 = 50;
pub const MAX_SIGNUP_WINDOW_DAYS: i64 = 3_650;

pub const DEFAULT_CUSTOMER_COUNT: i64 = 500;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SIGNUP_WINDOW_DAYS: i64 = 730;
/// Fixed reference date used when none is configured. Never the wall clock.
pub const DEFAULT_AS_OF: (i32, u32, u32) = (2025, 12, 31);

/// Inclusive `[min, max]` number of child records drawn per customer.
///
/// Bounds are signed on purpose: values arrive from untrusted form fields and
/// a negative bound must be reported, not wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_range_order"))]
pub struct CountRange {
    #[validate(range(min = 0, max = MAX_RECORDS_PER_CUSTOMER, message = "lower bound must be within 0..=50"))]
    pub min: i64,
    #[validate(range(min = 0, max = MAX_RECORDS_PER_CUSTOMER, message = "upper bound must be within 0..=50"))]
    pub max: i64,
}

impl CountRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Bounds as unsigned draw limits. Only meaningful after validation;
    /// anything out of range collapses to 0.
    pub fn bounds(&self) -> (u32, u32) {
        (
            u32::try_from(self.min).unwrap_or(0),
            u32::try_from(self.max).unwrap_or(0),
        )
    }
}

fn validate_range_order(range: &CountRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        let mut err = ValidationError::new("range_order");
        err.message = Some(format!("min ({}) must not exceed max ({})", range.min, range.max).into());
        return Err(err);
    }
    Ok(())
}

/// Parameters of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GenerationConfig {
    #[validate(range(min = 1, max = MAX_CUSTOMERS, message = "customer_count must be within 1..=100000"))]
    #[serde(default = "default_customer_count")]
    pub customer_count: i64,

    #[validate(nested)]
    #[serde(default = "default_deals_per_customer")]
    pub deals_per_customer: CountRange,

    #[validate(nested)]
    #[serde(default = "default_feedback_per_customer")]
    pub feedback_per_customer: CountRange,

    #[serde(default = "default_seed")]
    pub seed: u64,

    /// The "now" of the generated world. Every date lands on or before it.
    #[serde(default = "default_as_of")]
    pub as_of: NaiveDate,

    #[validate(range(min = 1, max = MAX_SIGNUP_WINDOW_DAYS, message = "signup_window_days must be within 1..=3650"))]
    #[serde(default = "default_signup_window_days")]
    pub signup_window_days: i64,

    /// Regions customers may be drawn from.
    #[validate(length(min = 1, message = "at least one region must be selected"))]
    #[serde(default = "default_regions")]
    pub regions: Vec<Region>,

    /// Segments customers may be drawn from.
    #[validate(length(min = 1, message = "at least one segment must be selected"))]
    #[serde(default = "default_segments")]
    pub segments: Vec<Segment>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            customer_count: default_customer_count(),
            deals_per_customer: default_deals_per_customer(),
            feedback_per_customer: default_feedback_per_customer(),
            seed: default_seed(),
            as_of: default_as_of(),
            signup_window_days: default_signup_window_days(),
            regions: default_regions(),
            segments: default_segments(),
        }
    }
}

impl GenerationConfig {
    /// Boundary check: every request is validated here, never assumed valid.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    /// Customer count as a draw limit. Only meaningful after [`Self::check`].
    pub fn customer_total(&self) -> usize {
        usize::try_from(self.customer_count).unwrap_or(0)
    }
}

fn default_customer_count() -> i64 {
    DEFAULT_CUSTOMER_COUNT
}
fn default_deals_per_customer() -> CountRange {
    CountRange::new(1, 3)
}
fn default_feedback_per_customer() -> CountRange {
    CountRange::new(1, 5)
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_as_of() -> NaiveDate {
    let (y, m, d) = DEFAULT_AS_OF;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
fn default_signup_window_days() -> i64 {
    DEFAULT_SIGNUP_WINDOW_DAYS
}
fn default_regions() -> Vec<Region> {
    Region::ALL.to_vec()
}
fn default_segments() -> Vec<Segment> {
    Segment::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GenerationConfig::default().check().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_customer_count() {
        for count in [0, -5] {
            let config = GenerationConfig {
                customer_count: count,
                ..Default::default()
            };
            assert!(matches!(config.check(), Err(DomainError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_customer_count_above_limit() {
        let config = GenerationConfig {
            customer_count: MAX_CUSTOMERS + 1,
            ..Default::default()
        };
        assert!(matches!(config.check(), Err(DomainError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_range_bound() {
        let config = GenerationConfig {
            deals_per_customer: CountRange::new(-1, 3),
            ..Default::default()
        };
        assert!(matches!(config.check(), Err(DomainError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = GenerationConfig {
            feedback_per_customer: CountRange::new(4, 2),
            ..Default::default()
        };
        assert!(matches!(config.check(), Err(DomainError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_oversized_range() {
        let config = GenerationConfig {
            feedback_per_customer: CountRange::new(0, MAX_RECORDS_PER_CUSTOMER + 1),
            ..Default::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_accepts_zero_width_ranges() {
        let config = GenerationConfig {
            customer_count: 1,
            feedback_per_customer: CountRange::new(0, 0),
            ..Default::default()
        };
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_rejects_bad_signup_window() {
        let config = GenerationConfig {
            signup_window_days: 0,
            ..Default::default()
        };
        assert!(config.check().is_err());
        let config = GenerationConfig {
            signup_window_days: MAX_SIGNUP_WINDOW_DAYS + 1,
            ..Default::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_yaml_defaults_fill_missing_fields() -> anyhow::Result<()> {
        let config: GenerationConfig = serde_yaml::from_str("customer_count: 12\nseed: 7\n")?;
        assert_eq!(config.customer_count, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.deals_per_customer, CountRange::new(1, 3));
        assert_eq!(config.feedback_per_customer, CountRange::new(1, 5));
        assert_eq!(config.signup_window_days, DEFAULT_SIGNUP_WINDOW_DAYS);
        Ok(())
    }

    #[test]
    fn test_default_as_of_is_fixed() {
        let a = GenerationConfig::default();
        let b = GenerationConfig::default();
        assert_eq!(a, b);
        assert_eq!(a.as_of, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default());
    }

    #[test]
    fn test_limits_follow_constants() {
        let at_limit = GenerationConfig {
            customer_count: MAX_CUSTOMERS,
            deals_per_customer: CountRange::new(0, MAX_RECORDS_PER_CUSTOMER),
            signup_window_days: MAX_SIGNUP_WINDOW_DAYS,
            ..Default::default()
        };
        assert!(at_limit.check().is_ok());
    }

    #[test]
    fn test_rejects_empty_region_or_segment_selection() {
        let config = GenerationConfig {
            regions: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.check(), Err(DomainError::InvalidConfig(msg)) if msg.contains("region")));

        let config = GenerationConfig {
            segments: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.check(), Err(DomainError::InvalidConfig(msg)) if msg.contains("segment")));
    }

    #[test]
    fn test_yaml_region_and_segment_selection() -> anyhow::Result<()> {
        let config: GenerationConfig =
            serde_yaml::from_str("regions: [\"North America\", APAC]\nsegments: [Enterprise]\n")?;
        assert_eq!(config.regions, vec![Region::NorthAmerica, Region::Apac]);
        assert_eq!(config.segments, vec![Segment::Enterprise]);

        let defaults: GenerationConfig = serde_yaml::from_str("seed: 1\n")?;
        assert_eq!(defaults.regions, Region::ALL.to_vec());
        assert_eq!(defaults.segments, Segment::ALL.to_vec());
        Ok(())
    }

    #[test]
    fn test_bounds_conversion() {
        assert_eq!(CountRange::new(1, 3).bounds(), (1, 3));
        assert_eq!(CountRange::new(-2, 3).bounds(), (0, 3));
    }
}
