// crmsynth-core/src/domain/generation/feedback.rs

use chrono::NaiveDate;

use crate::domain::error::DomainError;
use crate::domain::generation::customers::round3;
use crate::domain::generation::{text, CountRange};
use crate::domain::model::dataset::unique_customer_ids;
use crate::domain::model::{Customer, Feedback, FeedbackCategory, FeedbackChannel, SentimentLabel};
use crate::domain::random::RandomSource;

// sentiment mean = SLOPE * (1 - churn_risk) + INTERCEPT
// churn 0.0 -> +0.6, churn 0.5 -> 0.0, churn 1.0 -> -0.6
pub const SENTIMENT_SLOPE: f64 = 1.2;
pub const SENTIMENT_INTERCEPT: f64 = -0.6;
pub const SENTIMENT_STDDEV: f64 = 0.30;

const CATEGORY_WEIGHTS: [f64; 8] = [1.0; 8];
const RESOLVED_PROBABILITY: f64 = 0.8;
const NEGATIVE_RESPONSE_MEAN_HOURS: f64 = 24.0;
const DEFAULT_RESPONSE_MEAN_HOURS: f64 = 12.0;

/// Expected sentiment for a customer with the given churn risk.
/// Strictly decreasing in `churn_risk`.
pub fn sentiment_mean(churn_risk: f64) -> f64 {
    SENTIMENT_SLOPE * (1.0 - churn_risk) + SENTIMENT_INTERCEPT
}

/// One sentiment draw, clamped to `[-1, 1]` and rounded to 3 decimals.
pub fn sample_sentiment(churn_risk: f64, rng: &mut RandomSource) -> f64 {
    round3(rng.gaussian(sentiment_mean(churn_risk), SENTIMENT_STDDEV, -1.0, 1.0))
}

pub struct FeedbackGenerator {
    as_of: NaiveDate,
    per_customer: CountRange,
}

impl FeedbackGenerator {
    pub fn new(as_of: NaiveDate, per_customer: CountRange) -> Self {
        Self {
            as_of,
            per_customer,
        }
    }

    pub fn generate(
        &self,
        customers: &[Customer],
        rng: &mut RandomSource,
    ) -> Result<Vec<Feedback>, DomainError> {
        unique_customer_ids(customers)?;

        let (min, max) = self.per_customer.bounds();
        let mut feedback = Vec::new();

        for customer in customers {
            let count = rng.uniform_int(min, max);
            for n in 1..=count {
                feedback.push(self.generate_one(customer, n, rng));
            }
        }

        Ok(feedback)
    }

    fn generate_one(&self, customer: &Customer, n: u32, rng: &mut RandomSource) -> Feedback {
        let sentiment_score = sample_sentiment(customer.churn_risk_score, rng);
        let sentiment_label = SentimentLabel::from_score(sentiment_score);

        // Category is drawn independently of the score.
        let category = rng
            .weighted_choice(&FeedbackCategory::ALL, &CATEGORY_WEIGHTS)
            .unwrap_or_default();
        let channel = rng.choose(&FeedbackChannel::ALL).unwrap_or_default();
        let timestamp = rng.date_between(customer.signup_date, self.as_of);
        let resolved = rng.chance(RESOLVED_PROBABILITY);

        let response_mean = if sentiment_score < 0.0 {
            NEGATIVE_RESPONSE_MEAN_HOURS
        } else {
            DEFAULT_RESPONSE_MEAN_HOURS
        };
        let response_time_hours = (rng.exponential(response_mean) * 10.0).round() / 10.0;

        Feedback {
            id: format!("FB_{}_{}", customer.id, n),
            customer_id: customer.id.clone(),
            sentiment_score,
            sentiment_label,
            category,
            channel,
            timestamp,
            resolved,
            response_time_hours,
            text: text::compose(sentiment_label, rng),
        }
    }
}
