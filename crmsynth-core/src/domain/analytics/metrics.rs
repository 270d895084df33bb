// crmsynth-core/src/domain/analytics/metrics.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::analytics::pain_points::{PainPointAnalyzer, PainPointSummary};
use crate::domain::model::{
    ChurnTier, Customer, Dataset, DealStage, Feedback, Region, Segment, SentimentLabel,
};

// Thresholds used to derive the action signals.
pub const UNRESOLVED_NEGATIVE_BELOW: f64 = -0.3;
pub const SLOW_RESPONSE_HOURS: f64 = 24.0;
pub const HIGH_VALUE_QUANTILE: f64 = 0.8;
pub const HAPPY_CUSTOMER_ABOVE: f64 = 0.5;
pub const UPSELL_DEAL_RATIO: f64 = 0.7;
pub const SATISFIED_ENTERPRISE_ABOVE: f64 = 0.3;
pub const PROMOTER_ABOVE: f64 = 0.6;

/// Running arithmetic mean. An empty mean reads as `0.0`.
#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

fn mean_of(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut mean = Mean::default();
    values.into_iter().for_each(|v| mean.push(v));
    mean.value()
}

/// `part / whole` as a percentage, `0.0` when `whole` is zero.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Quantile with linear interpolation between closest ranks.
fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChurnDistribution {
    #[serde(rename = "Low")]
    pub low: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "High")]
    pub high: usize,
}

impl ChurnDistribution {
    pub fn count(&self, tier: ChurnTier) -> usize {
        match tier {
            ChurnTier::Low => self.low,
            ChurnTier::Medium => self.medium,
            ChurnTier::High => self.high,
        }
    }

    fn record(&mut self, tier: ChurnTier) {
        match tier {
            ChurnTier::Low => self.low += 1,
            ChurnTier::Medium => self.medium += 1,
            ChurnTier::High => self.high += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Headline numbers. Percentages are on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Kpis {
    pub total_customers: usize,
    pub total_deals: usize,
    pub total_feedback: usize,
    /// Share of customers in the High churn tier.
    pub churn_percent: f64,
    pub avg_sentiment: f64,
    /// Share of deals that reached a terminal stage.
    pub resolution_rate: f64,
    /// Closed-Won over all closed deals.
    pub win_rate: f64,
    pub feedback_resolution_rate: f64,
    pub positive_sentiment_rate: f64,
    pub negative_sentiment_rate: f64,
    /// Total amount of deals still open.
    pub total_pipeline: f64,
    pub avg_deal_size: f64,
    pub avg_response_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupBreakdown {
    pub group: String,
    pub customers: usize,
    pub feedback_count: usize,
    pub avg_sentiment: f64,
    pub high_risk_customers: usize,
    pub avg_response_hours: f64,
}

/// Counts the recommendation rules look at beyond the headline KPIs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionSignals {
    pub unresolved_negative_feedback: usize,
    pub slow_negative_responses: usize,
    pub stalled_high_value_deals: usize,
    pub stalled_high_value_amount: f64,
    pub upsell_candidates: usize,
    pub upsell_potential: f64,
    pub satisfied_enterprise_accounts: usize,
    pub promoter_smb_customers: usize,
    pub resolved_avg_sentiment: f64,
    pub unresolved_avg_sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Mean sentiment per region; regions without feedback are absent.
    pub sentiment_by_region: BTreeMap<String, f64>,
    pub churn_risk_distribution: ChurnDistribution,
    pub kpis: Kpis,
    pub sentiment_by_segment: BTreeMap<String, f64>,
    pub sentiment_by_category: BTreeMap<String, f64>,
    pub sentiment_by_channel: BTreeMap<String, f64>,
    /// Mean sentiment per calendar month (`YYYY-MM`), oldest first.
    pub sentiment_trend: BTreeMap<String, f64>,
    pub customers_by_region: BTreeMap<String, usize>,
    pub customers_by_segment: BTreeMap<String, usize>,
    pub deals_by_stage: BTreeMap<String, usize>,
    pub region_breakdown: Vec<GroupBreakdown>,
    pub segment_breakdown: Vec<GroupBreakdown>,
    pub signals: ActionSignals,
    pub pain_points: PainPointSummary,
}

/// Mean sentiment of feedback grouped by `key`, omitting empty groups.
fn sentiment_by<K: Ord + ToString>(
    feedback: &[Feedback],
    key: impl Fn(&Feedback) -> Option<K>,
) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<K, Mean> = BTreeMap::new();
    for entry in feedback {
        if let Some(k) = key(entry) {
            groups.entry(k).or_default().push(entry.sentiment_score);
        }
    }
    groups
        .into_iter()
        .map(|(k, mean)| (k.to_string(), mean.value()))
        .collect()
}

fn breakdown<G: Copy + PartialEq + ToString>(
    groups: &[G],
    customers: &[Customer],
    feedback: &[Feedback],
    index: &HashMap<&str, &Customer>,
    group_of: impl Fn(&Customer) -> G,
) -> Vec<GroupBreakdown> {
    groups
        .iter()
        .filter_map(|&group| {
            let members: Vec<&Customer> =
                customers.iter().filter(|c| group_of(c) == group).collect();
            if members.is_empty() {
                return None;
            }

            let mut sentiment = Mean::default();
            let mut response = Mean::default();
            for entry in feedback {
                let owner = index.get(entry.customer_id.as_str());
                if owner.is_some_and(|c| group_of(c) == group) {
                    sentiment.push(entry.sentiment_score);
                    response.push(entry.response_time_hours);
                }
            }

            Some(GroupBreakdown {
                group: group.to_string(),
                customers: members.len(),
                feedback_count: sentiment.count,
                avg_sentiment: sentiment.value(),
                high_risk_customers: members
                    .iter()
                    .filter(|c| c.churn_tier() == ChurnTier::High)
                    .count(),
                avg_response_hours: response.value(),
            })
        })
        .collect()
}

/// Pure reduction of a [`Dataset`] into a [`MetricsSnapshot`].
pub struct MetricsAggregator;

impl MetricsAggregator {
    pub fn compute(dataset: &Dataset) -> MetricsSnapshot {
        let customers = dataset.customers();
        let deals = dataset.deals();
        let feedback = dataset.feedback();
        let index = dataset.customer_index();

        let mut churn_risk_distribution = ChurnDistribution::default();
        let mut customers_by_region = BTreeMap::new();
        let mut customers_by_segment = BTreeMap::new();
        for customer in customers {
            churn_risk_distribution.record(customer.churn_tier());
            *customers_by_region
                .entry(customer.region.to_string())
                .or_insert(0) += 1;
            *customers_by_segment
                .entry(customer.segment.to_string())
                .or_insert(0) += 1;
        }

        let mut deals_by_stage = BTreeMap::new();
        for deal in deals {
            *deals_by_stage.entry(deal.stage.to_string()).or_insert(0) += 1;
        }

        MetricsSnapshot {
            sentiment_by_region: sentiment_by(feedback, |f| {
                index.get(f.customer_id.as_str()).map(|c| c.region)
            }),
            churn_risk_distribution,
            kpis: Self::kpis(dataset, &churn_risk_distribution),
            sentiment_by_segment: sentiment_by(feedback, |f| {
                index.get(f.customer_id.as_str()).map(|c| c.segment)
            }),
            sentiment_by_category: sentiment_by(feedback, |f| Some(f.category)),
            sentiment_by_channel: sentiment_by(feedback, |f| Some(f.channel)),
            sentiment_trend: sentiment_by(feedback, |f| {
                Some(f.timestamp.format("%Y-%m").to_string())
            }),
            customers_by_region,
            customers_by_segment,
            deals_by_stage,
            region_breakdown: breakdown(&Region::ALL, customers, feedback, &index, |c| c.region),
            segment_breakdown: breakdown(&Segment::ALL, customers, feedback, &index, |c| {
                c.segment
            }),
            signals: Self::signals(dataset, &index),
            pain_points: PainPointAnalyzer::analyze(feedback),
        }
    }

    fn kpis(dataset: &Dataset, churn: &ChurnDistribution) -> Kpis {
        let deals = dataset.deals();
        let feedback = dataset.feedback();

        let won = deals.iter().filter(|d| d.stage == DealStage::ClosedWon).count();
        let lost = deals.iter().filter(|d| d.stage == DealStage::ClosedLost).count();
        let label_count =
            |label: SentimentLabel| feedback.iter().filter(|f| f.sentiment_label == label).count();

        Kpis {
            total_customers: dataset.customers().len(),
            total_deals: deals.len(),
            total_feedback: feedback.len(),
            churn_percent: percent(churn.high, churn.total()),
            avg_sentiment: mean_of(feedback.iter().map(|f| f.sentiment_score)),
            resolution_rate: percent(won + lost, deals.len()),
            win_rate: percent(won, won + lost),
            feedback_resolution_rate: percent(
                feedback.iter().filter(|f| f.resolved).count(),
                feedback.len(),
            ),
            positive_sentiment_rate: percent(label_count(SentimentLabel::Positive), feedback.len()),
            negative_sentiment_rate: percent(label_count(SentimentLabel::Negative), feedback.len()),
            total_pipeline: deals
                .iter()
                .filter(|d| !d.stage.is_terminal())
                .map(|d| d.amount)
                .sum(),
            avg_deal_size: mean_of(deals.iter().map(|d| d.amount)),
            avg_response_hours: mean_of(feedback.iter().map(|f| f.response_time_hours)),
        }
    }

    fn signals(dataset: &Dataset, index: &HashMap<&str, &Customer>) -> ActionSignals {
        let deals = dataset.deals();
        let feedback = dataset.feedback();

        let amounts: Vec<f64> = deals.iter().map(|d| d.amount).collect();
        let stalled: Vec<f64> = match quantile(&amounts, HIGH_VALUE_QUANTILE) {
            Some(cutoff) => deals
                .iter()
                .filter(|d| d.amount > cutoff && d.stage.is_late_open())
                .map(|d| d.amount)
                .collect(),
            None => Vec::new(),
        };

        // Customers with at least one clearly happy comment whose average
        // deal is well below the book average.
        let happy: BTreeSet<&str> = feedback
            .iter()
            .filter(|f| f.sentiment_score > HAPPY_CUSTOMER_ABOVE)
            .map(|f| f.customer_id.as_str())
            .collect();
        let mut deal_means: BTreeMap<&str, Mean> = BTreeMap::new();
        for deal in deals.iter().filter(|d| happy.contains(d.customer_id.as_str())) {
            deal_means
                .entry(deal.customer_id.as_str())
                .or_default()
                .push(deal.amount);
        }
        let avg_deal_size = mean_of(amounts.iter().copied());
        let upsell: Vec<f64> = deal_means
            .values()
            .map(Mean::value)
            .filter(|&m| m < avg_deal_size * UPSELL_DEAL_RATIO)
            .collect();
        let upsell_potential = if upsell.is_empty() {
            0.0
        } else {
            (avg_deal_size - mean_of(upsell.iter().copied())) * upsell.len() as f64
        };

        let distinct_customers = |segment: Segment, above: f64| {
            feedback
                .iter()
                .filter(|f| f.sentiment_score > above)
                .filter(|f| {
                    index
                        .get(f.customer_id.as_str())
                        .is_some_and(|c| c.segment == segment)
                })
                .map(|f| f.customer_id.as_str())
                .collect::<BTreeSet<_>>()
                .len()
        };

        ActionSignals {
            unresolved_negative_feedback: feedback
                .iter()
                .filter(|f| f.sentiment_score < UNRESOLVED_NEGATIVE_BELOW && !f.resolved)
                .count(),
            slow_negative_responses: feedback
                .iter()
                .filter(|f| f.sentiment_score < 0.0 && f.response_time_hours > SLOW_RESPONSE_HOURS)
                .count(),
            stalled_high_value_deals: stalled.len(),
            stalled_high_value_amount: stalled.iter().sum(),
            upsell_candidates: upsell.len(),
            upsell_potential,
            satisfied_enterprise_accounts: distinct_customers(
                Segment::Enterprise,
                SATISFIED_ENTERPRISE_ABOVE,
            ),
            promoter_smb_customers: distinct_customers(Segment::Smb, PROMOTER_ABOVE),
            resolved_avg_sentiment: mean_of(
                feedback
                    .iter()
                    .filter(|f| f.resolved)
                    .map(|f| f.sentiment_score),
            ),
            unresolved_avg_sentiment: mean_of(
                feedback
                    .iter()
                    .filter(|f| !f.resolved)
                    .map(|f| f.sentiment_score),
            ),
        }
    }
}
