// crmsynth-core/src/domain/analytics/recommendation.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::analytics::metrics::{GroupBreakdown, MetricsSnapshot};
use crate::domain::analytics::pain_points::PainPointAnalyzer;

pub const CHURN_HIGH_PERCENT: f64 = 20.0;
pub const CHURN_MEDIUM_PERCENT: f64 = 10.0;
pub const WIN_RATE_FLOOR: f64 = 30.0;
pub const AVG_SENTIMENT_FLOOR: f64 = -0.1;
pub const FEEDBACK_RESOLUTION_FLOOR: f64 = 70.0;
pub const GROUP_SENTIMENT_FLOOR: f64 = -0.2;
pub const GROUP_HIGH_RISK_CEILING: usize = 5;
pub const GROUP_RESPONSE_HOURS_CEILING: f64 = 24.0;
pub const REFERRAL_RATE: f64 = 0.3;
const PAIN_POINT_INSIGHTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

/// One recommendation entry. Serialized with a `category` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Recommendation {
    PriorityAction {
        priority: Priority,
        metric: String,
        action: String,
        impact: String,
    },
    RevenueOpportunity {
        priority: Priority,
        opportunity: String,
        action: String,
        potential: String,
    },
    OperationalInsight {
        priority: Priority,
        insight: String,
        detail: String,
        recommendation: String,
    },
}

impl Recommendation {
    pub fn priority(&self) -> Priority {
        match self {
            Recommendation::PriorityAction { priority, .. }
            | Recommendation::RevenueOpportunity { priority, .. }
            | Recommendation::OperationalInsight { priority, .. } => *priority,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Recommendation::PriorityAction { .. } => "priority_action",
            Recommendation::RevenueOpportunity { .. } => "revenue_opportunity",
            Recommendation::OperationalInsight { .. } => "operational_insight",
        }
    }

    /// Short title: the metric, opportunity or insight.
    pub fn headline(&self) -> &str {
        match self {
            Recommendation::PriorityAction { metric, .. } => metric,
            Recommendation::RevenueOpportunity { opportunity, .. } => opportunity,
            Recommendation::OperationalInsight { insight, .. } => insight,
        }
    }

    /// What to do about it.
    pub fn next_step(&self) -> &str {
        match self {
            Recommendation::PriorityAction { action, .. }
            | Recommendation::RevenueOpportunity { action, .. } => action,
            Recommendation::OperationalInsight { recommendation, .. } => recommendation,
        }
    }

    /// Supporting figure: impact, potential or detail.
    pub fn context(&self) -> &str {
        match self {
            Recommendation::PriorityAction { impact, .. } => impact,
            Recommendation::RevenueOpportunity { potential, .. } => potential,
            Recommendation::OperationalInsight { detail, .. } => detail,
        }
    }
}

/// `$1,234,567` style amount, rounded to whole units.
pub fn format_money(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0.0 && whole > 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn action(priority: Priority, metric: String, action: String, impact: &str) -> Recommendation {
    Recommendation::PriorityAction {
        priority,
        metric,
        action,
        impact: impact.to_string(),
    }
}

fn opportunity(
    priority: Priority,
    opportunity: String,
    action: &str,
    potential: String,
) -> Recommendation {
    Recommendation::RevenueOpportunity {
        priority,
        opportunity,
        action: action.to_string(),
        potential,
    }
}

fn insight(priority: Priority, insight: String, detail: String, recommendation: String) -> Recommendation {
    Recommendation::OperationalInsight {
        priority,
        insight,
        detail,
        recommendation,
    }
}

#[derive(Debug, Clone, Copy)]
enum GroupKind {
    Region,
    Segment,
}

/// Threshold rules over a [`MetricsSnapshot`].
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Entries ordered High to Low. Within a priority, rule order is kept.
    pub fn recommend(snapshot: &MetricsSnapshot) -> Vec<Recommendation> {
        let mut out = Vec::new();
        Self::priority_actions(snapshot, &mut out);
        Self::revenue_opportunities(snapshot, &mut out);
        Self::operational_insights(snapshot, &mut out);

        for group in &snapshot.region_breakdown {
            out.extend(Self::group_insight(group, GroupKind::Region));
        }
        for group in &snapshot.segment_breakdown {
            out.extend(Self::group_insight(group, GroupKind::Segment));
        }

        for pain in snapshot.pain_points.top(PAIN_POINT_INSIGHTS) {
            out.push(insight(
                Priority::Medium,
                format!("Customers report '{}' problems", pain.pain_point),
                format!("{} negative comments mention it", pain.frequency),
                PainPointAnalyzer::remediation(&pain.pain_point),
            ));
        }

        // Stable sort keeps rule order inside each priority.
        out.sort_by_key(Recommendation::priority);
        out
    }

    fn priority_actions(snapshot: &MetricsSnapshot, out: &mut Vec<Recommendation>) {
        let kpis = &snapshot.kpis;
        let signals = &snapshot.signals;

        let churn_priority = if kpis.churn_percent > CHURN_HIGH_PERCENT {
            Some(Priority::High)
        } else if kpis.churn_percent > CHURN_MEDIUM_PERCENT {
            Some(Priority::Medium)
        } else {
            None
        };
        if let Some(priority) = churn_priority {
            out.push(action(
                priority,
                format!("{:.1}% of customers in the high churn tier", kpis.churn_percent),
                format!(
                    "Immediate outreach to {} high-risk customers",
                    snapshot.churn_risk_distribution.high
                ),
                "Prevent customer churn",
            ));
        }

        // resolution_rate > 0 means at least one deal has closed.
        if kpis.resolution_rate > 0.0 && kpis.win_rate < WIN_RATE_FLOOR {
            out.push(action(
                Priority::High,
                format!("Win rate {:.1}%", kpis.win_rate),
                "Tighten qualification and review lost deals with the sales team".to_string(),
                "Increase revenue closure",
            ));
        }

        if kpis.total_feedback > 0 && kpis.avg_sentiment < AVG_SENTIMENT_FLOOR {
            out.push(action(
                Priority::High,
                format!("Average sentiment {:.2}", kpis.avg_sentiment),
                "Launch a customer experience recovery plan".to_string(),
                "Improve customer satisfaction",
            ));
        }

        if signals.unresolved_negative_feedback > 0 {
            let priority = if kpis.feedback_resolution_rate < FEEDBACK_RESOLUTION_FLOOR {
                Priority::High
            } else {
                Priority::Medium
            };
            out.push(action(
                priority,
                format!("{} unresolved issues", signals.unresolved_negative_feedback),
                format!(
                    "Resolve {} outstanding negative feedback cases",
                    signals.unresolved_negative_feedback
                ),
                "Improve customer satisfaction",
            ));
        }

        if signals.stalled_high_value_deals > 0 {
            out.push(action(
                Priority::Medium,
                format!("{} in pipeline", format_money(signals.stalled_high_value_amount)),
                format!(
                    "Accelerate {} high-value deals in late stages",
                    signals.stalled_high_value_deals
                ),
                "Increase revenue closure",
            ));
        }
    }

    fn revenue_opportunities(snapshot: &MetricsSnapshot, out: &mut Vec<Recommendation>) {
        let signals = &snapshot.signals;

        if signals.upsell_candidates > 0 {
            out.push(opportunity(
                Priority::Medium,
                format!(
                    "Upsell {} satisfied customers with small deal sizes",
                    signals.upsell_candidates
                ),
                "Launch targeted upsell campaign to happy customers",
                format_money(signals.upsell_potential),
            ));
        }

        if signals.satisfied_enterprise_accounts > 0 {
            out.push(opportunity(
                Priority::Medium,
                format!(
                    "Expand within {} satisfied Enterprise accounts",
                    signals.satisfied_enterprise_accounts
                ),
                "Engage account teams for expansion discussions",
                "High: Enterprise expansion deals typically run 2-3x larger".to_string(),
            ));
        }

        if signals.promoter_smb_customers > 0 {
            out.push(opportunity(
                Priority::Low,
                format!(
                    "Leverage {} highly satisfied SMB customers for referrals",
                    signals.promoter_smb_customers
                ),
                "Launch customer referral program",
                format!(
                    "Estimated {:.0} potential referrals",
                    signals.promoter_smb_customers as f64 * REFERRAL_RATE
                ),
            ));
        }
    }

    fn operational_insights(snapshot: &MetricsSnapshot, out: &mut Vec<Recommendation>) {
        let signals = &snapshot.signals;

        if signals.slow_negative_responses > 0 {
            out.push(insight(
                Priority::Medium,
                "Negative feedback waits too long for a response".to_string(),
                format!(
                    "{} negative feedback cases with more than {:.0}h response time",
                    signals.slow_negative_responses, GROUP_RESPONSE_HOURS_CEILING
                ),
                "Escalate negative sentiment feedback automatically".to_string(),
            ));
        }

        if let Some((worst, worst_score)) = lowest(&snapshot.sentiment_by_category) {
            out.push(insight(
                Priority::Medium,
                format!("{} is the most problematic area", worst),
                format!("Average sentiment score: {:.2}", worst_score),
                format!("Prioritize improvements in {}", worst),
            ));
        }

        if snapshot.sentiment_by_channel.len() > 1 {
            let worst = lowest(&snapshot.sentiment_by_channel);
            let best = highest(&snapshot.sentiment_by_channel);
            if let (Some((worst, worst_score)), Some((best, best_score))) = (worst, best) {
                out.push(insight(
                    Priority::Low,
                    "Channel performance varies".to_string(),
                    format!(
                        "{} has the lowest satisfaction ({:.2}), {} the highest ({:.2})",
                        worst, worst_score, best, best_score
                    ),
                    format!("Investigate and improve the {} experience", worst),
                ));
            }
        }

        if snapshot.kpis.total_feedback > 0 {
            out.push(insight(
                Priority::Low,
                "Resolution impact on sentiment".to_string(),
                format!(
                    "Resolved issues: {:.2} avg sentiment, Unresolved: {:.2}",
                    signals.resolved_avg_sentiment, signals.unresolved_avg_sentiment
                ),
                "Focus on improving resolution rates and quality".to_string(),
            ));
        }
    }

    /// First matching rule wins for a group.
    fn group_insight(group: &GroupBreakdown, kind: GroupKind) -> Option<Recommendation> {
        let name = &group.group;

        if group.feedback_count > 0 && group.avg_sentiment < GROUP_SENTIMENT_FLOOR {
            let recommendation = match kind {
                GroupKind::Region => format!("Deploy additional resources to improve {} satisfaction", name),
                GroupKind::Segment => format!("Address satisfaction issues in the {} segment", name),
            };
            return Some(insight(
                Priority::High,
                format!("{} sentiment is low", name),
                format!(
                    "Average sentiment {:.2} across {} feedback entries",
                    group.avg_sentiment, group.feedback_count
                ),
                recommendation,
            ));
        }

        if group.high_risk_customers > GROUP_HIGH_RISK_CEILING {
            let recommendation = match kind {
                GroupKind::Region => format!("Implement a retention program in {}", name),
                GroupKind::Segment => format!("Focus churn prevention on {} customers", name),
            };
            return Some(insight(
                Priority::Medium,
                format!("{} has {} high-risk customers", name, group.high_risk_customers),
                format!("{} customers in total", group.customers),
                recommendation,
            ));
        }

        if group.avg_response_hours > GROUP_RESPONSE_HOURS_CEILING {
            let recommendation = match kind {
                GroupKind::Region => format!("Strengthen support coverage in {}", name),
                GroupKind::Segment => format!("Improve response times for the {} segment", name),
            };
            return Some(insight(
                Priority::Low,
                format!("{} responses are slow", name),
                format!("Average response time {:.1}h", group.avg_response_hours),
                recommendation,
            ));
        }

        None
    }
}

fn lowest(map: &std::collections::BTreeMap<String, f64>) -> Option<(&str, f64)> {
    map.iter()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(k, v)| (k.as_str(), *v))
}

fn highest(map: &std::collections::BTreeMap<String, f64>) -> Option<(&str, f64)> {
    map.iter()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(k, v)| (k.as_str(), *v))
}
