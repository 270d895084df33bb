// crmsynth-core/src/domain/analytics/pain_points.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use crate::domain::model::{Feedback, SentimentLabel};

pub const PAIN_POINT_KEYWORDS: [&str; 16] = [
    "slow",
    "expensive",
    "difficult",
    "complicated",
    "poor",
    "terrible",
    "frustrating",
    "disappointing",
    "issues",
    "problems",
    "downtime",
    "billing",
    "support",
    "training",
    "integration",
    "security",
];

const TOP_N: usize = 10;

fn re_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)\b({})\b", PAIN_POINT_KEYWORDS.join("|"));
        Regex::new(&pattern).unwrap_or_else(|_| {
            // Built from a fixed keyword list; cannot fail in practice.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPointCount {
    pub pain_point: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PainPointSummary {
    /// Most frequent first; ties in alphabetical order.
    pub top_pain_points: Vec<PainPointCount>,
    pub total_mentions: usize,
    pub unique_pain_points: usize,
}

impl PainPointSummary {
    pub fn top(&self, n: usize) -> impl Iterator<Item = &PainPointCount> {
        self.top_pain_points.iter().take(n)
    }
}

pub struct PainPointAnalyzer;

impl PainPointAnalyzer {
    /// Counts keyword mentions in negative feedback. A keyword counts at most
    /// once per comment.
    pub fn analyze(feedback: &[Feedback]) -> PainPointSummary {
        let re = re_keywords();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for entry in feedback
            .iter()
            .filter(|f| f.sentiment_label == SentimentLabel::Negative)
        {
            let hits: BTreeSet<String> = re
                .find_iter(&entry.text)
                .map(|m| m.as_str().to_lowercase())
                .collect();
            for hit in hits {
                *counts.entry(hit).or_insert(0) += 1;
            }
        }

        let total_mentions = counts.values().sum();
        let unique_pain_points = counts.len();

        let mut ranked: Vec<PainPointCount> = counts
            .into_iter()
            .map(|(pain_point, frequency)| PainPointCount {
                pain_point,
                frequency,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.pain_point.cmp(&b.pain_point))
        });
        ranked.truncate(TOP_N);

        PainPointSummary {
            top_pain_points: ranked,
            total_mentions,
            unique_pain_points,
        }
    }

    /// Canned remediation for a pain-point keyword.
    pub fn remediation(pain_point: &str) -> String {
        match pain_point {
            "slow" | "downtime" => "Introduce response-time SLAs and proactive incident updates".to_string(),
            "expensive" | "billing" => "Review pricing tiers and invoice communication".to_string(),
            "support" | "poor" => "Expand support staffing and self-service resources".to_string(),
            "difficult" | "complicated" => {
                "Simplify onboarding flows and refresh product documentation".to_string()
            }
            "integration" | "issues" | "problems" => {
                "Publish integration guides and assign technical account contacts".to_string()
            }
            "training" => "Offer structured customer training sessions".to_string(),
            "security" => "Share security posture documentation with affected accounts".to_string(),
            other => format!("Run a targeted improvement program for '{}' complaints", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::dataset::fixtures;

    fn negative(id: &str, text: &str) -> Feedback {
        let mut f = fixtures::feedback(id, "CUST_00001", -0.6, false);
        f.text = text.to_string();
        f
    }

    #[test]
    fn test_counts_keywords_once_per_comment() {
        let feedback = vec![
            negative("FB_1", "Slow support, slow everything."),
            negative("FB_2", "Billing problems and slow answers."),
        ];
        let summary = PainPointAnalyzer::analyze(&feedback);

        assert_eq!(summary.top_pain_points[0].pain_point, "slow");
        assert_eq!(summary.top_pain_points[0].frequency, 2);
        assert_eq!(summary.total_mentions, 5);
        assert_eq!(summary.unique_pain_points, 4);
    }

    #[test]
    fn test_ignores_non_negative_feedback() {
        let mut happy = fixtures::feedback("FB_1", "CUST_00001", 0.8, true);
        happy.text = "Support was great, nothing slow here.".to_string();
        let summary = PainPointAnalyzer::analyze(&[happy]);
        assert_eq!(summary, PainPointSummary::default());
    }

    #[test]
    fn test_matches_whole_words_only() {
        let feedback = vec![negative("FB_1", "The slowdown was supportive of nothing.")];
        let summary = PainPointAnalyzer::analyze(&feedback);
        assert_eq!(summary.total_mentions, 0);
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let feedback = vec![negative("FB_1", "security and billing")];
        let summary = PainPointAnalyzer::analyze(&feedback);
        let names: Vec<&str> = summary
            .top(2)
            .map(|p| p.pain_point.as_str())
            .collect();
        assert_eq!(names, vec!["billing", "security"]);
    }

    #[test]
    fn test_remediation_falls_back_to_generic_text() {
        assert!(PainPointAnalyzer::remediation("terrible").contains("'terrible'"));
        assert!(PainPointAnalyzer::remediation("billing").contains("pricing"));
    }
}
