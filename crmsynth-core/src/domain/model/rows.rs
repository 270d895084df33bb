// crmsynth-core/src/domain/model/rows.rs
//
// Flat, column-stable views of the records, handed to exporters.
// Field names ARE the column names: renaming one breaks downstream files.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::model::{Customer, Deal, Feedback};

pub const CUSTOMER_COLUMNS: [&str; 8] = [
    "customer_id",
    "region",
    "segment",
    "industry",
    "signup_date",
    "churn_risk_score",
    "company_size",
    "status",
];

pub const DEAL_COLUMNS: [&str; 8] = [
    "deal_id",
    "customer_id",
    "stage",
    "amount",
    "close_date",
    "close_probability",
    "product",
    "source",
];

pub const FEEDBACK_COLUMNS: [&str; 10] = [
    "feedback_id",
    "customer_id",
    "sentiment_score",
    "category",
    "timestamp",
    "sentiment_label",
    "channel",
    "resolved",
    "response_time_hours",
    "text",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub customer_id: String,
    pub region: &'static str,
    pub segment: &'static str,
    pub industry: &'static str,
    pub signup_date: NaiveDate,
    pub churn_risk_score: f64,
    pub company_size: &'static str,
    pub status: &'static str,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            customer_id: c.id.clone(),
            region: c.region.as_str(),
            segment: c.segment.as_str(),
            industry: c.industry.as_str(),
            signup_date: c.signup_date,
            churn_risk_score: c.churn_risk_score,
            company_size: c.company_size.as_str(),
            status: c.status.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealRow {
    pub deal_id: String,
    pub customer_id: String,
    pub stage: &'static str,
    pub amount: f64,
    pub close_date: Option<NaiveDate>,
    pub close_probability: f64,
    pub product: &'static str,
    pub source: &'static str,
}

impl From<&Deal> for DealRow {
    fn from(d: &Deal) -> Self {
        Self {
            deal_id: d.id.clone(),
            customer_id: d.customer_id.clone(),
            stage: d.stage.as_str(),
            amount: d.amount,
            close_date: d.close_date,
            close_probability: d.close_probability,
            product: d.product.as_str(),
            source: d.source.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRow {
    pub feedback_id: String,
    pub customer_id: String,
    pub sentiment_score: f64,
    pub category: &'static str,
    pub timestamp: NaiveDate,
    pub sentiment_label: &'static str,
    pub channel: &'static str,
    pub resolved: bool,
    pub response_time_hours: f64,
    pub text: String,
}

impl From<&Feedback> for FeedbackRow {
    fn from(f: &Feedback) -> Self {
        Self {
            feedback_id: f.id.clone(),
            customer_id: f.customer_id.clone(),
            sentiment_score: f.sentiment_score,
            category: f.category.as_str(),
            timestamp: f.timestamp,
            sentiment_label: f.sentiment_label.as_str(),
            channel: f.channel.as_str(),
            resolved: f.resolved,
            response_time_hours: f.response_time_hours,
            text: f.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DealStage;
    use crate::domain::model::dataset::fixtures;
    use crate::domain::model::{Region, Segment};

    fn keys(value: serde_json::Value) -> Vec<String> {
        match value {
            serde_json::Value::Object(map) => {
                let mut k: Vec<String> = map.keys().cloned().collect();
                k.sort();
                k
            }
            _ => Vec::new(),
        }
    }

    fn sorted(cols: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = cols.iter().map(|c| c.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_customer_row_columns_are_stable() -> anyhow::Result<()> {
        let c = fixtures::customer("CUST_00001", Region::Apac, Segment::MidMarket, 0.5);
        let row = CustomerRow::from(&c);
        assert_eq!(row.region, "APAC");
        assert_eq!(row.segment, "Mid-Market");
        assert_eq!(keys(serde_json::to_value(&row)?), sorted(&CUSTOMER_COLUMNS));
        Ok(())
    }

    #[test]
    fn test_deal_row_columns_are_stable() -> anyhow::Result<()> {
        let open = fixtures::deal("DEAL_1", "CUST_00001", DealStage::Proposal, 10.0);
        let row = DealRow::from(&open);
        assert_eq!(row.close_date, None);
        assert_eq!(keys(serde_json::to_value(&row)?), sorted(&DEAL_COLUMNS));

        let won = fixtures::deal("DEAL_2", "CUST_00001", DealStage::ClosedWon, 10.0);
        assert_eq!(
            serde_json::to_value(DealRow::from(&won))?["close_date"],
            serde_json::json!("2025-06-01")
        );
        Ok(())
    }

    #[test]
    fn test_feedback_row_columns_are_stable() -> anyhow::Result<()> {
        let f = fixtures::feedback("FB_1", "CUST_00001", -0.5, false);
        let row = FeedbackRow::from(&f);
        assert_eq!(row.sentiment_label, "Negative");
        assert_eq!(keys(serde_json::to_value(&row)?), sorted(&FEEDBACK_COLUMNS));
        Ok(())
    }
}
