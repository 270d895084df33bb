// crmsynth-core/src/domain/model/dataset.rs

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::domain::error::DomainError;
use crate::domain::generation::GenerationConfig;
use crate::domain::model::{Customer, CustomerRow, Deal, DealRow, Feedback, FeedbackRow};

/// Linked, immutable result of one generation request.
///
/// Construction goes through [`Dataset::from_parts`], which refuses any
/// record set that breaks referential integrity. Fields are private so a
/// dataset cannot be edited after it was checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    config: GenerationConfig,
    customers: Vec<Customer>,
    deals: Vec<Deal>,
    feedback: Vec<Feedback>,
}

impl Dataset {
    pub fn from_parts(
        config: GenerationConfig,
        customers: Vec<Customer>,
        deals: Vec<Deal>,
        feedback: Vec<Feedback>,
    ) -> Result<Self, DomainError> {
        let ids = unique_customer_ids(&customers)?;

        if let Some(orphan) = deals.iter().find(|d| !ids.contains(d.customer_id.as_str())) {
            return Err(DomainError::InvalidReference(format!(
                "deal '{}' references unknown customer '{}'",
                orphan.id, orphan.customer_id
            )));
        }
        if let Some(orphan) = feedback
            .iter()
            .find(|f| !ids.contains(f.customer_id.as_str()))
        {
            return Err(DomainError::InvalidReference(format!(
                "feedback '{}' references unknown customer '{}'",
                orphan.id, orphan.customer_id
            )));
        }

        Ok(Self {
            config,
            customers,
            deals,
            feedback,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Index from customer id to its record, used for joins.
    pub fn customer_index(&self) -> HashMap<&str, &Customer> {
        self.customers.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    pub fn customer_rows(&self) -> Vec<CustomerRow> {
        self.customers.iter().map(CustomerRow::from).collect()
    }

    pub fn deal_rows(&self) -> Vec<DealRow> {
        self.deals.iter().map(DealRow::from).collect()
    }

    pub fn feedback_rows(&self) -> Vec<FeedbackRow> {
        self.feedback.iter().map(FeedbackRow::from).collect()
    }
}

/// Collects customer ids, failing on the first duplicate.
pub fn unique_customer_ids(customers: &[Customer]) -> Result<HashSet<&str>, DomainError> {
    let mut ids = HashSet::with_capacity(customers.len());
    for customer in customers {
        if !ids.insert(customer.id.as_str()) {
            return Err(DomainError::InvalidReference(format!(
                "duplicate customer id '{}'",
                customer.id
            )));
        }
    }
    Ok(ids)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::model::{DealStage, Region, Segment};

    #[test]
    fn test_from_parts_accepts_linked_records() -> anyhow::Result<()> {
        let customers = vec![customer("CUST_00001", Region::Europe, Segment::Smb, 0.2)];
        let deals = vec![deal("DEAL_1", "CUST_00001", DealStage::Proposal, 1000.0)];
        let feedback = vec![feedback("FB_1", "CUST_00001", 0.4, true)];

        let dataset =
            Dataset::from_parts(GenerationConfig::default(), customers, deals, feedback)?;
        assert_eq!(dataset.customers().len(), 1);
        assert_eq!(dataset.customer_index().len(), 1);
        Ok(())
    }

    #[test]
    fn test_from_parts_rejects_orphan_deal() {
        let customers = vec![customer("CUST_00001", Region::Europe, Segment::Smb, 0.2)];
        let deals = vec![deal("DEAL_1", "CUST_99999", DealStage::Proposal, 1000.0)];

        let res = Dataset::from_parts(GenerationConfig::default(), customers, deals, vec![]);
        assert!(matches!(res, Err(DomainError::InvalidReference(msg)) if msg.contains("CUST_99999")));
    }

    #[test]
    fn test_from_parts_rejects_orphan_feedback() {
        let customers = vec![customer("CUST_00001", Region::Europe, Segment::Smb, 0.2)];
        let feedback = vec![feedback("FB_1", "CUST_00002", 0.4, true)];

        let res = Dataset::from_parts(GenerationConfig::default(), customers, vec![], feedback);
        assert!(matches!(res, Err(DomainError::InvalidReference(_))));
    }

    #[test]
    fn test_duplicate_customer_ids_are_rejected() {
        let customers = vec![
            customer("CUST_00001", Region::Europe, Segment::Smb, 0.2),
            customer("CUST_00001", Region::Apac, Segment::Enterprise, 0.7),
        ];
        let res = unique_customer_ids(&customers);
        assert!(matches!(res, Err(DomainError::InvalidReference(msg)) if msg.contains("duplicate")));
    }
}
