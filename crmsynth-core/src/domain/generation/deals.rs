// crmsynth-core/src/domain/generation/deals.rs

use chrono::NaiveDate;

use crate::domain::error::DomainError;
use crate::domain::generation::CountRange;
use crate::domain::model::dataset::unique_customer_ids;
use crate::domain::model::{Customer, CustomerStatus, Deal, DealStage, LeadSource, Product, Segment};
use crate::domain::random::RandomSource;

/// Mean and standard deviation of a deal amount for a segment.
pub fn amount_profile(segment: Segment) -> (f64, f64) {
    match segment {
        Segment::Enterprise => (150_000.0, 50_000.0),
        Segment::MidMarket => (50_000.0, 15_000.0),
        Segment::Smb => (15_000.0, 5_000.0),
    }
}

/// Stage weights in `DealStage::ALL` order. Terminal stages stay a minority
/// overall; churned accounts mostly lose.
fn stage_weights(status: CustomerStatus) -> [f64; 6] {
    match status {
        CustomerStatus::Active => [0.20, 0.25, 0.20, 0.15, 0.15, 0.05],
        CustomerStatus::Inactive => [0.30, 0.20, 0.20, 0.10, 0.10, 0.10],
        CustomerStatus::Churned => [0.10, 0.10, 0.10, 0.10, 0.10, 0.50],
    }
}

fn close_probability(stage: DealStage, rng: &mut RandomSource) -> f64 {
    let p = match stage {
        DealStage::Prospecting => rng.uniform(0.1, 0.3),
        DealStage::Qualification => rng.uniform(0.2, 0.4),
        DealStage::Proposal => rng.uniform(0.4, 0.6),
        DealStage::Negotiation => rng.uniform(0.6, 0.8),
        DealStage::ClosedWon => 1.0,
        DealStage::ClosedLost => 0.0,
    };
    (p * 100.0).round() / 100.0
}

pub struct DealGenerator {
    as_of: NaiveDate,
    per_customer: CountRange,
}

impl DealGenerator {
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
    ) -> Result<Vec<Deal>, DomainError> {
        unique_customer_ids(customers)?;

        let (min, max) = self.per_customer.bounds();
        let mut deals = Vec::new();

        for customer in customers {
            let count = rng.uniform_int(min, max);
            for n in 1..=count {
                deals.push(self.generate_one(customer, n, rng));
            }
        }

        Ok(deals)
    }

    fn generate_one(&self, customer: &Customer, n: u32, rng: &mut RandomSource) -> Deal {
        let stage = rng
            .weighted_choice(&DealStage::ALL, &stage_weights(customer.status))
            .unwrap_or_default();

        let (mean, stddev) = amount_profile(customer.segment);
        let amount = rng.gaussian(mean, stddev, mean * 0.1, mean + 4.0 * stddev);
        let amount = (amount * 100.0).round() / 100.0;

        let close_date = stage
            .is_terminal()
            .then(|| rng.date_between(customer.signup_date, self.as_of));

        Deal {
            id: format!("DEAL_{}_{}", customer.id, n),
            customer_id: customer.id.clone(),
            stage,
            amount,
            close_date,
            close_probability: close_probability(stage, rng),
            product: rng.choose(&Product::ALL).unwrap_or_default(),
            source: rng.choose(&LeadSource::ALL).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::generation::CustomerGenerator;
    use crate::domain::model::dataset::fixtures;
    use crate::domain::model::Region;
    use std::collections::HashSet;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
    }

    fn customers(n: i64, rng: &mut RandomSource) -> Vec<Customer> {
        CustomerGenerator::new(as_of(), 365).generate(n, rng).unwrap()
    }

    #[test]
    fn test_deals_reference_known_customers() -> anyhow::Result<()> {
        let mut rng = RandomSource::new(42);
        let customers = customers(50, &mut rng);
        let deals = DealGenerator::new(as_of(), CountRange::new(1, 3)).generate(&customers, &mut rng)?;

        let ids: HashSet<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        assert!(deals.iter().all(|d| ids.contains(d.customer_id.as_str())));
        assert!(deals.len() >= 50 && deals.len() <= 150);

        let deal_ids: HashSet<&str> = deals.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(deal_ids.len(), deals.len());
        Ok(())
    }

    #[test]
    fn test_close_date_only_on_terminal_stages() -> anyhow::Result<()> {
        let mut rng = RandomSource::new(3);
        let customers = customers(200, &mut rng);
        let deals = DealGenerator::new(as_of(), CountRange::new(1, 4)).generate(&customers, &mut rng)?;
        let signup: std::collections::HashMap<&str, NaiveDate> = customers
            .iter()
            .map(|c| (c.id.as_str(), c.signup_date))
            .collect();

        for deal in &deals {
            assert!(deal.amount > 0.0);
            assert_eq!(deal.close_date.is_some(), deal.stage.is_terminal());
            if let Some(date) = deal.close_date {
                assert!(date >= signup[deal.customer_id.as_str()]);
                assert!(date <= as_of());
            }
        }
        Ok(())
    }

    #[test]
    fn test_terminal_stages_are_a_minority() -> anyhow::Result<()> {
        let mut rng = RandomSource::new(77);
        let customers = customers(1_000, &mut rng);
        let deals = DealGenerator::new(as_of(), CountRange::new(1, 3)).generate(&customers, &mut rng)?;
        let terminal = deals.iter().filter(|d| d.stage.is_terminal()).count();
        assert!(terminal * 2 < deals.len());
        Ok(())
    }

    #[test]
    fn test_enterprise_deals_are_larger() -> anyhow::Result<()> {
        let mut rng = RandomSource::new(5);
        let customers = customers(1_000, &mut rng);
        let deals = DealGenerator::new(as_of(), CountRange::new(2, 2)).generate(&customers, &mut rng)?;
        let segment_of: std::collections::HashMap<&str, Segment> = customers
            .iter()
            .map(|c| (c.id.as_str(), c.segment))
            .collect();
        let mean = |segment: Segment| {
            let xs: Vec<f64> = deals
                .iter()
                .filter(|d| segment_of[d.customer_id.as_str()] == segment)
                .map(|d| d.amount)
                .collect();
            xs.iter().sum::<f64>() / xs.len() as f64
        };
        assert!(mean(Segment::Enterprise) > mean(Segment::MidMarket));
        assert!(mean(Segment::MidMarket) > mean(Segment::Smb));
        Ok(())
    }

    #[test]
    fn test_zero_range_yields_no_deals() -> anyhow::Result<()> {
        let mut rng = RandomSource::new(5);
        let customers = customers(10, &mut rng);
        let deals = DealGenerator::new(as_of(), CountRange::new(0, 0)).generate(&customers, &mut rng)?;
        assert!(deals.is_empty());
        Ok(())
    }

    #[test]
    fn test_duplicate_customer_ids_fail() {
        let mut rng = RandomSource::new(5);
        let dupes = vec![
            fixtures::customer("CUST_00001", Region::Europe, Segment::Smb, 0.1),
            fixtures::customer("CUST_00001", Region::Europe, Segment::Smb, 0.1),
        ];
        let res = DealGenerator::new(as_of(), CountRange::new(1, 1)).generate(&dupes, &mut rng);
        assert!(matches!(res, Err(DomainError::InvalidReference(_))));
    }
}
