// crmsynth-core/src/application/assembler.rs

use tracing::{debug, info, instrument};

use crate::domain::generation::{
    CustomerGenerator, DealGenerator, FeedbackGenerator, GenerationConfig,
};
use crate::domain::model::Dataset;
use crate::domain::random::RandomSource;
use crate::error::CrmSynthError;

/// Runs customers, then deals, then feedback from one seeded source.
pub struct DatasetAssembler;

impl DatasetAssembler {
    /// Validates `config` and builds a linked dataset.
    ///
    /// Any failure aborts the whole request; no partial dataset escapes.
    #[instrument(skip(config), fields(seed = config.seed, customers = config.customer_count))]
    pub fn assemble(config: &GenerationConfig) -> Result<Dataset, CrmSynthError> {
        config.check()?;

        let start = std::time::Instant::now();
        // Request-local: one source per call keeps runs reproducible and isolated.
        let mut rng = RandomSource::new(config.seed);

        let customers = CustomerGenerator::new(config.as_of, config.signup_window_days)
            .restricted_to(&config.regions, &config.segments)
            .generate(config.customer_count, &mut rng)?;
        debug!(count = customers.len(), "Customers generated");

        let deals = DealGenerator::new(config.as_of, config.deals_per_customer)
            .generate(&customers, &mut rng)?;
        debug!(count = deals.len(), "Deals generated");

        let feedback = FeedbackGenerator::new(config.as_of, config.feedback_per_customer)
            .generate(&customers, &mut rng)?;
        debug!(count = feedback.len(), "Feedback generated");

        let dataset = Dataset::from_parts(config.clone(), customers, deals, feedback)?;

        info!(
            customers = dataset.customers().len(),
            deals = dataset.deals().len(),
            feedback = dataset.feedback().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Dataset assembled"
        );
        Ok(dataset)
    }
}
