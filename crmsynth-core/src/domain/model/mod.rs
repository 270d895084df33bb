// crmsynth-core/src/domain/model/mod.rs

pub mod customer;
pub mod dataset;
pub mod deal;
pub mod feedback;
pub mod rows;

pub use customer::{ChurnTier, CompanySize, Customer, CustomerStatus, Industry, Region, Segment};
pub use dataset::Dataset;
pub use deal::{Deal, DealStage, LeadSource, Product};
pub use feedback::{Feedback, FeedbackCategory, FeedbackChannel, SentimentLabel};
pub use rows::{CustomerRow, DealRow, FeedbackRow};
