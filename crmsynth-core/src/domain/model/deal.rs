// crmsynth-core/src/domain/model/deal.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage. Declaration order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum DealStage {
    #[default]
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    #[serde(rename = "Closed-Won")]
    ClosedWon,
    #[serde(rename = "Closed-Lost")]
    ClosedLost,
}

impl DealStage {
    pub const ALL: [DealStage; 6] = [
        DealStage::Prospecting,
        DealStage::Qualification,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }

    /// Late open stages where a deal can stall waiting on the buyer.
    pub fn is_late_open(&self) -> bool {
        matches!(self, Self::Proposal | Self::Negotiation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prospecting => "Prospecting",
            Self::Qualification => "Qualification",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::ClosedWon => "Closed-Won",
            Self::ClosedLost => "Closed-Lost",
        }
    }
}

impl fmt::Display for DealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Product {
    #[default]
    #[serde(rename = "CRM Platform")]
    CrmPlatform,
    #[serde(rename = "Analytics Suite")]
    AnalyticsSuite,
    #[serde(rename = "Integration Package")]
    IntegrationPackage,
    #[serde(rename = "Premium Support")]
    PremiumSupport,
    #[serde(rename = "Custom Development")]
    CustomDevelopment,
    #[serde(rename = "Training Services")]
    TrainingServices,
}

impl Product {
    pub const ALL: [Product; 6] = [
        Product::CrmPlatform,
        Product::AnalyticsSuite,
        Product::IntegrationPackage,
        Product::PremiumSupport,
        Product::CustomDevelopment,
        Product::TrainingServices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrmPlatform => "CRM Platform",
            Self::AnalyticsSuite => "Analytics Suite",
            Self::IntegrationPackage => "Integration Package",
            Self::PremiumSupport => "Premium Support",
            Self::CustomDevelopment => "Custom Development",
            Self::TrainingServices => "Training Services",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum LeadSource {
    #[default]
    #[serde(rename = "Inbound Lead")]
    InboundLead,
    Referral,
    #[serde(rename = "Cold Outreach")]
    ColdOutreach,
    #[serde(rename = "Marketing Campaign")]
    MarketingCampaign,
    #[serde(rename = "Existing Customer")]
    ExistingCustomer,
    Partner,
}

impl LeadSource {
    pub const ALL: [LeadSource; 6] = [
        LeadSource::InboundLead,
        LeadSource::Referral,
        LeadSource::ColdOutreach,
        LeadSource::MarketingCampaign,
        LeadSource::ExistingCustomer,
        LeadSource::Partner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InboundLead => "Inbound Lead",
            Self::Referral => "Referral",
            Self::ColdOutreach => "Cold Outreach",
            Self::MarketingCampaign => "Marketing Campaign",
            Self::ExistingCustomer => "Existing Customer",
            Self::Partner => "Partner",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub customer_id: String,
    pub stage: DealStage,
    /// Strictly positive contract value.
    pub amount: f64,
    /// Set only for `Closed-Won` / `Closed-Lost`.
    pub close_date: Option<NaiveDate>,
    pub close_probability: f64,
    pub product: Product,
    pub source: LeadSource,
}
