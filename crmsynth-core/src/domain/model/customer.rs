// crmsynth-core/src/domain/model/customer.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Region {
    #[default]
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    #[serde(rename = "APAC")]
    Apac,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Europe, Region::Apac];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::Apac => "APAC",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses the export spelling, ignoring case.
impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown region '{}' (expected North America, Europe or APAC)", s))
    }
}

// Declaration order doubles as size order: SMB < Mid-Market < Enterprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Segment {
    #[default]
    #[serde(rename = "SMB")]
    Smb,
    #[serde(rename = "Mid-Market")]
    MidMarket,
    Enterprise,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Smb, Segment::MidMarket, Segment::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smb => "SMB",
            Self::MidMarket => "Mid-Market",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|seg| seg.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown segment '{}' (expected SMB, Mid-Market or Enterprise)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Industry {
    #[default]
    Technology,
    Healthcare,
    Finance,
    Manufacturing,
    Retail,
    Education,
    Government,
    #[serde(rename = "Non-Profit")]
    NonProfit,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Education,
        Industry::Government,
        Industry::NonProfit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Education => "Education",
            Self::Government => "Government",
            Self::NonProfit => "Non-Profit",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Headcount band of the customer's company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CompanySize {
    #[default]
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-1000")]
    Large,
    #[serde(rename = "1000+")]
    Huge,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::Micro,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Huge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-1000",
            Self::Huge => "1000+",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Churned,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Active,
        CustomerStatus::Inactive,
        CustomerStatus::Churned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Churned => "Churned",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Churn-risk bucket. Bounds are half-open except the top tier,
/// which also takes a score of exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChurnTier {
    Low,
    Medium,
    High,
}

impl ChurnTier {
    pub const ALL: [ChurnTier; 3] = [ChurnTier::Low, ChurnTier::Medium, ChurnTier::High];

    pub const MEDIUM_FLOOR: f64 = 0.33;
    pub const HIGH_FLOOR: f64 = 0.66;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_FLOOR {
            Self::High
        } else if score >= Self::MEDIUM_FLOOR {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ChurnTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub region: Region,
    pub segment: Segment,
    pub industry: Industry,
    pub company_size: CompanySize,
    pub status: CustomerStatus,
    pub signup_date: NaiveDate,
    /// Sampled churn probability in `[0, 1]`.
    pub churn_risk_score: f64,
}

impl Customer {
    pub fn churn_tier(&self) -> ChurnTier {
        ChurnTier::from_score(self.churn_risk_score)
    }
}
