// crmsynth-core/src/domain/model/feedback.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum FeedbackCategory {
    #[default]
    #[serde(rename = "Product Quality")]
    ProductQuality,
    #[serde(rename = "Customer Service")]
    CustomerService,
    Pricing,
    Features,
    Performance,
    Support,
    Implementation,
    Training,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 8] = [
        FeedbackCategory::ProductQuality,
        FeedbackCategory::CustomerService,
        FeedbackCategory::Pricing,
        FeedbackCategory::Features,
        FeedbackCategory::Performance,
        FeedbackCategory::Support,
        FeedbackCategory::Implementation,
        FeedbackCategory::Training,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductQuality => "Product Quality",
            Self::CustomerService => "Customer Service",
            Self::Pricing => "Pricing",
            Self::Features => "Features",
            Self::Performance => "Performance",
            Self::Support => "Support",
            Self::Implementation => "Implementation",
            Self::Training => "Training",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum FeedbackChannel {
    #[default]
    Email,
    Phone,
    Survey,
    Chat,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Support Ticket")]
    SupportTicket,
}

impl FeedbackChannel {
    pub const ALL: [FeedbackChannel; 6] = [
        FeedbackChannel::Email,
        FeedbackChannel::Phone,
        FeedbackChannel::Survey,
        FeedbackChannel::Chat,
        FeedbackChannel::SocialMedia,
        FeedbackChannel::SupportTicket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Survey => "Survey",
            Self::Chat => "Chat",
            Self::SocialMedia => "Social Media",
            Self::SupportTicket => "Support Ticket",
        }
    }
}

impl fmt::Display for FeedbackChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Scores strictly above this are positive.
    pub const POSITIVE_ABOVE: f64 = 0.2;
    /// Scores strictly below this are negative.
    pub const NEGATIVE_BELOW: f64 = -0.2;

    pub fn from_score(score: f64) -> Self {
        if score > Self::POSITIVE_ABOVE {
            Self::Positive
        } else if score < Self::NEGATIVE_BELOW {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub customer_id: String,
    /// Signed score in `[-1, 1]`.
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub category: FeedbackCategory,
    pub channel: FeedbackChannel,
    pub timestamp: NaiveDate,
    pub resolved: bool,
    pub response_time_hours: f64,
    pub text: String,
}
