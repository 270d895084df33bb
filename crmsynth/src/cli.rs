// crmsynth/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crmsynth_core::domain::generation::{CountRange, GenerationConfig};
use crmsynth_core::domain::model::{Region, Segment};
use crmsynth_core::ports::ExportFormat;

#[derive(Parser)]
#[command(name = "crmsynth")]
#[command(about = "Synthetic CRM datasets with sentiment analytics and recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🏭 Generates a dataset and exports it (CSV tables or one JSON document)
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Directory receiving the exported files
        #[arg(long, default_value = "crm_data")]
        out_dir: PathBuf,
    },

    /// 📊 Prints the KPI dashboard
    Dashboard {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Print the full dashboard payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// 💡 Prints prioritized recommendations
    Recommend {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// 📝 Renders a markdown insights report
    Report {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Report destination
        #[arg(long, default_value = "crm_report.md")]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

/// Generation flags shared by every subcommand. Each one overrides the
/// config file and environment.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GenerationArgs {
    /// Config file (default: ./crmsynth.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of customers
    #[arg(long, allow_negative_numbers = true)]
    pub customers: Option<i64>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimum deals per customer
    #[arg(long, allow_negative_numbers = true)]
    pub deals_min: Option<i64>,

    /// Maximum deals per customer
    #[arg(long, allow_negative_numbers = true)]
    pub deals_max: Option<i64>,

    /// Minimum feedback entries per customer
    #[arg(long, allow_negative_numbers = true)]
    pub feedback_min: Option<i64>,

    /// Maximum feedback entries per customer
    #[arg(long, allow_negative_numbers = true)]
    pub feedback_max: Option<i64>,

    /// Reference date (YYYY-MM-DD); no generated date is later
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// How far back signups may go, in days
    #[arg(long, allow_negative_numbers = true)]
    pub signup_window_days: Option<i64>,

    /// Regions to draw customers from, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    pub regions: Option<Vec<Region>>,

    /// Segments to draw customers from, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    pub segments: Option<Vec<Segment>>,
}

impl GenerationArgs {
    /// Layers the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut GenerationConfig) {
        if let Some(n) = self.customers {
            config.customer_count = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.deals_per_customer = CountRange::new(
            self.deals_min.unwrap_or(config.deals_per_customer.min),
            self.deals_max.unwrap_or(config.deals_per_customer.max),
        );
        config.feedback_per_customer = CountRange::new(
            self.feedback_min.unwrap_or(config.feedback_per_customer.min),
            self.feedback_max.unwrap_or(config.feedback_per_customer.max),
        );
        if let Some(date) = self.as_of {
            config.as_of = date;
        }
        if let Some(days) = self.signup_window_days {
            config.signup_window_days = days;
        }
        if let Some(regions) = &self.regions {
            config.regions = regions.clone();
        }
        if let Some(segments) = &self.segments {
            config.segments = segments.clone();
        }
    }
}
