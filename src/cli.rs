use agrispectra::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrispectra",
    version,
    about = "Post-harvest crop storage risk and support scheme advisor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score storage spoilage risk
    Risk(AssessmentArgs),
    /// Suggest support schemes (computes risk first when no level is given)
    Eligibility(AssessmentArgs),
    /// Score risk and suggest schemes in one pass
    Assess(AssessmentArgs),
    /// Heavy-rain and cyclone alerts from a saved daily forecast
    Alerts(ForecastArgs),
    /// Mean temperature and humidity from a saved daily forecast
    Average(ForecastArgs),
    /// List crops with their storage thresholds
    Crops,
    /// Write a config file interactively
    Init,
    /// Validate the config file
    Check,
}

/// Payload fields. Flags override values read from `--input`.
#[derive(Args, Debug, Default)]
pub struct AssessmentArgs {
    /// JSON or YAML file holding a field map
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Crop name (e.g. wheat, paddy, banana)
    #[arg(long)]
    pub crop: Option<String>,

    /// North, South, East or West
    #[arg(long)]
    pub region: Option<String>,

    /// Storage temperature in °C
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,

    /// Relative humidity in %
    #[arg(long)]
    pub humidity: Option<f64>,

    /// Season label (Summer, Monsoon, Winter, Post-harvest)
    #[arg(long)]
    pub season: Option<String>,

    /// Days in storage
    #[arg(long)]
    pub days: Option<i64>,

    /// Latitude, used to infer the region when none is given
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Longitude, used to infer the region when none is given
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// State name
    #[arg(long)]
    pub state: Option<String>,

    /// Assessed risk level (SAFE, MODERATE, HIGH, CRITICAL, Low, Medium, High)
    #[arg(long)]
    pub risk_level: Option<String>,

    /// Farmer category (small, marginal, ...)
    #[arg(long)]
    pub farmer_category: Option<String>,

    /// Landholding size in hectares
    #[arg(long)]
    pub landholding: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// Forecast JSON: a full Open-Meteo response or its `daily` block
    #[arg(long)]
    pub forecast: PathBuf,
}
