use crate::core::GateConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "parkgate")]
#[command(about = "Price a parking booking and check slot availability")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000")]
    pub api_base_url: String,

    #[arg(long, default_value = "car", help = "Vehicle class: bike or car")]
    pub vehicle_type: String,

    #[arg(long, help = "Entry time, YYYY-MM-DDTHH:MM (default: now)")]
    pub entry_time: Option<String>,

    #[arg(long, help = "Exit time, YYYY-MM-DDTHH:MM (default: entry + 2h)")]
    pub exit_time: Option<String>,

    #[arg(long, help = "TOML config file overriding rates and endpoints")]
    pub config_file: Option<String>,

    #[arg(long, help = "Extend this booking id instead of quoting")]
    pub extend_booking: Option<String>,

    #[arg(long, help = "Additional hours for --extend-booking")]
    pub hours: Option<String>,

    #[arg(long, help = "Keep re-checking availability periodically")]
    pub watch: bool,

    #[arg(long, default_value = "5")]
    pub refresh_minutes: u64,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_positive_number("refresh_minutes", self.refresh_minutes, 1)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl GateConfig for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn refresh_period_minutes(&self) -> u64 {
        self.refresh_minutes
    }
}
