use clap::Parser;
use parkgate::domain::ports::GateConfig;
use parkgate::utils::error::{ErrorSeverity, GateError};
use parkgate::utils::logger;
use parkgate::utils::validation::{parse_instant, Validate};
use parkgate::{
    BookingGate, CliConfig, ExtensionOutcome, IntervalPolicy, ParkingApiClient, RateTable,
    RefreshTask, TimeInterval, TomlConfig, VehicleClass,
};
use std::sync::Arc;
use std::time::Duration;

fn bail(e: GateError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    let code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
    };
    std::process::exit(code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting parkgate CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        bail(e);
    }

    // File config overrides CLI defaults when present.
    let (rates, policy, base_url, timeout_seconds, refresh_minutes) = match &config.config_file {
        Some(path) => {
            let file = match TomlConfig::load(path) {
                Ok(file) => file,
                Err(e) => bail(e),
            };
            let rates = match file.rate_table() {
                Ok(rates) => rates,
                Err(e) => bail(e),
            };
            (
                rates,
                file.interval_policy(),
                file.service.base_url.clone(),
                file.service.timeout_seconds.unwrap_or(config.timeout_seconds),
                file.refresh
                    .as_ref()
                    .and_then(|r| r.period_minutes)
                    .unwrap_or(config.refresh_minutes),
            )
        }
        None => (
            RateTable::default(),
            IntervalPolicy::default(),
            config.api_base_url().to_string(),
            config.request_timeout_seconds(),
            config.refresh_period_minutes(),
        ),
    };

    let client = match ParkingApiClient::new(&base_url, Duration::from_secs(timeout_seconds)) {
        Ok(client) => client,
        Err(e) => bail(e),
    };

    // Extension mode: one remote transaction, server verdict shown verbatim.
    if let Some(booking_id) = &config.extend_booking {
        let raw_hours = config.hours.clone().unwrap_or_default();
        match parkgate::request_extension(&client, booking_id, &raw_hours).await {
            Ok(ExtensionOutcome::Extended {
                message,
                additional_cost,
                new_exit_time,
            }) => {
                tracing::info!("✅ {}", message);
                println!("✅ {}", message);
                println!("Additional cost: ₹{}", additional_cost);
                println!("New exit time: {}", new_exit_time);
            }
            Ok(ExtensionOutcome::Rejected { message }) => {
                tracing::warn!("Extension rejected: {}", message);
                println!("❌ Error: {}", message);
            }
            Err(e) => bail(e),
        }
        return Ok(());
    }

    let class: VehicleClass = match config.vehicle_type.parse() {
        Ok(class) => class,
        Err(e) => bail(e),
    };

    let now = chrono::Local::now().naive_local();
    let defaults = policy.default_interval(now);
    let entry = match &config.entry_time {
        Some(raw) => match parse_instant(raw) {
            Ok(entry) => entry,
            Err(e) => bail(e),
        },
        None => defaults.entry,
    };
    let exit = match &config.exit_time {
        Some(raw) => match parse_instant(raw) {
            Ok(exit) => exit,
            Err(e) => bail(e),
        },
        None => policy.default_interval(entry).exit,
    };
    let interval = TimeInterval::new(entry, exit);

    let gate = Arc::new(BookingGate::new(rates, client));

    match gate.refresh(class, interval).await {
        Ok(quote) => {
            println!("Vehicle:   {}", class);
            println!("Entry:     {}", interval.entry.format("%Y-%m-%d %H:%M"));
            println!("Exit:      {}", interval.exit.format("%Y-%m-%d %H:%M"));
            println!("Duration:  {} hours", quote.pricing.display_duration());
            println!("Amount:    ₹{}", quote.pricing.display_amount());
            println!("Available: {} slot(s)", quote.available_slots);
            if quote.allow_submit {
                println!("✅ Booking can be submitted");
            } else {
                println!("❌ No slots available for the selected time period");
            }
        }
        Err(e) => bail(e),
    }

    if config.watch {
        tracing::info!("🔄 Re-checking every {} minute(s), Ctrl-C to stop", refresh_minutes);
        let watch_gate = gate.clone();
        let task = RefreshTask::spawn(Duration::from_secs(refresh_minutes * 60), move || {
            let gate = watch_gate.clone();
            async move {
                match gate.refresh(class, interval).await {
                    Ok(quote) => {
                        tracing::info!(
                            "Availability: {} slot(s), submission {}",
                            quote.available_slots,
                            if quote.allow_submit { "open" } else { "blocked" }
                        );
                    }
                    Err(e) => {
                        tracing::error!("Refresh failed: {}", e.user_friendly_message());
                    }
                }
            }
        });

        tokio::signal::ctrl_c().await?;
        task.cancel();
        tracing::info!("Stopped watching");
    }

    Ok(())
}
