mod cli;
mod report;

use agrispectra::config::{Config, OutputFormat};
use agrispectra::data::crops;
use agrispectra::models::{CropProfile, DailyForecast, FieldMap, ForecastResponse, Region};
use agrispectra::{AgriSpectraError, Result};
use clap::Parser;
use cli::{AssessmentArgs, Cli, Commands, ForecastArgs};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Init => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Commands::Check => return check(cli.config.as_ref()),
        _ => {}
    }

    let config = Config::load_or_default(cli.config.as_ref())?;
    let format = cli.format.unwrap_or(config.output.format);

    match &cli.command {
        Commands::Risk(args) => {
            let payload = build_payload(args, &config)?;
            let result = agrispectra::compute_risk(&payload);
            emit(format, &result, report::risk)
        }
        Commands::Eligibility(args) => {
            let payload = build_payload(args, &config)?;
            let result = agrispectra::eligibility_for(&payload);
            emit(format, &result, report::eligibility)
        }
        Commands::Assess(args) => {
            let payload = build_payload(args, &config)?;
            let result = agrispectra::assess(&payload);
            emit(format, &result, report::assessment)
        }
        Commands::Alerts(args) => {
            let daily = load_forecast(args)?;
            let result = agrispectra::hazard_alerts(&daily);
            emit(format, &result, report::hazards)
        }
        Commands::Average(args) => {
            let daily = load_forecast(args)?;
            let result = agrispectra::weather_average(&daily).ok_or_else(|| {
                AgriSpectraError::InvalidData(
                    "Forecast has no usable temperature or humidity values".into(),
                )
            })?;
            emit(format, &result, report::average)
        }
        Commands::Crops => {
            match format {
                OutputFormat::Text => print!("{}", report::crop_table()),
                _ => {
                    let profiles: Vec<CropRow> = crops::AVAILABLE_CROPS
                        .iter()
                        .filter_map(|name| {
                            crops::lookup(name).map(|profile| CropRow { crop: name, profile })
                        })
                        .collect();
                    print_structured(format, &profiles)?;
                }
            }
            Ok(())
        }
        Commands::Init | Commands::Check => Ok(()),
    }
}

#[derive(Serialize)]
struct CropRow<'a> {
    crop: &'a str,
    #[serde(flatten)]
    profile: &'a CropProfile,
}

fn check(config_override: Option<&std::path::PathBuf>) -> Result<()> {
    if !Config::exists(config_override) {
        println!("No config file found; built-in defaults apply.");
        println!("Run `agrispectra init` to create one.");
        return Ok(());
    }

    let config = Config::load_or_default(config_override)?;
    println!("Config OK");
    println!("  region:          {}", config.defaults.region);
    println!("  season:          {}", config.defaults.season);
    println!(
        "  state:           {}",
        config.defaults.state.as_deref().unwrap_or("-")
    );
    println!(
        "  farmer category: {}",
        config.defaults.farmer_category.as_deref().unwrap_or("-")
    );
    println!("  output format:   {}", config.output.format.as_str());
    Ok(())
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: fn(&T) -> String) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", text(value));
            Ok(())
        }
        _ => print_structured(format, value),
    }
}

fn print_structured<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        _ => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

/// Read a JSON document, falling back to YAML.
fn read_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(AgriSpectraError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(json_err) => {
            tracing::debug!("{} is not JSON ({}), trying YAML", path.display(), json_err);
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

fn build_payload(args: &AssessmentArgs, config: &Config) -> Result<FieldMap> {
    let mut payload = match &args.input {
        Some(path) => match read_document(path)? {
            Value::Object(map) => map,
            Value::Null => FieldMap::new(),
            _ => {
                return Err(AgriSpectraError::InvalidData(format!(
                    "{} must contain a mapping of field names to values",
                    path.display()
                )))
            }
        },
        None => FieldMap::new(),
    };

    let mut set = |key: &str, value: Option<Value>| {
        if let Some(v) = value {
            payload.insert(key.to_string(), v);
        }
    };
    set("crop_type", args.crop.clone().map(Value::from));
    set("region", args.region.clone().map(Value::from));
    set("temperature", args.temperature.map(Value::from));
    set("humidity", args.humidity.map(Value::from));
    set("season", args.season.clone().map(Value::from));
    set("storage_days", args.days.map(Value::from));
    set("latitude", args.latitude.map(Value::from));
    set("longitude", args.longitude.map(Value::from));
    set("state", args.state.clone().map(Value::from));
    set("risk_level", args.risk_level.clone().map(Value::from));
    set("farmer_category", args.farmer_category.clone().map(Value::from));
    set("landholding_size", args.landholding.map(Value::from));

    if !payload.contains_key("crop_type") && !payload.contains_key("crop") {
        tracing::warn!("No crop given, default storage thresholds apply");
    }
    config.apply_defaults(&mut payload);
    let rendered = serde_json::to_string(&payload)?;
    tracing::debug!("Payload: {}", rendered);
    Ok(payload)
}

fn load_forecast(args: &ForecastArgs) -> Result<DailyForecast> {
    let document = read_document(&args.forecast)?;

    // Accept either the whole response or just its daily block
    let daily = if document.get("daily").is_some() {
        let response: ForecastResponse = serde_json::from_value(document)?;
        if let (Some(lat), Some(lon)) = (response.latitude, response.longitude) {
            tracing::debug!(
                "Forecast for {:.2}, {:.2} ({} region)",
                lat,
                lon,
                Region::from_coordinates(Some(lat), Some(lon))
            );
        }
        response.daily
    } else {
        serde_json::from_value::<DailyForecast>(document)?
    };
    tracing::debug!("Loaded {} forecast day(s)", daily.days());
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_from_flags_gets_config_defaults() {
        let args = AssessmentArgs {
            crop: Some("Banana".into()),
            temperature: Some(28.5),
            days: Some(120),
            landholding: Some(1.5),
            ..Default::default()
        };
        let payload = build_payload(&args, &Config::default()).unwrap();
        assert_eq!(payload["crop_type"], Value::from("Banana"));
        assert_eq!(payload["temperature"], Value::from(28.5));
        assert_eq!(payload["storage_days"], Value::from(120));
        assert_eq!(payload["landholding_size"], Value::from(1.5));
        assert_eq!(payload["region"], Value::from("North"));
        assert_eq!(payload["season"], Value::from("Post-harvest"));
        assert!(payload.get("state").is_none());
    }

    #[test]
    fn payload_with_coordinates_leaves_region_unset() {
        let args = AssessmentArgs {
            crop: Some("coffee".into()),
            latitude: Some(12.97),
            longitude: Some(77.59),
            ..Default::default()
        };
        let payload = build_payload(&args, &Config::default()).unwrap();
        assert!(payload.get("region").is_none());
        let assessment = agrispectra::assess(&payload);
        assert_eq!(assessment.eligibility.input_summary.region, "South");
    }

    #[test]
    fn missing_input_file_is_not_found() {
        let args = AssessmentArgs {
            input: Some("no/such/payload.json".into()),
            ..Default::default()
        };
        let err = build_payload(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, AgriSpectraError::NotFound(_)));
    }
}
