use crate::error::{AgriSpectraError, Result};
use crate::models::{fields, FieldMap, Region, DEFAULT_SEASON};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Values filled into a payload when the caller left them out.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_season")]
    pub season: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub farmer_category: Option<String>,
}

fn default_region() -> String {
    Region::North.as_str().to_string()
}

fn default_season() -> String {
    DEFAULT_SEASON.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            season: default_season(),
            state: None,
            farmer_category: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl Config {
    /// Load from an explicit path. A missing file is an error.
    pub fn load(config_path: &PathBuf) -> Result<Self> {
        if !config_path.exists() {
            return Err(AgriSpectraError::Config(format!(
                "Config file not found at {:?}. Run `agrispectra init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(config_path)
            .map_err(|e| AgriSpectraError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Load from the override or a standard location, falling back to built-in defaults.
    pub fn load_or_default(config_override: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_override {
            return Self::load(path);
        }

        let path = Self::find_config_path()?;
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AgriSpectraError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if Region::from_str(&self.defaults.region).is_none() {
            return Err(AgriSpectraError::Config(format!(
                "defaults.region '{}' is not one of North, South, East, West",
                self.defaults.region
            )));
        }
        if self.defaults.season.trim().is_empty() {
            return Err(AgriSpectraError::Config(
                "defaults.season must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agrispectra/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriSpectraError::Config("Cannot determine config directory".into()))?
            .join("agrispectra");
        Ok(config_dir.join("config.yaml"))
    }

    /// Fill region, season, state and farmer category the payload left empty.
    ///
    /// Region is only filled when no coordinates were given either, so that
    /// coordinate-based inference still applies.
    pub fn apply_defaults(&self, payload: &mut FieldMap) {
        let has_coordinates = fields::optional_float(payload, "latitude").is_some()
            && fields::optional_float(payload, "longitude").is_some();

        if fields::text(payload, "region").is_none() && !has_coordinates {
            payload.insert(
                "region".to_string(),
                Value::String(self.defaults.region.clone()),
            );
        }
        if fields::text(payload, "season").is_none() {
            payload.insert(
                "season".to_string(),
                Value::String(self.defaults.season.clone()),
            );
        }
        if let Some(state) = &self.defaults.state {
            if fields::text(payload, "state").is_none() {
                payload.insert("state".to_string(), Value::String(state.clone()));
            }
        }
        if let Some(category) = &self.defaults.farmer_category {
            if fields::text(payload, "farmer_category").is_none() {
                payload.insert(
                    "farmer_category".to_string(),
                    Value::String(category.clone()),
                );
            }
        }
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AgriSpectra defaults.");
        println!();

        let regions: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
        let region_idx = Select::new()
            .with_prompt("  Default region")
            .items(&regions)
            .default(0)
            .interact()
            .map_err(|e| AgriSpectraError::Config(format!("Input error: {}", e)))?;

        let season: String = Input::new()
            .with_prompt("  Default season (Summer, Monsoon, Winter, Post-harvest)")
            .default(DEFAULT_SEASON.into())
            .interact_text()
            .map_err(|e| AgriSpectraError::Config(format!("Input error: {}", e)))?;

        let state: String = Input::new()
            .with_prompt("  State (leave blank to skip)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgriSpectraError::Config(format!("Input error: {}", e)))?;

        let farmer_category: String = Input::new()
            .with_prompt("  Farmer category (small, marginal, ... or blank)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgriSpectraError::Config(format!("Input error: {}", e)))?;

        let formats = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml];
        let format_names: Vec<&str> = formats.iter().map(|f| f.as_str()).collect();
        let format_idx = Select::new()
            .with_prompt("  Output format")
            .items(&format_names)
            .default(0)
            .interact()
            .map_err(|e| AgriSpectraError::Config(format!("Input error: {}", e)))?;

        println!();

        let non_empty = |s: String| {
            let trimmed = s.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };

        let config = Config {
            defaults: DefaultsConfig {
                region: regions[region_idx].to_string(),
                season,
                state: non_empty(state),
                farmer_category: non_empty(farmer_category),
            },
            output: OutputConfig {
                format: formats[format_idx],
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriSpectraError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgriSpectra Configuration\n# Generated by `agrispectra init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return content.to_string();
        };

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            "defaults:\n  region: South\n  season: Monsoon\n  state: Kerala\noutput:\n  format: json\n",
        )
        .unwrap();
        assert_eq!(config.defaults.region, "South");
        assert_eq!(config.defaults.season, "Monsoon");
        assert_eq!(config.defaults.state.as_deref(), Some("Kerala"));
        assert_eq!(config.defaults.farmer_category, None);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn parse_empty_sections_use_defaults() {
        let config = Config::parse("defaults: {}\n").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.region, "North");
        assert_eq!(config.defaults.season, "Post-harvest");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn parse_rejects_unknown_region() {
        let err = Config::parse("defaults:\n  region: Central\n").unwrap_err();
        assert!(matches!(err, AgriSpectraError::Config(_)));
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("AGRISPECTRA_TEST_STATE", "Odisha");
        let out = Config::substitute_env_vars("state: ${AGRISPECTRA_TEST_STATE}\nx: ${UNSET_AGRI_VAR_XYZ}");
        assert_eq!(out, "state: Odisha\nx: ${UNSET_AGRI_VAR_XYZ}");
    }

    #[test]
    fn apply_defaults_fills_only_missing_fields() {
        let config = Config {
            defaults: DefaultsConfig {
                region: "East".into(),
                season: "Monsoon".into(),
                state: Some("Assam".into()),
                farmer_category: Some("small".into()),
            },
            output: OutputConfig::default(),
        };

        let mut payload = json!({"season": "Winter", "state": ""})
            .as_object()
            .cloned()
            .unwrap();
        config.apply_defaults(&mut payload);
        assert_eq!(payload["region"], json!("East"));
        assert_eq!(payload["season"], json!("Winter"));
        assert_eq!(payload["state"], json!("Assam"));
        assert_eq!(payload["farmer_category"], json!("small"));
    }

    #[test]
    fn apply_defaults_leaves_region_to_coordinates() {
        let mut payload = json!({"latitude": 12.9, "longitude": 77.6})
            .as_object()
            .cloned()
            .unwrap();
        Config::default().apply_defaults(&mut payload);
        assert!(payload.get("region").is_none());
    }
}
