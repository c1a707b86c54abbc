use crate::core::{ContentProvider, ReadingOptions};
use crate::utils::error::{ChartError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub reading: ReadingSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
    #[serde(default)]
    pub output: OutputSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingSection {
    pub summary_lines: Option<usize>,
    pub ritual_count: Option<usize>,
    pub transit_count: Option<usize>,
}

/// Form values used when the caller leaves a field unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsSection {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ChartError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ChartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ChartError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.reading_options().validate()?;
        validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;
        Ok(())
    }

    pub fn reading_options(&self) -> ReadingOptions {
        let defaults = ReadingOptions::default();
        ReadingOptions {
            summary_lines: self.reading.summary_lines.unwrap_or(defaults.summary_lines),
            ritual_count: self.reading.ritual_count.unwrap_or(defaults.ritual_count),
            transit_count: self.reading.transit_count.unwrap_or(defaults.transit_count),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output.format.as_deref().unwrap_or(OUTPUT_FORMATS[0])
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ContentProvider for TomlConfig {
    fn summary_lines(&self) -> usize {
        self.reading_options().summary_lines
    }

    fn ritual_count(&self) -> usize {
        self.reading_options().ritual_count
    }

    fn transit_count(&self) -> usize {
        self.reading_options().transit_count
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
