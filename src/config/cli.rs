use crate::config::toml_config::{TomlConfig, OUTPUT_FORMATS};
use crate::config::{DEFAULT_LOCATION, DEFAULT_NAME};
use crate::core::normalizer::parse_birth_date;
use crate::core::{BirthForm, ContentProvider, ReadingOptions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_not_future, validate_one_of, Validate};
use chrono::NaiveDateTime;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "read-my-chart")]
#[command(about = "Generate a ceremonial Sun, Moon and Rising chart reading")]
pub struct CliConfig {
    /// Name or alias shown in the briefing heading
    #[arg(long)]
    pub name: Option<String>,

    /// Birth date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub birth_date: Option<String>,

    /// Birth time as HH:MM (defaults to the current time)
    #[arg(long)]
    pub birth_time: Option<String>,

    /// Birth location, or where you are now
    #[arg(long)]
    pub location: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    #[arg(long)]
    pub summary_lines: Option<usize>,

    #[arg(long)]
    pub rituals: Option<usize>,

    #[arg(long)]
    pub transits: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// A fully resolved run: the form to read, how much text to produce, and how
/// to print it.
#[derive(Debug, Clone)]
pub struct ReadingRequest {
    pub form: BirthForm,
    pub options: ReadingOptions,
    pub format: String,
    pub now: NaiveDateTime,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Flags win over the config file; the config file wins over built-in
    /// defaults. Date and time fall back to `now`.
    pub fn resolve(&self, file: &TomlConfig, now: NaiveDateTime) -> ReadingRequest {
        let name = self
            .name
            .clone()
            .or_else(|| file.defaults.name.clone())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let location = self
            .location
            .clone()
            .or_else(|| file.defaults.location.clone())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let birth_date = self
            .birth_date
            .clone()
            .unwrap_or_else(|| now.date().format("%Y-%m-%d").to_string());
        let birth_time = self
            .birth_time
            .clone()
            .unwrap_or_else(|| now.time().format("%H:%M").to_string());

        ReadingRequest {
            form: BirthForm::new(birth_date)
                .with_name(name)
                .with_time(birth_time)
                .with_location(location),
            options: ReadingOptions {
                summary_lines: self.summary_lines.unwrap_or(file.summary_lines()),
                ritual_count: self.rituals.unwrap_or(file.ritual_count()),
                transit_count: self.transits.unwrap_or(file.transit_count()),
            },
            format: self
                .format
                .clone()
                .unwrap_or_else(|| file.output_format().to_string()),
            now,
        }
    }
}

impl Validate for ReadingRequest {
    fn validate(&self) -> Result<()> {
        self.options.validate()?;
        validate_one_of("format", &self.format, &OUTPUT_FORMATS)?;

        // Unreadable dates are left for the engine to reject.
        if let Ok(date) = parse_birth_date(&self.form.birth_date) {
            validate_not_future("birth date", date, self.now.date())?;
        }
        Ok(())
    }
}
