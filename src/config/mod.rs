#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ReadingRequest};

use crate::core::ReadingOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

/// Form defaults shown before the user enters anything.
pub const DEFAULT_NAME: &str = "Cosmic Explorer";
pub const DEFAULT_LOCATION: &str = "Your Current Coordinates";

impl Validate for ReadingOptions {
    fn validate(&self) -> Result<()> {
        let (min, max) = ReadingOptions::SUMMARY_LINES;
        validate_range("reading.summary_lines", self.summary_lines, min, max)?;
        let (min, max) = ReadingOptions::RITUAL_COUNT;
        validate_range("reading.ritual_count", self.ritual_count, min, max)?;
        let (min, max) = ReadingOptions::TRANSIT_COUNT;
        validate_range("reading.transit_count", self.transit_count, min, max)?;
        Ok(())
    }
}
