pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ReadingRequest};

pub use config::toml_config::TomlConfig;
pub use core::engine::{generate_chart_insights, ChartEngine};
pub use domain::catalog::{Element, Modality, ZodiacSign, ZODIAC};
pub use domain::model::{BirthForm, ChartInsights, ElementalPulse, House, Transit};
pub use domain::ports::{ContentProvider, ReadingOptions};
pub use utils::error::{ChartError, Result};
