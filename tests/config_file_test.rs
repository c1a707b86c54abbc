use anyhow::Result;
use read_my_chart::app::briefing::{render_json, render_text};
use read_my_chart::utils::validation::Validate;
use read_my_chart::{BirthForm, ChartEngine, ContentProvider, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_engine_honours_config_file_counts() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[reading]
summary_lines = 5
ritual_count = 5
transit_count = 4

[output]
format = "json"
"#
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;
    assert_eq!(config.output_format(), "json");

    let engine = ChartEngine::new(config);
    let insights = engine.read(&BirthForm::new("1969-07-20").with_time("20:17"))?;

    assert_eq!(insights.summary.len(), engine.content().summary_lines());
    assert_eq!(insights.summary.len(), 5);
    assert_eq!(insights.rituals.len(), 5);
    assert_eq!(insights.transits.len(), 4);

    let json: serde_json::Value = serde_json::from_str(&render_json(&insights)?)?;
    assert_eq!(json["summary"].as_array().map(Vec::len), Some(5));
    Ok(())
}

#[test]
fn test_invalid_config_is_caught_before_reading() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[reading]\nsummary_lines = 2")?;

    let config = TomlConfig::from_file(file.path())?;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("reading.summary_lines"));
    Ok(())
}

#[test]
fn test_text_rendering_from_configured_engine() -> Result<()> {
    let config = TomlConfig::from_toml_str("[reading]\ntransit_count = 1\n")?;
    let engine = ChartEngine::new(config);
    let insights = engine.read(
        &BirthForm::new("1990-03-21")
            .with_name("Ada")
            .with_location("Lisbon"),
    )?;

    let text = render_text(&insights);
    assert!(text.contains("Ada's celestial briefing · March 21, 1990 · Aligned to Lisbon"));
    assert_eq!(text.matches("\n  - ").count(), insights.rituals.len() + 1);
    Ok(())
}
