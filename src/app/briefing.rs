//! Printable forms of a reading: the card layout of the web reader as plain
//! text, or the whole structure as JSON.

use crate::domain::model::ChartInsights;
use crate::utils::error::Result;

/// "Ada's celestial briefing · March 21, 1990 · Aligned to Lisbon".
/// Without a name the heading opens with "Your".
pub fn briefing_heading(insights: &ChartInsights) -> String {
    let owner = match &insights.name {
        Some(name) => format!("{}'s", name),
        None => "Your".to_string(),
    };
    let mut heading = format!("{} celestial briefing · {}", owner, insights.formatted_date);
    if let Some(note) = &insights.location_note {
        heading.push_str(" · ");
        heading.push_str(note);
    }
    heading
}

pub fn render_text(insights: &ChartInsights) -> String {
    let sun = &insights.sun;
    let moon = &insights.moon;
    let rising = &insights.rising;
    let pulse = &insights.dominant_element;

    let mut lines = vec![
        format!("Sun · {}", sun.sign),
        format!("  {}", sun.highlight),
        format!(
            "  {:.1}° · {} · {}",
            sun.degree, sun.sign.element, sun.sign.modality
        ),
        format!("Moon · {}", moon.sign),
        format!("  {}", moon.focus),
        format!(
            "  {} · {:.1}° · {}",
            moon.phase, moon.degree, moon.sign.element
        ),
        format!("Rising · {}", rising.sign),
        format!("  {}", rising.tone),
        format!(
            "  {:.1}° · {} · {}",
            rising.degree, rising.sign.element, rising.sign.modality
        ),
        format!("Elemental Pulse · {}", pulse.element),
        format!("  {}", pulse.description),
        format!("  Score {:.1} · {}", pulse.score, pulse.calibration),
        String::new(),
        briefing_heading(insights),
    ];

    lines.extend(insights.summary.iter().map(|line| format!("  {}", line)));

    lines.push(String::new());
    lines.push("Rituals".to_string());
    lines.extend(insights.rituals.iter().map(|ritual| format!("  - {}", ritual)));

    lines.push(String::new());
    lines.push("Transits & Timing".to_string());
    lines.extend(insights.transits.iter().map(|transit| {
        format!(
            "  - {} · {} ({})",
            transit.title, transit.description, transit.timing
        )
    }));

    lines.push(String::new());
    lines.push("Houses".to_string());
    for house in &insights.houses {
        lines.push(format!("  House {} · {}", house.number, house.sign));
        lines.push(format!("    {}", house.theme));
        lines.push(format!("    {}", house.guidance));
    }

    lines.join("\n")
}

pub fn render_json(insights: &ChartInsights) -> Result<String> {
    Ok(serde_json::to_string_pretty(insights)?)
}
