use crate::core::{elements, houses, narrative, normalizer, placement};
use crate::domain::model::{BirthForm, ChartInsights};
use crate::domain::ports::{ContentProvider, ReadingOptions};
use crate::utils::error::Result;

/// Runs the reading stages in order: normalize, place, score and derive
/// houses, compose.
pub struct ChartEngine<C: ContentProvider> {
    content: C,
}

impl<C: ContentProvider> ChartEngine<C> {
    pub fn new(content: C) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn read(&self, form: &BirthForm) -> Result<ChartInsights> {
        tracing::debug!("Normalizing birth details");
        let input = normalizer::normalize(form)?;
        tracing::debug!(
            "Normalized to {} {} (location: {}, name: {})",
            input.date,
            input.time,
            input.location.is_some(),
            input.name.is_some()
        );

        let placements = placement::calculate(&input);
        tracing::debug!(
            "Placements: Sun {} {:.1}°, Moon {} {:.1}° ({}), Rising {} {:.1}°",
            placements.sun.sign,
            placements.sun.degree,
            placements.moon.sign,
            placements.moon.degree,
            placements.moon.phase,
            placements.rising.sign,
            placements.rising.degree
        );

        let pulse = elements::score(&placements);
        tracing::debug!("Dominant element: {} ({:.1})", pulse.element, pulse.score);

        let houses = houses::derive(&placements.rising.sign);

        let insights = narrative::compose(&input, placements, pulse, houses, &self.content);
        tracing::debug!(
            "Composed {} summary lines, {} rituals, {} transits",
            insights.summary.len(),
            insights.rituals.len(),
            insights.transits.len()
        );

        Ok(insights)
    }
}

impl Default for ChartEngine<ReadingOptions> {
    fn default() -> Self {
        Self::new(ReadingOptions::default())
    }
}

/// Reads a chart with the built-in reading shape.
pub fn generate_chart_insights(form: &BirthForm) -> Result<ChartInsights> {
    ChartEngine::default().read(form)
}
