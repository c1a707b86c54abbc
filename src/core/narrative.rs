use crate::core::seed;
use crate::domain::catalog::ZodiacSign;
use crate::domain::content::{Season, RITUAL_POOL, SUMMARY_TEMPLATES, TRANSIT_POOL};
use crate::domain::model::{
    ChartInsights, ElementalPulse, House, NormalizedInput, Placements, Transit,
};
use crate::domain::ports::{ContentProvider, ReadingOptions};
use chrono::{Datelike, NaiveDate};

/// Stride through the ritual and transit pools. Coprime with both pool sizes,
/// so picks never repeat.
const POOL_STRIDE: usize = 5;

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn location_note(location: Option<&str>) -> Option<String> {
    location.map(|place| format!("Aligned to {}", place))
}

struct Fill<'a> {
    sign: &'a ZodiacSign,
    phase: &'a str,
    dominant: &'a str,
}

fn fill(template: &str, values: &Fill<'_>) -> String {
    template
        .replace("{sign}", values.sign.name)
        .replace("{element}", values.sign.element.as_str())
        .replace("{modality}", values.sign.modality.as_str())
        .replace("{phase}", values.phase)
        .replace("{dominant}", values.dominant)
}

pub fn summary(placements: &Placements, pulse: &ElementalPulse, lines: usize) -> Vec<String> {
    let (min, max) = ReadingOptions::SUMMARY_LINES;
    let lines = lines.clamp(min, max);

    (0..lines)
        .map(|slot| {
            let templates = &SUMMARY_TEMPLATES[slot];
            let choice = seed::pick(&placements.seeds, "summary", slot, templates.len());
            let sign = match slot {
                0 => &placements.sun.sign,
                1 => &placements.moon.sign,
                _ => &placements.rising.sign,
            };
            fill(
                templates[choice],
                &Fill {
                    sign,
                    phase: placements.moon.phase,
                    dominant: pulse.element.as_str(),
                },
            )
        })
        .collect()
}

pub fn rituals(pulse: &ElementalPulse, phase_index: usize, count: usize) -> Vec<&'static str> {
    let (min, max) = ReadingOptions::RITUAL_COUNT;
    let start = pulse.element.index() * 4 + phase_index * 3;

    (0..count.clamp(min, max))
        .map(|k| RITUAL_POOL[(start + k * POOL_STRIDE) % RITUAL_POOL.len()])
        .collect()
}

pub fn transits(sun: &ZodiacSign, date: NaiveDate, count: usize) -> Vec<Transit> {
    let (min, max) = ReadingOptions::TRANSIT_COUNT;
    let season = Season::from_month(date.month());
    let start = sun.index + season.index() * 3;

    (0..count.clamp(min, max))
        .map(|k| {
            let event = &TRANSIT_POOL[(start + k * POOL_STRIDE) % TRANSIT_POOL.len()];
            Transit {
                title: event.title,
                description: event.description.replace("{sign}", sun.name),
                timing: season.timings()[k],
            }
        })
        .collect()
}

pub fn compose<C: ContentProvider + ?Sized>(
    input: &NormalizedInput,
    placements: Placements,
    pulse: ElementalPulse,
    houses: Vec<House>,
    content: &C,
) -> ChartInsights {
    let summary = summary(&placements, &pulse, content.summary_lines());
    let rituals = rituals(&pulse, placements.moon.phase_index, content.ritual_count());
    let transits = transits(&placements.sun.sign, input.date, content.transit_count());

    ChartInsights {
        name: input.name.clone(),
        formatted_date: format_date(input.date),
        location_note: location_note(input.location.as_deref()),
        sun: placements.sun,
        moon: placements.moon,
        rising: placements.rising,
        dominant_element: pulse,
        houses,
        transits,
        summary,
        rituals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{elements, placement};
    use crate::domain::catalog::{Element, ZODIAC};
    use chrono::NaiveTime;

    fn sample_input() -> NormalizedInput {
        NormalizedInput {
            date: NaiveDate::from_ymd_opt(1990, 3, 21).unwrap(),
            time: NaiveTime::from_hms_opt(14, 35, 0).unwrap(),
            location: Some("Lisbon".to_string()),
            name: None,
        }
    }

    fn pulse(element: Element) -> ElementalPulse {
        ElementalPulse {
            element,
            score: 2.0,
            description: "",
            calibration: "",
        }
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 1).unwrap();
        assert_eq!(format_date(date), "March 1, 1990");
    }

    #[test]
    fn test_location_note_only_when_present() {
        assert_eq!(location_note(None), None);
        assert_eq!(
            location_note(Some("Lisbon")).as_deref(),
            Some("Aligned to Lisbon")
        );
    }

    #[test]
    fn test_summary_line_count_is_clamped() {
        let placements = placement::calculate(&sample_input());
        let pulse = elements::score(&placements);
        assert_eq!(summary(&placements, &pulse, 1).len(), 3);
        assert_eq!(summary(&placements, &pulse, 4).len(), 4);
        assert_eq!(summary(&placements, &pulse, 9).len(), 5);
    }

    #[test]
    fn test_summary_names_the_placements() {
        let placements = placement::calculate(&sample_input());
        let pulse = elements::score(&placements);
        let lines = summary(&placements, &pulse, 5);

        assert!(lines[0].contains(placements.sun.sign.name));
        assert!(lines[1].contains(placements.moon.sign.name));
        assert!(lines[1].contains(placements.moon.phase));
        assert!(lines[2].contains(placements.rising.sign.name));
        assert!(lines[3].contains(pulse.element.as_str()));
        assert!(lines.iter().all(|line| !line.contains('{')));
    }

    #[test]
    fn test_rituals_never_repeat() {
        for element in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            for phase in 0..8 {
                let picked = rituals(&pulse(element), phase, 6);
                let mut unique = picked.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), 6);
            }
        }
    }

    #[test]
    fn test_rituals_follow_element_and_phase() {
        // Fire at New Moon starts at the head of the pool.
        assert_eq!(rituals(&pulse(Element::Fire), 0, 3)[0], RITUAL_POOL[0]);
        assert_eq!(rituals(&pulse(Element::Water), 0, 3)[0], RITUAL_POOL[12]);
        assert_eq!(rituals(&pulse(Element::Fire), 1, 3)[1], RITUAL_POOL[8]);
    }

    #[test]
    fn test_transits_keyed_by_sign_and_season() {
        let spring = NaiveDate::from_ymd_opt(1990, 4, 1).unwrap();
        let picked = transits(&ZODIAC[0], spring, 3);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].title, TRANSIT_POOL[0].title);
        assert_eq!(picked[1].title, TRANSIT_POOL[5].title);
        assert_eq!(picked[2].title, TRANSIT_POOL[10].title);
        assert!(picked[0].description.contains("Aries"));
        assert_eq!(picked[0].timing, "Peaks as spring light lengthens");

        let winter = NaiveDate::from_ymd_opt(1990, 12, 30).unwrap();
        let picked = transits(&ZODIAC[9], winter, 4);
        assert_eq!(picked.len(), 4);
        assert_eq!(picked[0].title, TRANSIT_POOL[(9 + 9) % 12].title);
        assert!(picked[3].timing.contains("early spring"));

        let mut titles: Vec<&str> = picked.iter().map(|t| t.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 4);
    }
}
