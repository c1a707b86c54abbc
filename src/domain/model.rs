use crate::domain::catalog::{Element, ZodiacSign};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Raw form fields as the caller collected them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl BirthForm {
    pub fn new(birth_date: impl Into<String>) -> Self {
        Self {
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_time(mut self, birth_time: impl Into<String>) -> Self {
        self.birth_time = Some(birth_time.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunPlacement {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub highlight: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPlacement {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub focus: &'static str,
    pub phase: &'static str,
    #[serde(skip)]
    pub phase_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RisingPlacement {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub tone: &'static str,
}

/// Seeds behind the Moon and Rising picks, reused by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSeeds {
    pub sun: u64,
    pub moon: u64,
    pub rising: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placements {
    pub sun: SunPlacement,
    pub moon: MoonPlacement,
    pub rising: RisingPlacement,
    pub seeds: PlacementSeeds,
}

impl Placements {
    pub fn elements(&self) -> [Element; 3] {
        [
            self.sun.sign.element,
            self.moon.sign.element,
            self.rising.sign.element,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementalPulse {
    pub element: Element,
    pub score: f64,
    pub description: &'static str,
    pub calibration: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub number: u8,
    pub sign: ZodiacSign,
    pub theme: &'static str,
    pub guidance: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transit {
    pub title: &'static str,
    pub description: String,
    pub timing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub formatted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_note: Option<String>,
    pub sun: SunPlacement,
    pub moon: MoonPlacement,
    pub rising: RisingPlacement,
    pub dominant_element: ElementalPulse,
    pub houses: Vec<House>,
    pub transits: Vec<Transit>,
    pub summary: Vec<String>,
    pub rituals: Vec<&'static str>,
}
