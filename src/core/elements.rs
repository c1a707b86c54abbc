use crate::domain::catalog::{Element, ALL_ELEMENTS};
use crate::domain::content::{calibration_for, element_description};
use crate::domain::model::{ElementalPulse, Placements};

/// Every placement counts the same toward its element.
pub const PLACEMENT_WEIGHT: f64 = 1.0;

/// Accumulated weight per element, indexed by `Element::index()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementTally {
    scores: [f64; 4],
}

impl ElementTally {
    pub fn add(&mut self, element: Element, weight: f64) {
        self.scores[element.index()] += weight;
    }

    pub fn score(&self, element: Element) -> f64 {
        self.scores[element.index()]
    }

    /// Highest score wins; on a tie the element earlier in Fire, Earth, Air,
    /// Water order is kept.
    pub fn dominant(&self) -> (Element, f64) {
        let mut best = (ALL_ELEMENTS[0], self.score(ALL_ELEMENTS[0]));
        for element in &ALL_ELEMENTS[1..] {
            let score = self.score(*element);
            if score > best.1 {
                best = (*element, score);
            }
        }
        best
    }
}

impl FromIterator<Element> for ElementTally {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut tally = ElementTally::default();
        for element in iter {
            tally.add(element, PLACEMENT_WEIGHT);
        }
        tally
    }
}

pub fn pulse_from_tally(tally: &ElementTally) -> ElementalPulse {
    let (element, score) = tally.dominant();
    ElementalPulse {
        element,
        score,
        description: element_description(element),
        calibration: calibration_for(score),
    }
}

pub fn score(placements: &Placements) -> ElementalPulse {
    let tally: ElementTally = placements.elements().into_iter().collect();
    pulse_from_tally(&tally)
}
