//! The zodiac wheel: twelve signs of 30 degrees each, starting at Aries.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Tie-break order for the elemental score: earlier wins.
pub const ALL_ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    pub const fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Element::Fire => 0,
            Element::Earth => 1,
            Element::Air => 2,
            Element::Water => 3,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const fn as_str(self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacSign {
    #[serde(skip)]
    pub index: usize,
    pub name: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub start_degree: f64,
}

const fn sign(
    index: usize,
    name: &'static str,
    element: Element,
    modality: Modality,
    start_degree: f64,
) -> ZodiacSign {
    ZodiacSign {
        index,
        name,
        element,
        modality,
        start_degree,
    }
}

pub static ZODIAC: [ZodiacSign; 12] = [
    sign(0, "Aries", Element::Fire, Modality::Cardinal, 0.0),
    sign(1, "Taurus", Element::Earth, Modality::Fixed, 30.0),
    sign(2, "Gemini", Element::Air, Modality::Mutable, 60.0),
    sign(3, "Cancer", Element::Water, Modality::Cardinal, 90.0),
    sign(4, "Leo", Element::Fire, Modality::Fixed, 120.0),
    sign(5, "Virgo", Element::Earth, Modality::Mutable, 150.0),
    sign(6, "Libra", Element::Air, Modality::Cardinal, 180.0),
    sign(7, "Scorpio", Element::Water, Modality::Fixed, 210.0),
    sign(8, "Sagittarius", Element::Fire, Modality::Mutable, 240.0),
    sign(9, "Capricorn", Element::Earth, Modality::Cardinal, 270.0),
    sign(10, "Aquarius", Element::Air, Modality::Fixed, 300.0),
    sign(11, "Pisces", Element::Water, Modality::Mutable, 330.0),
];

impl ZodiacSign {
    /// Sign at a wheel position; wraps past Pisces.
    pub fn at(index: usize) -> ZodiacSign {
        ZODIAC[index % ZODIAC.len()]
    }

    pub fn phrases(&self) -> &'static SignPhrases {
        &SIGN_PHRASES[self.index]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Per-sign wording for the three placements.
#[derive(Debug)]
pub struct SignPhrases {
    /// Sun
    pub highlight: &'static str,
    /// Moon
    pub focus: &'static str,
    /// Rising
    pub tone: &'static str,
}

static SIGN_PHRASES: [SignPhrases; 12] = [
    SignPhrases {
        highlight: "You lead with courage and spark new beginnings wherever you go.",
        focus: "Your feelings move fast; honour the first instinct before it cools.",
        tone: "You arrive with bold, direct energy that others read as fearless.",
    },
    SignPhrases {
        highlight: "You build slowly and beautifully, anchoring every promise in the body.",
        focus: "Comfort is medicine; your heart settles through touch, taste, and rhythm.",
        tone: "You come across as calm, grounded, and quietly magnetic.",
    },
    SignPhrases {
        highlight: "You are a weaver of ideas, curious about every voice in the room.",
        focus: "Your moods shift with conversation; naming a feeling helps it pass.",
        tone: "You greet the world with quick wit and an open, playful gaze.",
    },
    SignPhrases {
        highlight: "You protect what you love and turn any room into a shelter.",
        focus: "Your emotional tides are deep; home and memory restore you.",
        tone: "You appear gentle and receptive, sensing the mood before a word is said.",
    },
    SignPhrases {
        highlight: "You radiate warmth and creative confidence that invites others to shine.",
        focus: "Your heart needs to be seen; play and praise refill your reserves.",
        tone: "You enter with presence, generosity, and a flair for the dramatic.",
    },
    SignPhrases {
        highlight: "You refine, heal, and improve, finding the sacred in the details.",
        focus: "Order soothes you; small rituals of care settle a restless mind.",
        tone: "You present as thoughtful, precise, and quietly helpful.",
    },
    SignPhrases {
        highlight: "You seek harmony and beauty, balancing every relationship you touch.",
        focus: "Your peace depends on connection; fairness calms your inner scales.",
        tone: "You read as graceful and diplomatic, easing tension wherever you stand.",
    },
    SignPhrases {
        highlight: "You transform through depth, never afraid of what lies beneath.",
        focus: "Your feelings run intense and private; trust is your sacred vessel.",
        tone: "You carry a magnetic intensity that others feel before they understand.",
    },
    SignPhrases {
        highlight: "You chase meaning and horizons, lighting the way with optimism.",
        focus: "Freedom steadies you; movement and wonder lift a heavy heart.",
        tone: "You show up as adventurous, candid, and warmly philosophical.",
    },
    SignPhrases {
        highlight: "You climb with patience and purpose, shaping legacies that last.",
        focus: "Your heart trusts what is earned; structure is how you feel safe.",
        tone: "You appear composed, capable, and older than your years.",
    },
    SignPhrases {
        highlight: "You innovate for the collective, dreaming futures others cannot yet see.",
        focus: "You process feeling through ideas; space and friendship restore you.",
        tone: "You come across as original, friendly, and a little unpredictable.",
    },
    SignPhrases {
        highlight: "You dissolve boundaries with compassion, imagination, and faith.",
        focus: "You absorb every mood nearby; solitude and art return you to yourself.",
        tone: "You seem dreamy and soft-edged, an open door for kindred spirits.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_slices_cover_360_degrees() {
        for (i, sign) in ZODIAC.iter().enumerate() {
            assert_eq!(sign.index, i);
            assert_eq!(sign.start_degree, i as f64 * 30.0);
            assert_eq!(ZodiacSign::at(i), *sign);
        }
    }

    #[test]
    fn test_each_element_has_one_sign_per_modality() {
        for element in ALL_ELEMENTS {
            let mut modalities: Vec<Modality> = ZODIAC
                .iter()
                .filter(|s| s.element == element)
                .map(|s| s.modality)
                .collect();
            modalities.sort();
            assert_eq!(
                modalities,
                vec![Modality::Cardinal, Modality::Fixed, Modality::Mutable]
            );
        }
    }

    #[test]
    fn test_earth_trine_in_wheel_order() {
        let earth: Vec<(&str, Modality)> = ZODIAC
            .iter()
            .filter(|s| s.element == Element::Earth)
            .map(|s| (s.name, s.modality))
            .collect();
        assert_eq!(
            earth,
            vec![
                ("Taurus", Modality::Fixed),
                ("Virgo", Modality::Mutable),
                ("Capricorn", Modality::Cardinal),
            ]
        );
    }

    #[test]
    fn test_wheel_wraps_past_pisces() {
        assert_eq!(ZodiacSign::at(12).name, "Aries");
        assert_eq!(ZodiacSign::at(13).name, "Taurus");
    }
}
