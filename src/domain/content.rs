//! Fixed wording tables the composer draws from.
//!
//! Every table here is static; selections index into them, nothing mutates them.

use crate::domain::catalog::Element;

pub struct HouseMeaning {
    pub theme: &'static str,
    pub guidance: &'static str,
}

pub static HOUSE_MEANINGS: [HouseMeaning; 12] = [
    HouseMeaning {
        theme: "Self, body, and first impressions",
        guidance: "Begin things in your own name and let your presence be the invitation.",
    },
    HouseMeaning {
        theme: "Resources, values, and self-worth",
        guidance: "Tend what you own with gratitude and price your gifts honestly.",
    },
    HouseMeaning {
        theme: "Communication, siblings, and daily learning",
        guidance: "Write it down, say it aloud, and stay curious about your neighbourhood.",
    },
    HouseMeaning {
        theme: "Home, roots, and ancestry",
        guidance: "Make one corner of your space a sanctuary and listen to family stories.",
    },
    HouseMeaning {
        theme: "Creativity, romance, and play",
        guidance: "Make something for the joy of it and let yourself be adored.",
    },
    HouseMeaning {
        theme: "Health, service, and daily ritual",
        guidance: "Refine one small habit at a time; the body keeps the score.",
    },
    HouseMeaning {
        theme: "Partnership and committed bonds",
        guidance: "Notice what you seek in others and offer it to yourself first.",
    },
    HouseMeaning {
        theme: "Intimacy, shared resources, and rebirth",
        guidance: "Let go of what has expired so something truer can grow.",
    },
    HouseMeaning {
        theme: "Philosophy, travel, and higher learning",
        guidance: "Follow the question that widens your world, near or far.",
    },
    HouseMeaning {
        theme: "Career, reputation, and public calling",
        guidance: "Name the legacy you want and take one visible step toward it.",
    },
    HouseMeaning {
        theme: "Community, friendship, and future visions",
        guidance: "Gather with people who share your hopes and dream out loud together.",
    },
    HouseMeaning {
        theme: "Solitude, dreams, and the unseen",
        guidance: "Rest, retreat, and write down your dreams; the hidden self speaks softly.",
    },
];

pub static LUNAR_PHASES: [&str; 8] = [
    "New Moon",
    "Waxing Crescent",
    "First Quarter",
    "Waxing Gibbous",
    "Full Moon",
    "Waning Gibbous",
    "Last Quarter",
    "Waning Crescent",
];

/// Indexed by `Element::index()`.
pub static ELEMENT_DESCRIPTIONS: [&str; 4] = [
    "Fire carries your chart: passion, initiative, and a need to act on inspiration.",
    "Earth carries your chart: patience, craft, and a gift for making ideas tangible.",
    "Air carries your chart: perspective, connection, and a mind that thrives on exchange.",
    "Water carries your chart: intuition, empathy, and feelings that run deep and true.",
];

pub fn element_description(element: Element) -> &'static str {
    ELEMENT_DESCRIPTIONS[element.index()]
}

/// Upper score bound (exclusive) and label for each calibration band.
pub static CALIBRATION_BANDS: [(f64, &str); 3] = [
    (1.5, "Balanced · the elements share the sky"),
    (2.5, "Amplified · one current leads the others"),
    (f64::INFINITY, "Dominant · a single element saturates the chart"),
];

pub fn calibration_for(score: f64) -> &'static str {
    CALIBRATION_BANDS
        .iter()
        .find(|(limit, _)| score < *limit)
        .map(|(_, label)| *label)
        .unwrap_or(CALIBRATION_BANDS[CALIBRATION_BANDS.len() - 1].1)
}

/// Summary line slots, in output order: Sun, Moon, Rising, Element, Closing.
///
/// Placeholders: `{sign}`, `{element}`, `{modality}`, `{phase}`, `{dominant}`.
pub static SUMMARY_TEMPLATES: [[&str; 3]; 5] = [
    [
        "Your {sign} Sun sets the tone: a {modality} {element} core that keeps you moving toward what matters.",
        "With the Sun in {sign}, your vitality burns through {element} channels and a {modality} rhythm.",
        "The {sign} Sun asks you to be unmistakably yourself, fuelled by {element} and steadied by {modality} will.",
    ],
    [
        "Your {sign} Moon was born under a {phase}, so your emotional weather follows {element} tides.",
        "A {phase} held your {sign} Moon at birth; your inner life asks for {element} kinds of care.",
        "Under a {phase}, the {sign} Moon gives your feelings a {modality} pulse and the voice of {element}.",
    ],
    [
        "{sign} rising shapes the doorway: people meet your {element} edge before they learn the rest.",
        "With {sign} on the horizon, your first impression carries a {modality} {element} signature.",
        "Your {sign} ascendant is both costume and compass, pointing you toward {element} ways of beginning.",
    ],
    [
        "{dominant} is the pulse running through this chart; lean into it when you need momentum.",
        "The elemental balance tilts toward {dominant}, so its practices will feel like coming home.",
        "Your strongest current is {dominant}; let it lead and let the quieter elements season it.",
    ],
    [
        "Revisit this reading at each new moon and notice which line rings truest.",
        "Hold these placements lightly; they are a mirror for reflection, not a script.",
        "Let the houses below show where this energy wants to land next.",
    ],
];

/// Four rituals per element, in `Element::index()` order.
pub static RITUAL_POOL: [&str; 16] = [
    "Light a candle at sunrise and speak one intention aloud.",
    "Move your body hard for ten minutes, then sit in stillness for ten more.",
    "Write down a brave ask and send it before noon.",
    "Burn an old note of self-doubt and scatter the ashes outdoors.",
    "Walk barefoot on soil or grass for five slow minutes.",
    "Cook a simple meal with full attention to every ingredient.",
    "Tidy one drawer and give away what no longer serves you.",
    "Hold a stone in your palm while listing three things you trust.",
    "Open every window and breathe in for four counts, out for eight.",
    "Journal a conversation between your present and future self.",
    "Call a friend you have been thinking about and tell them why.",
    "Ring a bell or chime to mark the close of your workday.",
    "Take a salt bath and let the water carry the day away.",
    "Place a bowl of water under the night sky and drink it at dawn.",
    "Cry, sing, or laugh until something loosens in your chest.",
    "Write a letter to someone you miss and keep it under your pillow.",
];

pub struct TransitTemplate {
    pub title: &'static str,
    /// `{sign}` is replaced with the Sun sign.
    pub description: &'static str,
}

pub static TRANSIT_POOL: [TransitTemplate; 12] = [
    TransitTemplate {
        title: "Mars ignites your drive",
        description: "Action-oriented energy pushes {sign} plans out of the draft stage.",
    },
    TransitTemplate {
        title: "Venus softens the edges",
        description: "Relationships and beauty ask your {sign} heart to receive as well as give.",
    },
    TransitTemplate {
        title: "Mercury sharpens the message",
        description: "Conversations, contracts, and study favour the {sign} gift for clear words.",
    },
    TransitTemplate {
        title: "Jupiter widens the path",
        description: "Opportunities arrive through teachers, travel, and a bolder {sign} vision.",
    },
    TransitTemplate {
        title: "Saturn sets the foundation",
        description: "Commitments made now give your {sign} ambitions a structure that lasts.",
    },
    TransitTemplate {
        title: "New Moon seeds intention",
        description: "A fresh lunar cycle invites {sign} to plant one clear, specific wish.",
    },
    TransitTemplate {
        title: "Full Moon illuminates",
        description: "What was hidden comes to light; {sign} can release what the glow reveals.",
    },
    TransitTemplate {
        title: "Mercury retrograde review",
        description: "Slow down, double-check, and let {sign} revisit an unfinished thread.",
    },
    TransitTemplate {
        title: "Uranus shakes the routine",
        description: "Surprises break a stale pattern and free {sign} to try something new.",
    },
    TransitTemplate {
        title: "Neptune dissolves the noise",
        description: "Dreams and intuition speak louder; {sign} should keep a notebook close.",
    },
    TransitTemplate {
        title: "Pluto deepens the work",
        description: "A quiet transformation asks {sign} to reclaim power from an old story.",
    },
    TransitTemplate {
        title: "Solar return glow",
        description: "Your personal new year renews {sign} vitality and clarifies the next chapter.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
        }
    }

    pub fn timings(self) -> &'static [&'static str; 4] {
        &SEASON_TIMINGS[self.index()]
    }
}

static SEASON_TIMINGS: [[&str; 4]; 4] = [
    [
        "Peaks as spring light lengthens",
        "Strongest in the weeks after the equinox",
        "Builds through the next lunar cycle",
        "Blooms by early summer",
    ],
    [
        "Peaks under the long summer days",
        "Strongest around the solstice",
        "Builds through the next lunar cycle",
        "Ripens as the days begin to shorten",
    ],
    [
        "Peaks as the harvest light turns gold",
        "Strongest in the weeks after the equinox",
        "Builds through the next lunar cycle",
        "Settles by the first frost",
    ],
    [
        "Peaks in the quiet of the long nights",
        "Strongest around the solstice",
        "Builds through the next lunar cycle",
        "Thaws into motion by early spring",
    ],
];
