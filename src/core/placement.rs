//! Sun, Moon and Rising placements.
//!
//! The Sun follows the conventional tropical date table. Moon and Rising are
//! symbolic: their sign, degree and phase are read from digest seeds (see
//! [`crate::core::seed`]), so they are reproducible but carry no ephemeris
//! meaning. Location text is hashed, never geocoded.

use crate::core::seed;
use crate::domain::catalog::ZodiacSign;
use crate::domain::content::LUNAR_PHASES;
use crate::domain::model::{
    MoonPlacement, NormalizedInput, Placements, RisingPlacement, SunPlacement,
};
use chrono::{Datelike, NaiveDate};

/// First (month, day) of each sign, in wheel order from Aries.
pub const SUN_SIGN_STARTS: [(u32, u32); 12] = [
    (3, 21),
    (4, 20),
    (5, 21),
    (6, 21),
    (7, 23),
    (8, 23),
    (9, 23),
    (10, 23),
    (11, 22),
    (12, 22),
    (1, 20),
    (2, 19),
];

/// Days before each month in a leap year, so Feb 29 has its own slot.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];
const DAYS_IN_WHEEL_YEAR: u32 = 366;

/// Degree resolution for seeded placements: tenths of a degree.
const SEEDED_DEGREE_STEPS: u64 = 300;

fn wheel_day(month: u32, day: u32) -> u32 {
    DAYS_BEFORE_MONTH[(month as usize - 1) % 12] + day - 1
}

/// Sun sign plus degree, interpolated linearly across the sign's date range.
pub fn sun_sign(date: NaiveDate) -> (ZodiacSign, f64) {
    let today = wheel_day(date.month(), date.day());

    for (index, &(month, day)) in SUN_SIGN_STARTS.iter().enumerate() {
        let (next_month, next_day) = SUN_SIGN_STARTS[(index + 1) % 12];
        let start = wheel_day(month, day);
        let length = (wheel_day(next_month, next_day) + DAYS_IN_WHEEL_YEAR - start) % DAYS_IN_WHEEL_YEAR;
        let offset = (today + DAYS_IN_WHEEL_YEAR - start) % DAYS_IN_WHEEL_YEAR;

        if offset < length {
            let degree = offset as f64 * 30.0 / length as f64;
            return (ZodiacSign::at(index), degree);
        }
    }

    // The twelve ranges tile the year, so this is unreachable.
    (ZodiacSign::at(0), 0.0)
}

/// Sign and degree from a seed. Sign uses the low bits, degree bits 16 and up.
pub fn seeded_sign(seed: u64) -> (ZodiacSign, f64) {
    let sign = ZodiacSign::at((seed % 12) as usize);
    let degree = ((seed >> 16) % SEEDED_DEGREE_STEPS) as f64 / 10.0;
    (sign, degree)
}

/// Lunar phase index from bits 32 and up of the Moon seed.
pub fn lunar_phase_index(seed: u64) -> usize {
    ((seed >> 32) % LUNAR_PHASES.len() as u64) as usize
}

pub fn calculate(input: &NormalizedInput) -> Placements {
    let seeds = seed::placement_seeds(input);

    let (sun, sun_degree) = sun_sign(input.date);
    let (moon_sign, moon_degree) = seeded_sign(seeds.moon);
    let phase_index = lunar_phase_index(seeds.moon);
    let (rising_sign, rising_degree) = seeded_sign(seeds.rising);

    Placements {
        sun: SunPlacement {
            sign: sun,
            degree: sun_degree,
            highlight: sun.phrases().highlight,
        },
        moon: MoonPlacement {
            sign: moon_sign,
            degree: moon_degree,
            focus: moon_sign.phrases().focus,
            phase: LUNAR_PHASES[phase_index],
            phase_index,
        },
        rising: RisingPlacement {
            sign: rising_sign,
            degree: rising_degree,
            tone: rising_sign.phrases().tone,
        },
        seeds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sun_sign_boundaries() {
        let (sign, degree) = sun_sign(date(1990, 3, 21));
        assert_eq!(sign.name, "Aries");
        assert_eq!(degree, 0.0);

        let (sign, degree) = sun_sign(date(1990, 4, 19));
        assert_eq!(sign.name, "Aries");
        assert!(degree >= 29.0 && degree < 30.0, "degree = {degree}");

        let (sign, degree) = sun_sign(date(1990, 4, 20));
        assert_eq!(sign.name, "Taurus");
        assert_eq!(degree, 0.0);
    }

    #[test]
    fn test_capricorn_wraps_new_year() {
        assert_eq!(sun_sign(date(1990, 12, 22)).0.name, "Capricorn");
        assert_eq!(sun_sign(date(1991, 1, 1)).0.name, "Capricorn");
        assert_eq!(sun_sign(date(1991, 1, 19)).0.name, "Capricorn");
        assert_eq!(sun_sign(date(1991, 1, 20)).0.name, "Aquarius");
    }

    #[test]
    fn test_leap_day_is_pisces() {
        let (sign, degree) = sun_sign(date(2000, 2, 29));
        assert_eq!(sign.name, "Pisces");
        assert!(degree > 0.0 && degree < 30.0);
    }

    #[test]
    fn test_seeded_sign_uses_independent_bits() {
        let (sign, degree) = seeded_sign(0);
        assert_eq!((sign.name, degree), ("Aries", 0.0));

        // Low bits pick the sign, bits 16+ pick the degree.
        let (sign, degree) = seeded_sign(5 | (123 << 16));
        assert_eq!(sign.name, "Virgo");
        assert!((degree - 12.3).abs() < 1e-9);

        assert_eq!(lunar_phase_index(4 << 32), 4);
        assert_eq!(LUNAR_PHASES[lunar_phase_index(4 << 32)], "Full Moon");
    }
}
