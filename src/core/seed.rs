//! Reproducible seeds. Every "random-looking" choice in a reading comes from
//! the first eight bytes of a SHA-256 digest over a labelled key, read
//! big-endian.

use crate::domain::model::{NormalizedInput, PlacementSeeds};
use sha2::{Digest, Sha256};

/// Stand-in for the location digest when no location was given.
pub const FALLBACK_LOCATION_SEED: u64 = 0x5EED_0000_C0DE_0001;

pub fn digest_u64(key: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

pub fn sun_seed(input: &NormalizedInput) -> u64 {
    digest_u64(&format!("sun|{}", input.date.format("%Y-%m-%d")))
}

pub fn moon_seed(input: &NormalizedInput) -> u64 {
    digest_u64(&format!(
        "moon|{}|{}",
        input.date.format("%Y-%m-%d"),
        input.time.format("%H:%M:%S")
    ))
}

pub fn location_seed(location: Option<&str>) -> u64 {
    location
        .map(|text| digest_u64(&format!("location|{}", text)))
        .unwrap_or(FALLBACK_LOCATION_SEED)
}

pub fn rising_seed(input: &NormalizedInput) -> u64 {
    digest_u64(&format!(
        "rising|{}|{:016x}",
        input.time.format("%H:%M:%S"),
        location_seed(input.location.as_deref())
    ))
}

pub fn placement_seeds(input: &NormalizedInput) -> PlacementSeeds {
    PlacementSeeds {
        sun: sun_seed(input),
        moon: moon_seed(input),
        rising: rising_seed(input),
    }
}

/// Index in `0..len` for a numbered pick drawn from all three seeds.
pub fn pick(seeds: &PlacementSeeds, label: &str, slot: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let key = format!(
        "{}|{}|{:016x}|{:016x}|{:016x}",
        label, slot, seeds.sun, seeds.moon, seeds.rising
    );
    (digest_u64(&key) % len as u64) as usize
}
