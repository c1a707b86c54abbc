use crate::domain::catalog::ZodiacSign;
use crate::domain::content::HOUSE_MEANINGS;
use crate::domain::model::House;

/// Twelve houses, the first occupied by the Rising sign and the rest following
/// the wheel. Meanings are keyed by house number only.
pub fn derive(rising: &ZodiacSign) -> Vec<House> {
    HOUSE_MEANINGS
        .iter()
        .enumerate()
        .map(|(offset, meaning)| House {
            number: offset as u8 + 1,
            sign: ZodiacSign::at(rising.index + offset),
            theme: meaning.theme,
            guidance: meaning.guidance,
        })
        .collect()
}
