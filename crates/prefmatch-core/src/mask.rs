use crate::constants::{CATEGORY_BITS, MAX_MASK_BIT, UNKNOWN_BIT, WILDCARD_MASK};
use crate::error::{EncodeError, Result};
use crate::policy::{Policy, UnknownHandling};

/// OR together `1 << b` for every position. Empty input yields 0.
pub fn create_mask(bit_positions: &[u8]) -> Result<u16> {
    bit_positions.iter().try_fold(0u16, |mask, &bit| {
        if bit > MAX_MASK_BIT {
            return Err(EncodeError::MaskBitOutOfRange(i64::from(bit)));
        }
        Ok(mask | (1u16 << bit))
    })
}

/// Narrow raw accepted values to mask bit positions, rejecting anything
/// a 16-bit mask cannot carry.
pub fn accepted_bits(values: &[i64]) -> Result<Vec<u8>> {
    values
        .iter()
        .map(|&v| match u8::try_from(v) {
            Ok(bit) if bit <= MAX_MASK_BIT => Ok(bit),
            _ => Err(EncodeError::MaskBitOutOfRange(v)),
        })
        .collect()
}

/// Categorical preference mask for a policy.
///
/// `None` is the wildcard. Otherwise bits 0..=14 are the accepted categories
/// and bit 15 is set iff unknown values are tolerated. An empty accepted list
/// accepts no category at all.
pub fn create_pref_mask(
    accepted_values: &[u8],
    policy: Policy,
    unknown_handling: UnknownHandling,
) -> Result<u16> {
    if !policy.filters() {
        return Ok(WILDCARD_MASK);
    }
    let categories = create_mask(accepted_values)? & CATEGORY_BITS;
    Ok(categories | unknown_bit(unknown_handling))
}

/// Bit 15 alone, as carried by filtering numeric slots.
pub fn unknown_bit(unknown_handling: UnknownHandling) -> u16 {
    match unknown_handling {
        UnknownHandling::Strict => 0,
        UnknownHandling::Lenient => UNKNOWN_BIT,
    }
}
