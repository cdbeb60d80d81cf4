/// Number of attribute slots in a profile (fixed by the contract ABI).
pub const ATTR_COUNT: usize = 12;

/// Encoded value meaning "no categorical value provided".
pub const UNKNOWN_CATEGORICAL: u8 = 15;

/// Encoded value meaning "no numeric value provided".
pub const UNKNOWN_NUMERIC: u8 = 255;

/// Largest legal categorical value. 0 is "unspecified" and collapses to unknown.
pub const CATEGORICAL_MAX: u8 = 14;

/// Largest legal numeric value and the default upper range bound.
/// 255 is reserved for unknown and never appears as a bound.
pub const NUMERIC_MAX: u8 = 254;

/// Lower range bound used when none is configured.
pub const NUMERIC_MIN: u8 = 0;

/// Bit 15 of a preference mask: set = accept a counterparty whose value is unknown.
pub const UNKNOWN_BIT: u16 = 0x8000;

/// Preference mask for "no preference": every category plus unknown.
pub const WILDCARD_MASK: u16 = 0xFFFF;

/// Bits 0..=14 of a preference mask (the accepted-category set).
pub const CATEGORY_BITS: u16 = 0x7FFF;

/// Highest bit index a 16-bit mask can carry.
pub const MAX_MASK_BIT: u8 = 15;
