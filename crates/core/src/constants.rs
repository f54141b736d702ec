/// Characters that may group digits or separate the fraction of an amount
pub const SEPARATORS: [char; 5] = [',', '.', '_', ' ', '\''];

/// Separators that may mark the start of the fractional part
pub const DECIMAL_SEPARATORS: [char; 2] = [',', '.'];

/// Decimal mark assumed for a lone separator followed by exactly three digits
pub const PREFERRED_DECIMAL_SEPARATOR: char = '.';

/// Fraction digits kept when the original amount had no decimal part
pub const FALLBACK_FRACTION_DIGITS: u32 = 2;

/// Width of the first (least significant) digit group
pub const PRIMARY_GROUP_SIZE: usize = 3;

/// Width of the following groups under the Indian numbering system
pub const INDIAN_GROUP_SIZE: usize = 2;
