//! Signed integer range arithmetic.

use crate::error::{Result, ToolbeltError};

/// Widest signed width representable by the return type.
const MAX_BITS: u32 = 128;

/// Return the maximum signed integer value for the given bit width.
///
/// A two's-complement signed integer of `num_bits` bits tops out at
/// `2^(num_bits-1) - 1`.
///
/// # Errors
///
/// Returns [`ToolbeltError::BitWidthTooSmall`] for `num_bits < 2` (a signed
/// range needs a sign bit and at least one value bit) and
/// [`ToolbeltError::BitWidthTooWide`] for `num_bits > 128`.
///
/// # Examples
///
/// ```
/// use toolbelt::numeric::max_signed_value;
///
/// assert_eq!(max_signed_value(32).unwrap(), 2_147_483_647);
/// assert_eq!(max_signed_value(64).unwrap(), 9_223_372_036_854_775_807);
/// ```
pub fn max_signed_value(num_bits: u32) -> Result<i128> {
    if num_bits < 2 {
        return Err(ToolbeltError::BitWidthTooSmall(num_bits));
    }
    if num_bits > MAX_BITS {
        return Err(ToolbeltError::BitWidthTooWide(num_bits));
    }

    // i128::MAX is 2^127 - 1; shifting right scales it to 2^(num_bits-1) - 1
    // without the `1 << 127` overflow at the top of the range.
    Ok(i128::MAX >> (MAX_BITS - num_bits))
}

// ── Tests ───────────────────────────────────────────────────────────────────
