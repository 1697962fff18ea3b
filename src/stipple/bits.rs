//! Bit-row primitives for stipple rows.
//!
//! A row is held in a `u128`; bit 0 is the leftmost pixel of the cell.

/// Bit row of one cell.
pub type Bits = u128;

/// Widest cell a single [`Bits`] row can describe.
pub const MAX_BITS: u32 = Bits::BITS;

/// `n` low-order 1 bits.
pub fn block_mask(n: u32) -> Bits {
    if n >= MAX_BITS {
        Bits::MAX
    } else {
        (1 << n) - 1
    }
}

/// Rotate `value` up by `shift` bits within a `width`-bit field, carrying the
/// overflow around to the low bits. Bits above `width` are discarded and
/// `shift` is taken modulo `width`.
pub fn rotate(value: Bits, width: u32, shift: u32) -> Bits {
    if width == 0 {
        return 0;
    }
    let mask = block_mask(width);
    let value = value & mask;
    let shift = shift % width;
    if shift == 0 {
        return value;
    }
    ((value << shift) | (value >> (width - shift))) & mask
}

/// Round half to even, matching how fractional pixel sizes are rounded
/// everywhere in the stipple.
pub(crate) fn round_px(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// One filled stipple row for a cell `width` pixels wide.
///
/// The bar is `max(1, round(width * width_frac))` pixels, moved right by
/// `pad` pixels (left when negative) and then rotated by `rotation` for
/// alignment with the host's pixel grid. Bits pushed past the cell edge are
/// dropped.
pub fn row_bits(width: u32, pad: i64, rotation: u32, width_frac: f64) -> Bits {
    let bar_width = round_px(width as f64 * width_frac).max(1) as u32;
    let run = block_mask(bar_width);
    let shifted = if pad >= 0 {
        u32::try_from(pad)
            .ok()
            .and_then(|p| run.checked_shl(p))
            .unwrap_or(0)
    } else {
        u32::try_from(pad.unsigned_abs())
            .ok()
            .and_then(|p| run.checked_shr(p))
            .unwrap_or(0)
    };
    rotate(shifted, width, rotation)
}

/// Pack a row into `ceil(width / 8)` bytes, lowest byte first.
pub fn pack_row(bits: Bits, width: u32, out: &mut Vec<u8>) {
    let row_bytes = width.div_ceil(8);
    for i in 0..row_bytes {
        out.push((bits >> (8 * i)) as u8);
    }
}
