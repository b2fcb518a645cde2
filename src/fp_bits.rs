//! Bit-exact reinterpretation between IEEE-754 floats and integers of the same width.
//!
//! Every function here is total. The integer produced carries exactly the bits of the
//! float in memory, and the float produced carries exactly the bits of the integer.
//! NaN payloads and the sign of zero are never normalized.
//!
//! This is not a numeric conversion: `float_to_int_bits(1.0)` is `0x3f80_0000`, not `1`.

pub const F32_SIGN_MASK: i32 = 0x8000_0000u32 as i32;
pub const F32_EXPONENT_MASK: i32 = 0x7f80_0000;
pub const F32_SIGNIFICAND_MASK: i32 = 0x007f_ffff;

pub const F64_SIGN_MASK: i64 = 0x8000_0000_0000_0000u64 as i64;
pub const F64_EXPONENT_MASK: i64 = 0x7ff0_0000_0000_0000;
pub const F64_SIGNIFICAND_MASK: i64 = 0x000f_ffff_ffff_ffff;

/// Returns the bit pattern of `v` as an `i32`.
///
/// `f32::to_bits` is a plain transmute and keeps signaling and quiet NaN
/// payloads intact. The trailing `as` is a same-width integer cast.
#[inline]
pub fn float_to_int_bits(v: f32) -> i32 {
    v.to_bits() as i32
}

/// Returns the `f32` whose bit pattern is `bits`.
#[inline]
pub fn int_bits_to_float(bits: i32) -> f32 {
    f32::from_bits(bits as u32)
}

#[inline]
pub fn double_to_long_bits(v: f64) -> i64 {
    v.to_bits() as i64
}

#[inline]
pub fn long_bits_to_double(bits: i64) -> f64 {
    f64::from_bits(bits as u64)
}
