use core::fmt::Debug;
use core::hash::Hash;

use fp_bits;

/// A floating-point type with an integer type of the same width holding its raw bits.
///
/// Both directions are total and bit-exact, so for every value `x`,
/// `T::from_int_bits(x.to_int_bits())` has the same bits as `x`, NaN payload included.
pub trait BitCast: Copy {
    type Bits: Copy + Eq + Hash + Debug;

    fn to_int_bits(self) -> Self::Bits;
    fn from_int_bits(bits: Self::Bits) -> Self;
}

impl BitCast for f32 {
    type Bits = i32;

    #[inline]
    fn to_int_bits(self) -> i32 {
        fp_bits::float_to_int_bits(self)
    }

    #[inline]
    fn from_int_bits(bits: i32) -> f32 {
        fp_bits::int_bits_to_float(bits)
    }
}

impl BitCast for f64 {
    type Bits = i64;

    #[inline]
    fn to_int_bits(self) -> i64 {
        fp_bits::double_to_long_bits(self)
    }

    #[inline]
    fn from_int_bits(bits: i64) -> f64 {
        fp_bits::long_bits_to_double(bits)
    }
}
