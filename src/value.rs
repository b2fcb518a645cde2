use error::{BitsResult, BitsError};
use fp_bits;

/// A float stored as its raw bit pattern.
///
/// Equality, hashing and serialization all work on the bits, so two NaNs with
/// different payloads compare unequal, `0.0` and `-0.0` compare unequal, and
/// a NaN survives a trip through any serde format unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RawBits {
    F32(u32),
    F64(u64)
}

impl From<f32> for RawBits {
    fn from(v: f32) -> RawBits {
        RawBits::from_f32(v)
    }
}

impl From<f64> for RawBits {
    fn from(v: f64) -> RawBits {
        RawBits::from_f64(v)
    }
}

impl RawBits {
    pub fn from_f32(v: f32) -> RawBits {
        RawBits::F32(fp_bits::float_to_int_bits(v) as u32)
    }

    pub fn from_f64(v: f64) -> RawBits {
        RawBits::F64(fp_bits::double_to_long_bits(v) as u64)
    }

    pub fn width(&self) -> u32 {
        match *self {
            RawBits::F32(_) => 32,
            RawBits::F64(_) => 64
        }
    }

    pub fn as_i32(&self) -> BitsResult<i32> {
        match *self {
            RawBits::F32(v) => Ok(v as i32),
            _ => Err(self.mismatch(32))
        }
    }

    pub fn as_i64(&self) -> BitsResult<i64> {
        match *self {
            RawBits::F64(v) => Ok(v as i64),
            _ => Err(self.mismatch(64))
        }
    }

    pub fn as_f32(&self) -> BitsResult<f32> {
        self.as_i32().map(fp_bits::int_bits_to_float)
    }

    pub fn as_f64(&self) -> BitsResult<f64> {
        self.as_i64().map(fp_bits::long_bits_to_double)
    }

    fn mismatch(&self, expected: u32) -> BitsError {
        BitsError::WidthMismatch {
            expected: expected,
            found: self.width()
        }
    }
}
