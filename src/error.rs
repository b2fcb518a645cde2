use core::result::Result;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitsError {
    /// A value of width `found` bits was read as `expected` bits.
    WidthMismatch {
        expected: u32,
        found: u32
    }
}

impl ::core::fmt::Display for BitsError {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> Result<(), ::core::fmt::Error> {
        <Self as ::core::fmt::Debug>::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl ::std::error::Error for BitsError {}

pub type BitsResult<T> = Result<T, BitsError>;
