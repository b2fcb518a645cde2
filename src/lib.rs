#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(any(feature = "std", test))]
extern crate core;

extern crate serde;

#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate lazy_static;

#[cfg(test)]
extern crate byteorder;

#[cfg(test)]
extern crate bincode;

pub mod error;
pub mod fp_bits;
pub mod reinterpret;
pub mod value;

#[cfg(test)]
mod samples;

pub use error::{BitsError, BitsResult};
pub use fp_bits::{
    float_to_int_bits,
    int_bits_to_float,
    double_to_long_bits,
    long_bits_to_double
};
pub use reinterpret::BitCast;
pub use value::RawBits;
