// Bit patterns shared by the unit tests.

const F32_SPECIAL: [u32; 16] = [
    0x0000_0000, // +0
    0x8000_0000, // -0
    0x0000_0001, // smallest denormal
    0x807f_ffff, // largest negative denormal
    0x0080_0000, // smallest normal
    0x3f80_0000, // 1.0
    0x4640_e685, // 12345.63
    0x7f7f_ffff, // largest finite
    0xff7f_ffff,
    0x7f80_0000, // +inf
    0xff80_0000, // -inf
    0x7fc0_0000, // quiet NaN
    0x7fc0_beef,
    0xffc0_0001,
    0x7f80_0001, // signaling NaN
    0xffbf_ffff
];

const F64_SPECIAL: [u64; 12] = [
    0x0000_0000_0000_0000,
    0x8000_0000_0000_0000,
    0x0000_0000_0000_0001,
    0x0010_0000_0000_0000,
    0x3ff0_0000_0000_0000,
    0x7fef_ffff_ffff_ffff,
    0x7ff0_0000_0000_0000,
    0xfff0_0000_0000_0000,
    0x7ff8_0000_0000_0000,
    0x7ff8_0000_dead_beef,
    0xfff8_0000_0000_0001,
    0x7ff0_0000_0000_0001
];

lazy_static! {
    pub static ref F32_PATTERNS: Vec<u32> = {
        let mut v = F32_SPECIAL.to_vec();
        v.extend((0..=255u32).map(|i| i.wrapping_mul(0x0101_0101)));
        v.push(::std::u32::MAX);
        v
    };

    pub static ref F64_PATTERNS: Vec<u64> = {
        let mut v = F64_SPECIAL.to_vec();
        v.extend((0..=255u64).map(|i| i.wrapping_mul(0x0101_0101_0101_0101)));
        v.push(::std::u64::MAX);
        v
    };
}

/// Every `step`-th `i32` from `i32::MIN`, plus both ends of the range.
pub fn sweep_i32(step: u32) -> impl Iterator<Item = i32> {
    let max = ::std::u32::MAX as u64;
    (0..=max / step as u64)
        .map(move |i| (i * step as u64) as u32)
        .chain(Some(::std::u32::MAX))
        .map(|u| (u ^ 0x8000_0000) as i32)
}
