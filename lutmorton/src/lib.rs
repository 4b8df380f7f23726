//! Two-axis Morton (Z-order) codec for 16-bit coordinates.
//!
//! `x` lives on the even bits of the code and `y` on the odd bits. This
//! layout is shared with every external consumer of the key and must not
//! change.

mod key;
mod lut;
mod table_gen;

pub use key::{decode, denormalize, encode, normalize, KeyError, NormalizedKey};
pub use lut::{morton_lut, unmorton_lut};

/// Mask selecting the bits a dilated value may occupy.
pub const EVEN_BITS: u32 = 0x5555_5555;

/// Largest coordinate accepted on either axis.
pub const MAX_COORDINATE: u16 = u16::MAX;

/// Spreads the 16 bits of `v` so that bit `k` lands on bit `2k`.
/// Odd bits of the result are always zero.
pub const fn dilate(v: u16) -> u32 {
    let mut n = v as u32;
    n = (n | (n << 8)) & 0x00FF_00FF;
    n = (n | (n << 4)) & 0x0F0F_0F0F;
    n = (n | (n << 2)) & 0x3333_3333;
    n = (n | (n << 1)) & 0x5555_5555;
    n
}

/// Inverse of [`dilate`]. Odd bits of `v` are discarded before packing.
pub const fn contract(v: u32) -> u16 {
    let mut n = v & EVEN_BITS;
    n = (n | (n >> 1)) & 0x3333_3333;
    n = (n | (n >> 2)) & 0x0F0F_0F0F;
    n = (n | (n >> 4)) & 0x00FF_00FF;
    n = (n | (n >> 8)) & 0x0000_FFFF;
    n as u16
}

pub const fn morton(x: u16, y: u16) -> u32 {
    (dilate(y) << 1) | dilate(x)
}

/// Splits a code back into `(x, y)`. Every `u32` decodes to some pair.
pub const fn unmorton(code: u32) -> (u16, u16) {
    (contract(code & EVEN_BITS), contract((code >> 1) & EVEN_BITS))
}

/// [`morton`] for callers holding wider integers: anything above bit 15 is
/// masked off on both axes, never rejected.
pub const fn morton_masked(x: u32, y: u32) -> u32 {
    morton((x & 0xFFFF) as u16, (y & 0xFFFF) as u16)
}
