//! fdlibm-exact math kernels and shared helpers.
//!
//! Every routine here reproduces its fdlibm reference algorithm bit for bit,
//! driving the computation through 32-bit views of the binary64 encoding.
//! Each arithmetic step rounds exactly once at double precision; nothing in
//! this module may use fused multiply-add or reassociate expressions.

#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod cbrt;
mod exp;
mod hypot;
mod sqrt;

pub use cbrt::cbrt;
pub use exp::exp;
pub use hypot::hypot;
pub use sqrt::sqrt;

// ========= bit helpers =========

#[inline(always)]
fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

/// Sign + exponent + top 20 mantissa bits.
#[inline(always)]
fn hi_word(x: f64) -> u32 {
    (f64_to_bits(x) >> 32) as u32
}

/// Bottom 32 mantissa bits.
#[inline(always)]
fn lo_word(x: f64) -> u32 {
    (f64_to_bits(x) & 0xffff_ffffu64) as u32
}

#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (lo as u64))
}

/// Replace the high word, keep the low word. fdlibm's `__HI(x) = hi`.
#[inline(always)]
fn with_hi_word(x: f64, hi: u32) -> f64 {
    f64_from_bits(((hi as u64) << 32) | (f64_to_bits(x) & 0xffff_ffffu64))
}

/// Replace the low word, keep the high word. fdlibm's `__LO(x) = lo`.
#[inline(always)]
fn with_lo_word(x: f64, lo: u32) -> f64 {
    f64_from_bits((f64_to_bits(x) & 0xffff_ffff_0000_0000u64) | (lo as u64))
}
