//! cbrt(x) implementation.
//!
//! fdlibm s_cbrt: a 5-bit estimate built directly in the exponent field with
//! a magic constant, a degree-2 rational refinement to ~23 bits, then one
//! Newton iteration. Bit-exact against the reference on all input classes;
//! the final error is below 0.667 ulp.

use super::{hi_word, lo_word, with_hi_word, with_lo_word};

const B1: u32 = 715094163; // B1 = (682-0.03306235651)*2**20
const B2: u32 = 696219795; // B2 = (664-0.03306235651)*2**20

const C: f64 = f64::from_bits(0x3fe1_5f15_f15f_15f0); //  5.42857142857142815906e-01 = 19/35
const D: f64 = f64::from_bits(0xbfe6_91de_2532_c834); // -7.05306122448979611050e-01 = -864/1225
const E: f64 = f64::from_bits(0x3ff6_a0ea_0ea0_ea0f); //  1.41428571428571436819e+00 = 99/70
const F: f64 = f64::from_bits(0x3ff9_b6db_6db6_db6e); //  1.60714285714285720630e+00 = 45/28
const G: f64 = f64::from_bits(0x3fd6_db6d_b6db_6db7); //  3.57142857142857150787e-01 = 5/14

#[inline]
pub fn cbrt(x: f64) -> f64 {
    let hw = hi_word(x);
    let sign = hw & 0x8000_0000;
    let hx = hw ^ sign;

    if hx >= 0x7ff0_0000 {
        return x + x; // cbrt(NaN, Inf) is itself
    }
    if (hx | lo_word(x)) == 0 {
        return x; // cbrt(+-0) is itself
    }

    let x = with_hi_word(x, hx); // x <- |x|

    // rough cbrt to 5 bits
    let mut t;
    if hx < 0x0010_0000 {
        // subnormal: scale into the normal range first
        t = with_hi_word(0.0, 0x4350_0000); // t = 2^54
        t *= x;
        t = with_hi_word(t, hi_word(t) / 3 + B2);
    } else {
        t = with_hi_word(0.0, hx / 3 + B1);
    }

    // new cbrt to 23 bits
    let r = t * t / x;
    let s = C + r * t;
    t *= G + F / (s + E + D / s);

    // chop to 20 bits and force it above cbrt(x)
    t = with_lo_word(t, 0);
    t = with_hi_word(t, hi_word(t) + 1);

    // one Newton step to 53 bits
    let s = t * t; // t*t is exact
    let mut r = x / s;
    let w = t + t;
    r = (r - t) / (w + r); // r-t is exact
    t += t * r;

    // restore the sign bit
    with_hi_word(t, hi_word(t) | sign)
}
