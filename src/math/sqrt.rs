//! sqrt(x) implementation.
//!
//! fdlibm e_sqrt: normalize the operand into its two 32-bit words, then
//! generate the root one bit at a time with integer arithmetic, finishing
//! with a round-to-nearest-even correction. Correctly rounded on every
//! input, independent of the target's sqrt hardware.

use super::{hi_word, lo_word, with_hi_lo};

const TINY: f64 = 1.0e-300;
const SIGN: u32 = 0x8000_0000;

#[inline]
pub fn sqrt(x: f64) -> f64 {
    let mut ix0 = hi_word(x) as i32;
    let mut ix1 = lo_word(x);

    // Inf and NaN
    if (ix0 & 0x7ff0_0000) == 0x7ff0_0000 {
        // sqrt(NaN) = NaN, sqrt(+inf) = +inf, sqrt(-inf) = NaN
        return x * x + x;
    }
    // zero and negative arguments
    if ix0 <= 0 {
        if ((ix0 as u32 & !SIGN) | ix1) == 0 {
            return x; // sqrt(+-0) = +-0
        }
        if ix0 < 0 {
            return (x - x) / (x - x); // sqrt(negative) = NaN
        }
    }

    // normalize x
    let mut m = ix0 >> 20;
    if m == 0 {
        // subnormal
        while ix0 == 0 {
            m -= 21;
            ix0 |= (ix1 >> 11) as i32;
            ix1 <<= 21;
        }
        let mut i = 0;
        while (ix0 & 0x0010_0000) == 0 {
            ix0 <<= 1;
            i += 1;
        }
        m -= i - 1;
        if i > 0 {
            ix0 |= (ix1 >> (32 - i)) as i32;
            ix1 <<= i;
        }
    }
    m -= 1023; // unbias exponent
    ix0 = (ix0 & 0x000f_ffff) | 0x0010_0000;
    if (m & 1) == 1 {
        // odd m, double x to make it even
        ix0 += ix0 + ((ix1 & SIGN) >> 31) as i32;
        ix1 = ix1.wrapping_add(ix1);
    }
    m >>= 1; // m = [m/2]

    // generate sqrt(x) bit by bit
    ix0 += ix0 + ((ix1 & SIGN) >> 31) as i32;
    ix1 = ix1.wrapping_add(ix1);
    let mut q: i32 = 0; // [q,q1] = sqrt(x)
    let mut q1: u32 = 0;
    let mut s0: i32 = 0;
    let mut s1: u32 = 0;
    let mut r: u32 = 0x0020_0000; // moving bit from right to left

    while r != 0 {
        let t = s0 + r as i32;
        if t <= ix0 {
            s0 = t + r as i32;
            ix0 -= t;
            q += r as i32;
        }
        ix0 += ix0 + ((ix1 & SIGN) >> 31) as i32;
        ix1 = ix1.wrapping_add(ix1);
        r >>= 1;
    }

    r = SIGN;
    while r != 0 {
        let t1 = s1.wrapping_add(r);
        let t = s0;
        if t < ix0 || (t == ix0 && t1 <= ix1) {
            s1 = t1.wrapping_add(r);
            if (t1 & SIGN) == SIGN && (s1 & SIGN) == 0 {
                s0 += 1;
            }
            ix0 -= t;
            if ix1 < t1 {
                ix0 -= 1;
            }
            ix1 = ix1.wrapping_sub(t1);
            q1 = q1.wrapping_add(r);
        }
        ix0 += ix0 + ((ix1 & SIGN) >> 31) as i32;
        ix1 = ix1.wrapping_add(ix1);
        r >>= 1;
    }

    // use floating add to find out rounding direction
    if (ix0 as u32 | ix1) != 0 {
        let mut z = 1.0 - TINY; // raises inexact
        if z >= 1.0 {
            z = 1.0 + TINY;
            if q1 == 0xffff_ffff {
                q1 = 0;
                q += 1;
            } else if z > 1.0 {
                if q1 == 0xffff_fffe {
                    q += 1;
                }
                q1 = q1.wrapping_add(2);
            } else {
                q1 += q1 & 1;
            }
        }
    }

    let hi = (((q >> 1) + 0x3fe0_0000) + (m << 20)) as u32;
    let lo = (q1 >> 1) | ((q as u32 & 1) << 31);
    with_hi_lo(hi, lo)
}
