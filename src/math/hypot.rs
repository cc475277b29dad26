//! hypot(x,y) implementation.
//!
//! fdlibm e_hypot: order the operands by sign-cleared high word, rescale
//! through the exponent field when the larger magnitude is above 2^500 or
//! the smaller below 2^-500, then square via an exact head/tail split so a
//! single sqrt yields the result to under 1 ulp. Bit-exact against the
//! reference, including its Inf-dominates-NaN special-case ordering.

use super::{hi_word, lo_word, sqrt, with_hi_word};

#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    let mut ha = (hi_word(x) & 0x7fff_ffff) as i32; // high word of |x|
    let mut hb = (hi_word(y) & 0x7fff_ffff) as i32; // high word of |y|
    let (mut a, mut b) = if hb > ha {
        core::mem::swap(&mut ha, &mut hb);
        (y, x)
    } else {
        (x, y)
    };
    a = with_hi_word(a, ha as u32); // a <- |a|
    b = with_hi_word(b, hb as u32); // b <- |b|

    if ha - hb > 0x3c0_0000 {
        return a + b; // a/b > 2^60: b is negligible
    }

    let mut k: i32 = 0;
    if ha > 0x5f30_0000 {
        // a > 2^500
        if ha >= 0x7ff0_0000 {
            // Inf or NaN
            let mut w = a + b; // for sNaN
            if ((ha as u32 & 0xf_ffff) | lo_word(a)) == 0 {
                w = a;
            }
            if (((hb as u32) ^ 0x7ff0_0000) | lo_word(b)) == 0 {
                w = b;
            }
            return w;
        }
        // scale a and b by 2^-600
        ha -= 0x2580_0000;
        hb -= 0x2580_0000;
        k += 600;
        a = with_hi_word(a, ha as u32);
        b = with_hi_word(b, hb as u32);
    }
    if hb < 0x20b0_0000 {
        // b < 2^-500
        if hb <= 0x000f_ffff {
            // subnormal b or 0
            if (hb as u32 | lo_word(b)) == 0 {
                return a;
            }
            let t1 = with_hi_word(0.0, 0x7fd0_0000); // t1 = 2^1022
            b *= t1;
            a *= t1;
            k -= 1022;
            // both operands were scaled by the same power, so the
            // ordering holds and no re-swap is needed
            ha = hi_word(a) as i32;
            hb = hi_word(b) as i32;
        } else {
            // scale a and b by 2^600
            ha += 0x2580_0000;
            hb += 0x2580_0000;
            k -= 600;
            a = with_hi_word(a, ha as u32);
            b = with_hi_word(b, hb as u32);
        }
    }

    // medium size a and b
    let mut w = a - b;
    if w > b {
        let t1 = with_hi_word(0.0, ha as u32);
        let t2 = a - t1;
        w = sqrt(t1 * t1 - (b * (-b) - t2 * (a + t1)));
    } else {
        let a = a + a;
        let y1 = with_hi_word(0.0, hb as u32);
        let y2 = b - y1;
        let t1 = with_hi_word(0.0, (ha + 0x0010_0000) as u32);
        let t2 = a - t1;
        w = sqrt(t1 * y1 - (w * (-w) - (t1 * y2 + t2 * b)));
    }

    if k != 0 {
        let t1 = with_hi_word(1.0, (0x3ff0_0000 + (k << 20)) as u32);
        t1 * w
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypot_specials() {
        assert_eq!(hypot(f64::INFINITY, f64::NAN), f64::INFINITY);
        assert_eq!(hypot(f64::NAN, f64::INFINITY), f64::INFINITY);
        assert_eq!(hypot(f64::NEG_INFINITY, 3.0), f64::INFINITY);
        assert!(hypot(f64::NAN, 3.0).is_nan());
        assert!(hypot(3.0, f64::NAN).is_nan());
        assert_eq!(hypot(0.0, -0.0).to_bits(), 0);
    }

    #[test]
    fn test_hypot_one_zero_operand() {
        let values = [1.0, 3.5, 1e-300, 1e300, f64::from_bits(1), f64::MAX];
        for &x in &values {
            assert_eq!(hypot(x, 0.0).to_bits(), x.to_bits(), "hypot({x},0)");
            assert_eq!(hypot(-x, 0.0).to_bits(), x.to_bits(), "hypot(-{x},0)");
            assert_eq!(hypot(0.0, x).to_bits(), x.to_bits(), "hypot(0,{x})");
        }
    }

    #[test]
    fn test_hypot_pythagorean_scaling() {
        // 3-4-5 triples scaled by powers of two stay exact through every
        // rescaling branch, subnormal operands included.
        for n in -1071..=1021i32 {
            let scale = 2.0f64.powi(n);
            let expected = 5.0 * scale;
            let actual = hypot(3.0 * scale, 4.0 * scale);
            assert_eq!(
                actual.to_bits(),
                expected.to_bits(),
                "hypot(3*2^{n}, 4*2^{n})"
            );
        }
    }

    #[test]
    fn test_hypot_sign_invariance() {
        let pairs = [(3.0, 4.0), (1e-310, 2e-310), (1e300, 7.0), (0.5, 1e-200)];
        for &(x, y) in &pairs {
            let w = hypot(x, y).to_bits();
            assert_eq!(hypot(-x, y).to_bits(), w);
            assert_eq!(hypot(x, -y).to_bits(), w);
            assert_eq!(hypot(-x, -y).to_bits(), w);
        }
    }
}
