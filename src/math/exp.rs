//! exp(x) implementation.
//!
//! fdlibm e_exp: reduce x to r with |r| <= 0.5 ln2 against split hi/lo ln2
//! constants, evaluate a degree-5 rational minimax approximation of exp(r),
//! then scale by 2^k through the exponent field. Bit-exact against the
//! reference, including the overflow/underflow product idioms.

use super::{hi_word, lo_word, with_hi_word};

const ONE: f64 = 1.0;
const HALF: [f64; 2] = [0.5, -0.5];
const HUGE: f64 = 1.0e+300;
const TWOM1000: f64 = f64::from_bits(0x0170_0000_0000_0000); // 9.33263618503218878990e-302 = 2^-1000
const O_THRESHOLD: f64 = f64::from_bits(0x4086_2e42_fefa_39ef); //  7.09782712893383973096e+02
const U_THRESHOLD: f64 = f64::from_bits(0xc087_4910_d52d_3051); // -7.45133219101941108420e+02
const LN2_HI: [f64; 2] = [
    f64::from_bits(0x3fe6_2e42_fee0_0000), //  6.93147180369123816490e-01
    f64::from_bits(0xbfe6_2e42_fee0_0000), // -6.93147180369123816490e-01
];
const LN2_LO: [f64; 2] = [
    f64::from_bits(0x3dea_39ef_3579_3c76), //  1.90821492927058770002e-10
    f64::from_bits(0xbdea_39ef_3579_3c76), // -1.90821492927058770002e-10
];
const INV_LN2: f64 = f64::from_bits(0x3ff7_1547_652b_82fe); // 1.44269504088896338700e+00

const P1: f64 = f64::from_bits(0x3fc5_5555_5555_553e); //  1.66666666666666019037e-01
const P2: f64 = f64::from_bits(0xbf66_c16c_16be_bd93); // -2.77777777770155933842e-03
const P3: f64 = f64::from_bits(0x3f11_566a_af25_de2c); //  6.61375632143793436117e-05
const P4: f64 = f64::from_bits(0xbebb_bd41_c5d2_6bf1); // -1.65339022054652515390e-06
const P5: f64 = f64::from_bits(0x3e66_3769_72be_a4d0); //  4.13813679705723846039e-08

#[inline]
pub fn exp(x: f64) -> f64 {
    let hw = hi_word(x);
    let xsb = ((hw >> 31) & 1) as usize; // sign bit of x
    let hx = hw & 0x7fff_ffff; // high word of |x|

    // filter out non-finite and out-of-range arguments
    if hx >= 0x4086_2e42 {
        // |x| >= 709.78...
        if hx >= 0x7ff0_0000 {
            if ((hx & 0xf_ffff) | lo_word(x)) != 0 {
                return x + x; // NaN
            }
            return if xsb == 0 { x } else { 0.0 }; // exp(+-inf) = {inf, 0}
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE; // overflow
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000; // underflow
        }
    }

    // argument reduction
    let mut x = x;
    let mut hi = 0.0;
    let mut lo = 0.0;
    let mut k: i32 = 0;
    if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2
        if hx < 0x3ff0_a2b2 {
            // and |x| < 1.5 ln2
            hi = x - LN2_HI[xsb];
            lo = LN2_LO[xsb];
            k = 1 - xsb as i32 - xsb as i32;
        } else {
            k = (INV_LN2 * x + HALF[xsb]) as i32;
            let t = k as f64;
            hi = x - t * LN2_HI[0]; // t*LN2_HI is exact here
            lo = t * LN2_LO[0];
        }
        x = hi - lo;
    } else if hx < 0x3e30_0000 {
        // |x| < 2^-28
        return ONE + x;
    }

    // x is now in primary range
    let t = x * x;
    let c = x - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    if k == 0 {
        return ONE - ((x * c / (c - 2.0)) - x);
    }
    let y = ONE - ((lo - (x * c / (2.0 - c))) - hi);
    if k >= -1021 {
        // add k to y's exponent
        with_hi_word(y, hi_word(y).wrapping_add((k << 20) as u32))
    } else {
        // scale in two steps to dodge subnormal rounding loss
        let y = with_hi_word(y, hi_word(y).wrapping_add(((k + 1000) << 20) as u32));
        y * TWOM1000
    }
}
