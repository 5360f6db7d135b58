//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are five 51-bit limbs. Limbs are kept loosely reduced
//! (below 2^52) between operations; `to_bytes` produces the canonical
//! encoding.

use once_cell::sync::Lazy;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldElement(pub(crate) [u64; 5]);

/// Curve constant d = -121665/121666
pub(crate) static EDWARDS_D: Lazy<FieldElement> = Lazy::new(|| {
    FieldElement::from_u64(121665)
        .neg()
        .mul(&FieldElement::from_u64(121666).invert())
});

/// 2d, used by the addition formula
pub(crate) static EDWARDS_D2: Lazy<FieldElement> = Lazy::new(|| EDWARDS_D.add(&EDWARDS_D));

/// A square root of -1, namely 2^((p-1)/4)
pub(crate) static SQRT_M1: Lazy<FieldElement> = Lazy::new(|| {
    let two = FieldElement::from_u64(2);
    two.pow_p58().square().mul(&two)
});

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl FieldElement {
    pub(crate) const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);
    pub(crate) const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    pub(crate) fn from_u64(value: u64) -> Self {
        Self::reduce([value, 0, 0, 0, 0])
    }

    /// Carry each limb into the next, folding the top carry back times 19
    fn reduce(mut limbs: [u64; 5]) -> Self {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Decode 32 little-endian bytes, ignoring the top bit
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 5];
        let mut acc: u128 = 0;
        let mut bits = 0;
        let mut i = 0;

        for &byte in bytes.iter() {
            acc |= (byte as u128) << bits;
            bits += 8;
            if bits >= 51 && i < 5 {
                limbs[i] = (acc as u64) & LOW_51_BIT_MASK;
                acc >>= 51;
                bits -= 51;
                i += 1;
            }
        }

        FieldElement(limbs)
    }

    /// Canonical little-endian encoding
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut l = Self::reduce(self.0).0;

        // q = 1 iff the value is >= p
        let mut q = (l[0] + 19) >> 51;
        q = (l[1] + q) >> 51;
        q = (l[2] + q) >> 51;
        q = (l[3] + q) >> 51;
        q = (l[4] + q) >> 51;

        l[0] += 19 * q;

        l[1] += l[0] >> 51;
        l[0] &= LOW_51_BIT_MASK;
        l[2] += l[1] >> 51;
        l[1] &= LOW_51_BIT_MASK;
        l[3] += l[2] >> 51;
        l[2] &= LOW_51_BIT_MASK;
        l[4] += l[3] >> 51;
        l[3] &= LOW_51_BIT_MASK;
        l[4] &= LOW_51_BIT_MASK;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0;
        let mut idx = 0;
        for limb in l {
            acc |= (limb as u128) << bits;
            bits += 51;
            while bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                bits -= 8;
                idx += 1;
            }
        }
        out[idx] = acc as u8;

        out
    }

    pub(crate) fn add(&self, other: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &other.0;
        Self::reduce([
            a[0] + b[0],
            a[1] + b[1],
            a[2] + b[2],
            a[3] + b[3],
            a[4] + b[4],
        ])
    }

    pub(crate) fn sub(&self, other: &FieldElement) -> FieldElement {
        // Add 16p first so no limb underflows
        let a = &self.0;
        let b = &other.0;
        Self::reduce([
            (a[0] + 36028797018963664) - b[0],
            (a[1] + 36028797018963952) - b[1],
            (a[2] + 36028797018963952) - b[2],
            (a[3] + 36028797018963952) - b[3],
            (a[4] + 36028797018963952) - b[4],
        ])
    }

    pub(crate) fn neg(&self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    pub(crate) fn mul(&self, other: &FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &other.0;

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += c0 >> 51;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;

        c2 += c1 >> 51;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;

        c3 += c2 >> 51;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;

        c4 += c3 >> 51;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;

        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    pub(crate) fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Square `k` times
    fn pow2k(&self, k: u32) -> FieldElement {
        let mut z = *self;
        for _ in 0..k {
            z = z.square();
        }
        z
    }

    /// Returns (self^(2^250 - 1), self^11)
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        let t0 = self.square(); // 2
        let t1 = t0.square().square(); // 8
        let t2 = self.mul(&t1); // 9
        let t3 = t0.mul(&t2); // 11
        let t4 = t3.square(); // 22
        let t5 = t2.mul(&t4); // 2^5 - 1
        let t6 = t5.pow2k(5); // 2^10 - 2^5
        let t7 = t6.mul(&t5); // 2^10 - 1
        let t8 = t7.pow2k(10); // 2^20 - 2^10
        let t9 = t8.mul(&t7); // 2^20 - 1
        let t10 = t9.pow2k(20); // 2^40 - 2^20
        let t11 = t10.mul(&t9); // 2^40 - 1
        let t12 = t11.pow2k(10); // 2^50 - 2^10
        let t13 = t12.mul(&t7); // 2^50 - 1
        let t14 = t13.pow2k(50); // 2^100 - 2^50
        let t15 = t14.mul(&t13); // 2^100 - 1
        let t16 = t15.pow2k(100); // 2^200 - 2^100
        let t17 = t16.mul(&t15); // 2^200 - 1
        let t18 = t17.pow2k(50); // 2^250 - 2^50
        let t19 = t18.mul(&t13); // 2^250 - 1

        (t19, t3)
    }

    /// self^(p-2); zero maps to zero
    pub(crate) fn invert(&self) -> FieldElement {
        let (t19, t3) = self.pow22501();
        t19.pow2k(5).mul(&t3)
    }

    /// self^((p-5)/8)
    fn pow_p58(&self) -> FieldElement {
        let (t19, _) = self.pow22501();
        self.mul(&t19.pow2k(2))
    }

    /// Low bit of the canonical encoding
    pub(crate) fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::ZERO)
    }

    /// Square root of u/v.
    ///
    /// Returns (1, sqrt(u/v)) when u/v is a square and (0, garbage)
    /// otherwise. For u = 0 the result is (1, 0).
    pub(crate) fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        let v3 = v.square().mul(v);
        let v7 = v3.square().mul(v);
        let mut r = u.mul(&v3).mul(&u.mul(&v7).pow_p58());
        let check = v.mul(&r.square());

        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&u.neg());

        let r_prime = r.mul(&SQRT_M1);
        r.conditional_assign(&r_prime, flipped_sign);

        (correct_sign | flipped_sign, r)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}
