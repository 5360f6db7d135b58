//! Scalar arithmetic modulo L = 2^252 + 27742317777372353535851937790883648493
//!
//! Scalars are four little-endian 64-bit limbs, always fully reduced.
//! Reduction shifts the input in one bit at a time and subtracts L when
//! the remainder reaches it, so any input length is accepted.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// The group order L
const L: [u64; 4] = [
    0x5812631a5cf5d3ed,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];

/// L - 2, the exponent for inversion
const L_MINUS_2: [u64; 4] = [
    0x5812631a5cf5d3eb,
    0x14def9dea2f79cd6,
    0x0000000000000000,
    0x1000000000000000,
];

/// Scalar value modulo L
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub(crate) struct ScalarValue(pub(crate) [u64; 4]);

fn sub_with_borrow(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut out = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d1, b1) = a[i].overflowing_sub(b[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        out[i] = d2;
        borrow = (b1 | b2) as u64;
    }
    (out, borrow)
}

fn add_limbs(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut out = [0u64; 4];
    let mut carry = 0u64;
    for i in 0..4 {
        let (s1, c1) = a[i].overflowing_add(b[i]);
        let (s2, c2) = s1.overflowing_add(carry);
        out[i] = s2;
        carry = (c1 | c2) as u64;
    }
    out
}

/// Subtract L if `a >= L`; `a` must be below 2L
fn conditional_sub_l(a: &[u64; 4]) -> [u64; 4] {
    let (diff, borrow) = sub_with_borrow(a, &L);
    let keep = Choice::from(borrow as u8);
    let mut out = [0u64; 4];
    for i in 0..4 {
        out[i] = u64::conditional_select(&diff[i], &a[i], keep);
    }
    out
}

/// Reduce a little-endian limb string modulo L
fn reduce_limbs(limbs: &[u64]) -> [u64; 4] {
    let mut r = [0u64; 4];
    for &limb in limbs.iter().rev() {
        for bit in (0..64).rev() {
            r = [
                (r[0] << 1) | ((limb >> bit) & 1),
                (r[1] << 1) | (r[0] >> 63),
                (r[2] << 1) | (r[1] >> 63),
                (r[3] << 1) | (r[2] >> 63),
            ];
            r = conditional_sub_l(&r);
        }
    }
    r
}

impl ScalarValue {
    pub(crate) const ZERO: ScalarValue = ScalarValue([0, 0, 0, 0]);
    pub(crate) const ONE: ScalarValue = ScalarValue([1, 0, 0, 0]);

    pub(crate) fn from_u64(value: u64) -> Self {
        ScalarValue([value, 0, 0, 0])
    }

    /// Little-endian bytes of any length, reduced mod L
    pub(crate) fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        let mut limbs = vec![0u64; bytes.len().div_ceil(8)];
        for (i, chunk) in bytes.chunks(8).enumerate() {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            limbs[i] = u64::from_le_bytes(word);
        }
        let value = ScalarValue(reduce_limbs(&limbs));
        limbs.zeroize();
        value
    }

    /// Canonical little-endian bytes; `None` when the value is not below L
    pub(crate) fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_le_bytes(word);
        }
        let (_, borrow) = sub_with_borrow(&limbs, &L);
        if borrow == 1 {
            Some(ScalarValue(limbs))
        } else {
            None
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Bit `i` of the value, least significant first
    pub(crate) fn bit(&self, i: usize) -> u8 {
        ((self.0[i / 64] >> (i % 64)) & 1) as u8
    }

    pub(crate) fn add(&self, other: &ScalarValue) -> ScalarValue {
        ScalarValue(conditional_sub_l(&add_limbs(&self.0, &other.0)))
    }

    pub(crate) fn sub(&self, other: &ScalarValue) -> ScalarValue {
        let (diff, borrow) = sub_with_borrow(&self.0, &other.0);
        let mask = 0u64.wrapping_sub(borrow);
        let correction = [L[0] & mask, L[1] & mask, L[2] & mask, L[3] & mask];
        ScalarValue(add_limbs(&diff, &correction))
    }

    pub(crate) fn neg(&self) -> ScalarValue {
        ScalarValue::ZERO.sub(self)
    }

    pub(crate) fn mul(&self, other: &ScalarValue) -> ScalarValue {
        let a = &self.0;
        let b = &other.0;
        let mut t = [0u64; 8];
        for i in 0..4 {
            let mut carry: u128 = 0;
            for j in 0..4 {
                let acc = t[i + j] as u128 + (a[i] as u128) * (b[j] as u128) + carry;
                t[i + j] = acc as u64;
                carry = acc >> 64;
            }
            t[i + 4] = carry as u64;
        }
        let value = ScalarValue(reduce_limbs(&t));
        t.zeroize();
        value
    }

    /// self^(L-2); zero maps to zero
    pub(crate) fn invert(&self) -> ScalarValue {
        let mut result = ScalarValue::ONE;
        for i in (0..256).rev() {
            result = result.mul(&result);
            if (L_MINUS_2[i / 64] >> (i % 64)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }

    pub(crate) fn is_zero(&self) -> Choice {
        self.ct_eq(&ScalarValue::ZERO)
    }
}

impl ConstantTimeEq for ScalarValue {
    fn ct_eq(&self, other: &ScalarValue) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}
