//! Edwards curve point operations for Ed25519
//!
//! Points on -x² + y² = 1 + d·x²·y² in extended coordinates
//! (X:Y:Z:T) with x = X/Z, y = Y/Z and xy = T/Z.

use once_cell::sync::Lazy;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::{EDWARDS_D, EDWARDS_D2, FieldElement};
use super::scalar::ScalarValue;

/// Compressed encoding of the standard base point (y = 4/5, x even)
pub(crate) const BASEPOINT_COMPRESSED: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

pub(crate) static BASEPOINT: Lazy<EdwardsPoint> = Lazy::new(|| {
    EdwardsPoint::decompress(&BASEPOINT_COMPRESSED).expect("base point encoding is valid")
});

/// Point on the twisted Edwards curve
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl EdwardsPoint {
    /// Identity element (neutral element for addition)
    pub(crate) fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        }
    }

    /// Add two points
    ///
    /// The formula is complete for this curve, so it also doubles.
    pub(crate) fn add(&self, other: &EdwardsPoint) -> EdwardsPoint {
        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&EDWARDS_D2).mul(&other.t);
        let d = self.z.add(&self.z).mul(&other.z);
        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);

        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    pub(crate) fn double(&self) -> EdwardsPoint {
        self.add(self)
    }

    pub(crate) fn neg(&self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
            t: self.t.neg(),
        }
    }

    pub(crate) fn sub(&self, other: &EdwardsPoint) -> EdwardsPoint {
        self.add(&other.neg())
    }

    /// Constant-time double-and-add, most significant bit first
    pub(crate) fn mul(&self, scalar: &ScalarValue) -> EdwardsPoint {
        let mut acc = EdwardsPoint::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let sum = acc.add(self);
            acc = EdwardsPoint::conditional_select(&acc, &sum, Choice::from(scalar.bit(i)));
        }
        acc
    }

    /// Compress to 32 bytes: y with the sign of x in the top bit
    pub(crate) fn compress(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x.mul(&recip);
        let y = self.y.mul(&recip);

        let mut bytes = y.to_bytes();
        bytes[31] |= x.is_negative().unwrap_u8() << 7;
        bytes
    }

    /// Decompress a 32-byte encoding.
    ///
    /// Rejects encodings with y >= p, encodings with no matching x, and
    /// x = 0 with the sign bit set.
    pub(crate) fn decompress(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
        let sign = Choice::from(bytes[31] >> 7);
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;

        let y = FieldElement::from_bytes(&y_bytes);
        if y.to_bytes() != y_bytes {
            return None;
        }

        let yy = y.square();
        let u = yy.sub(&FieldElement::ONE);
        let v = yy.mul(&EDWARDS_D).add(&FieldElement::ONE);
        let (is_square, mut x) = FieldElement::sqrt_ratio(&u, &v);
        if !bool::from(is_square) {
            return None;
        }
        if bool::from(x.is_zero() & sign) {
            return None;
        }

        let flip = x.is_negative() ^ sign;
        let neg_x = x.neg();
        x.conditional_assign(&neg_x, flip);

        Some(EdwardsPoint {
            x,
            y,
            z: FieldElement::ONE,
            t: x.mul(&y),
        })
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
            & self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z))
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_hex(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
        }
        out
    }

    fn same(a: &EdwardsPoint, b: &EdwardsPoint) -> bool {
        bool::from(a.ct_eq(b))
    }

    #[test]
    fn test_basepoint_roundtrip() {
        assert_eq!(BASEPOINT.compress(), BASEPOINT_COMPRESSED);
    }

    #[test]
    fn test_identity_encoding() {
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(EdwardsPoint::identity().compress(), expected);
    }

    #[test]
    fn test_known_multiples() {
        let two_b = from_hex("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022");
        let three_b = from_hex("d4b4f5784868c3020403246717ec169ff79e26608ea126a1ab69ee77d1b16712");

        assert_eq!(BASEPOINT.double().compress(), two_b);
        assert_eq!(BASEPOINT.mul(&ScalarValue::from_u64(2)).compress(), two_b);
        assert_eq!(BASEPOINT.mul(&ScalarValue::from_u64(3)).compress(), three_b);
        assert_eq!(BASEPOINT.double().add(&BASEPOINT).compress(), three_b);
    }

    #[test]
    fn test_negation_flips_sign_bit() {
        let mut expected = BASEPOINT_COMPRESSED;
        expected[31] |= 0x80;
        assert_eq!(BASEPOINT.neg().compress(), expected);
        assert!(same(&BASEPOINT.sub(&BASEPOINT), &EdwardsPoint::identity()));
    }

    #[test]
    fn test_order_times_base_is_identity() {
        let minus_one = ScalarValue::ONE.neg();
        let p = BASEPOINT.mul(&minus_one).add(&BASEPOINT);
        assert!(same(&p, &EdwardsPoint::identity()));
    }

    #[test]
    fn test_rejects_invalid_encodings() {
        // y = p is not canonical
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;
        assert!(EdwardsPoint::decompress(&p).is_none());

        // y = 2 has no matching x
        let mut y2 = [0u8; 32];
        y2[0] = 2;
        assert!(EdwardsPoint::decompress(&y2).is_none());

        // identity with the sign bit set
        let mut neg_zero = [0u8; 32];
        neg_zero[0] = 1;
        neg_zero[31] = 0x80;
        assert!(EdwardsPoint::decompress(&neg_zero).is_none());
    }
}
