/*!
The Ed25519 suite.

Group arithmetic on the prime-order subgroup of edwards25519 using the
RFC 8032 encodings, SHA-256 as the hash, the hash-stream XOF and an
OS-seeded ChaCha20 random stream. Scalar multiplication and comparisons
run in constant time.
*/

mod field;
mod point;
mod scalar;

use std::any::Any;
use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use sha2::digest::DynDigest;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{names, sizes::ed25519 as sizes};
use crate::core::crypto::traits::{
    Encoding, Group, GroupResult, HashFactory, Marshaling, Point, Random, Scalar, Suite, Xof,
    XofFactory,
};
use crate::core::crypto::xof::HashStreamXof;
use crate::core::error::{EncodingError, GroupError};

use self::point::{BASEPOINT, EdwardsPoint};
use self::scalar::ScalarValue;

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

fn check_length(data: &[u8], expected: usize) -> Result<(), EncodingError> {
    if data.len() != expected {
        return Err(EncodingError::InvalidLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Scalar modulo the edwards25519 group order
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519Scalar(ScalarValue);

impl Ed25519Scalar {
    fn boxed(value: ScalarValue) -> Box<dyn Scalar> {
        Box::new(Ed25519Scalar(value))
    }

    fn downcast(other: &dyn Scalar) -> GroupResult<&ScalarValue> {
        other
            .as_any()
            .downcast_ref::<Ed25519Scalar>()
            .map(|s| &s.0)
            .ok_or(GroupError::ForeignElement)
    }
}

impl fmt::Display for Ed25519Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0.to_bytes())
    }
}

impl Marshaling for Ed25519Scalar {
    fn marshal_size(&self) -> usize {
        sizes::SCALAR_SIZE
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), EncodingError> {
        check_length(data, sizes::SCALAR_SIZE)?;
        let mut bytes = [0u8; sizes::SCALAR_SIZE];
        bytes.copy_from_slice(data);
        let value = ScalarValue::from_canonical_bytes(&bytes).ok_or(EncodingError::NonCanonical);
        bytes.zeroize();
        self.0 = value?;
        Ok(())
    }
}

impl Scalar for Ed25519Scalar {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Scalar> {
        Box::new(self.clone())
    }

    fn equal(&self, other: &dyn Scalar) -> bool {
        match Self::downcast(other) {
            Ok(value) => bool::from(self.0.ct_eq(value)),
            Err(_) => false,
        }
    }

    fn set_int64(&self, value: i64) -> Box<dyn Scalar> {
        let magnitude = ScalarValue::from_u64(value.unsigned_abs());
        if value < 0 {
            Self::boxed(magnitude.neg())
        } else {
            Self::boxed(magnitude)
        }
    }

    fn zero(&self) -> Box<dyn Scalar> {
        Self::boxed(ScalarValue::ZERO)
    }

    fn one(&self) -> Box<dyn Scalar> {
        Self::boxed(ScalarValue::ONE)
    }

    fn add(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(Self::boxed(self.0.add(Self::downcast(other)?)))
    }

    fn sub(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(Self::boxed(self.0.sub(Self::downcast(other)?)))
    }

    fn neg(&self) -> Box<dyn Scalar> {
        Self::boxed(self.0.neg())
    }

    fn mul(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(Self::boxed(self.0.mul(Self::downcast(other)?)))
    }

    fn div(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        let divisor = Self::downcast(other)?;
        if bool::from(divisor.is_zero()) {
            return Err(GroupError::NonInvertible);
        }
        Ok(Self::boxed(self.0.mul(&divisor.invert())))
    }

    fn inv(&self) -> GroupResult<Box<dyn Scalar>> {
        if bool::from(self.0.is_zero()) {
            return Err(GroupError::NonInvertible);
        }
        Ok(Self::boxed(self.0.invert()))
    }

    fn pick(&self, rng: &mut dyn RngCore) -> Box<dyn Scalar> {
        let mut wide = [0u8; sizes::WIDE_SCALAR_SIZE];
        rng.fill_bytes(&mut wide);
        let value = ScalarValue::from_bytes_mod_order(&wide);
        wide.zeroize();
        Self::boxed(value)
    }

    fn set_bytes(&self, bytes: &[u8]) -> Box<dyn Scalar> {
        Self::boxed(ScalarValue::from_bytes_mod_order(bytes))
    }
}

/// Element of the edwards25519 group
#[derive(Clone, Copy, Debug)]
pub struct Ed25519Point(EdwardsPoint);

impl Ed25519Point {
    fn boxed(point: EdwardsPoint) -> Box<dyn Point> {
        Box::new(Ed25519Point(point))
    }

    fn downcast(other: &dyn Point) -> GroupResult<&EdwardsPoint> {
        other
            .as_any()
            .downcast_ref::<Ed25519Point>()
            .map(|p| &p.0)
            .ok_or(GroupError::ForeignElement)
    }
}

impl fmt::Display for Ed25519Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0.compress())
    }
}

impl Marshaling for Ed25519Point {
    fn marshal_size(&self) -> usize {
        sizes::POINT_SIZE
    }

    fn marshal_binary(&self) -> Vec<u8> {
        self.0.compress().to_vec()
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), EncodingError> {
        check_length(data, sizes::POINT_SIZE)?;
        let mut bytes = [0u8; sizes::POINT_SIZE];
        bytes.copy_from_slice(data);
        self.0 = EdwardsPoint::decompress(&bytes).ok_or(EncodingError::InvalidPoint)?;
        Ok(())
    }
}

impl Point for Ed25519Point {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Point> {
        Box::new(*self)
    }

    fn equal(&self, other: &dyn Point) -> bool {
        match Self::downcast(other) {
            Ok(point) => bool::from(self.0.ct_eq(point)),
            Err(_) => false,
        }
    }

    fn null(&self) -> Box<dyn Point> {
        Self::boxed(EdwardsPoint::identity())
    }

    fn base(&self) -> Box<dyn Point> {
        Self::boxed(*BASEPOINT)
    }

    fn pick(&self, rng: &mut dyn RngCore) -> Box<dyn Point> {
        let mut wide = [0u8; sizes::WIDE_SCALAR_SIZE];
        rng.fill_bytes(&mut wide);
        let mut k = ScalarValue::from_bytes_mod_order(&wide);
        wide.zeroize();
        let point = BASEPOINT.mul(&k);
        k.zeroize();
        Self::boxed(point)
    }

    fn add(&self, other: &dyn Point) -> GroupResult<Box<dyn Point>> {
        Ok(Self::boxed(self.0.add(Self::downcast(other)?)))
    }

    fn sub(&self, other: &dyn Point) -> GroupResult<Box<dyn Point>> {
        Ok(Self::boxed(self.0.sub(Self::downcast(other)?)))
    }

    fn neg(&self) -> Box<dyn Point> {
        Self::boxed(self.0.neg())
    }

    fn mul(&self, scalar: &dyn Scalar) -> GroupResult<Box<dyn Point>> {
        Ok(Self::boxed(self.0.mul(Ed25519Scalar::downcast(scalar)?)))
    }
}

/// The Ed25519 suite
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteEd25519;

impl SuiteEd25519 {
    /// Create the suite
    pub fn new() -> Self {
        SuiteEd25519
    }
}

impl fmt::Display for SuiteEd25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(names::ED25519)
    }
}

impl Group for SuiteEd25519 {
    fn group_name(&self) -> &str {
        names::ED25519
    }

    fn scalar_len(&self) -> usize {
        sizes::SCALAR_SIZE
    }

    fn scalar(&self) -> Box<dyn Scalar> {
        Ed25519Scalar::boxed(ScalarValue::ZERO)
    }

    fn point_len(&self) -> usize {
        sizes::POINT_SIZE
    }

    fn point(&self) -> Box<dyn Point> {
        Ed25519Point::boxed(EdwardsPoint::identity())
    }
}

impl Encoding for SuiteEd25519 {}

impl HashFactory for SuiteEd25519 {
    fn hash(&self) -> Box<dyn DynDigest> {
        Box::new(Sha256::default())
    }
}

impl XofFactory for SuiteEd25519 {
    fn xof(&self, seed: &[u8]) -> Box<dyn Xof> {
        Box::new(HashStreamXof::new(seed))
    }
}

impl Random for SuiteEd25519 {
    fn random_stream(&self) -> Box<dyn RngCore + Send> {
        Box::new(ChaCha20Rng::from_os_rng())
    }
}

impl Suite for SuiteEd25519 {}
