//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::fmt;

use crypto_suites::{
    Encoding, EncodingError, Group, GroupResult, HashFactory, Marshaling, Point, Random, Scalar,
    Suite, SuiteEd25519, Xof, XofFactory,
};
use rand::RngCore;
use sha2::digest::DynDigest;

/// Ed25519 under a different name
#[derive(Debug)]
pub struct RenamedSuite {
    name: String,
    inner: SuiteEd25519,
}

impl RenamedSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            inner: SuiteEd25519::new(),
        }
    }
}

impl fmt::Display for RenamedSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Group for RenamedSuite {
    fn group_name(&self) -> &str {
        self.inner.group_name()
    }

    fn scalar_len(&self) -> usize {
        self.inner.scalar_len()
    }

    fn scalar(&self) -> Box<dyn Scalar> {
        self.inner.scalar()
    }

    fn point_len(&self) -> usize {
        self.inner.point_len()
    }

    fn point(&self) -> Box<dyn Point> {
        self.inner.point()
    }
}

impl Encoding for RenamedSuite {}

impl HashFactory for RenamedSuite {
    fn hash(&self) -> Box<dyn DynDigest> {
        self.inner.hash()
    }
}

impl XofFactory for RenamedSuite {
    fn xof(&self, seed: &[u8]) -> Box<dyn Xof> {
        self.inner.xof(seed)
    }
}

impl Random for RenamedSuite {
    fn random_stream(&self) -> Box<dyn RngCore + Send> {
        self.inner.random_stream()
    }
}

impl Suite for RenamedSuite {}

/// Scalar of a toy group, only useful for mixing with a real group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToyScalar(pub u8);

impl fmt::Display for ToyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Marshaling for ToyScalar {
    fn marshal_size(&self) -> usize {
        1
    }

    fn marshal_binary(&self) -> Vec<u8> {
        vec![self.0]
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), EncodingError> {
        match data {
            [b] => {
                self.0 = *b;
                Ok(())
            }
            _ => Err(EncodingError::InvalidLength {
                expected: 1,
                actual: data.len(),
            }),
        }
    }
}

impl Scalar for ToyScalar {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn Scalar> {
        Box::new(*self)
    }

    fn equal(&self, other: &dyn Scalar) -> bool {
        other.as_any().downcast_ref::<ToyScalar>() == Some(self)
    }

    fn set_int64(&self, value: i64) -> Box<dyn Scalar> {
        Box::new(ToyScalar(value as u8))
    }

    fn zero(&self) -> Box<dyn Scalar> {
        Box::new(ToyScalar(0))
    }

    fn one(&self) -> Box<dyn Scalar> {
        Box::new(ToyScalar(1))
    }

    fn add(&self, _other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(self.clone_box())
    }

    fn sub(&self, _other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(self.clone_box())
    }

    fn neg(&self) -> Box<dyn Scalar> {
        self.clone_box()
    }

    fn mul(&self, _other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(self.clone_box())
    }

    fn div(&self, _other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>> {
        Ok(self.clone_box())
    }

    fn inv(&self) -> GroupResult<Box<dyn Scalar>> {
        Ok(self.clone_box())
    }

    fn pick(&self, rng: &mut dyn RngCore) -> Box<dyn Scalar> {
        Box::new(ToyScalar(rng.next_u32() as u8))
    }

    fn set_bytes(&self, bytes: &[u8]) -> Box<dyn Scalar> {
        Box::new(ToyScalar(bytes.first().copied().unwrap_or(0)))
    }
}
