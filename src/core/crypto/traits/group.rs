/*!
Traits for prime-order group arithmetic.

Elements are handled as boxed trait objects so a suite can be stored
behind `dyn Suite`. Operations return fresh elements instead of mutating
the receiver; binary operations fail with `GroupError::ForeignElement`
when the operands come from different group implementations.
*/

use std::any::Any;
use std::fmt;

use rand::RngCore;

use crate::core::crypto::traits::encoding::Marshaling;
use crate::core::error::{EncodingError, GroupError};

/// Result of a group operation
pub type GroupResult<T> = std::result::Result<T, GroupError>;

/// Scalar modulo the order of a group
pub trait Scalar: Marshaling + fmt::Debug + fmt::Display + Send + Sync {
    /// Access the concrete type, for downcasting operands
    fn as_any(&self) -> &dyn Any;

    /// Clone into a new box
    fn clone_box(&self) -> Box<dyn Scalar>;

    /// Equality; elements of other groups are never equal
    fn equal(&self, other: &dyn Scalar) -> bool;

    /// Scalar with the given small integer value
    fn set_int64(&self, value: i64) -> Box<dyn Scalar>;

    /// Additive identity
    fn zero(&self) -> Box<dyn Scalar>;

    /// Multiplicative identity
    fn one(&self) -> Box<dyn Scalar>;

    /// `self + other`
    fn add(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>>;

    /// `self - other`
    fn sub(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>>;

    /// `-self`
    fn neg(&self) -> Box<dyn Scalar>;

    /// `self * other`
    fn mul(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>>;

    /// `self / other`
    fn div(&self, other: &dyn Scalar) -> GroupResult<Box<dyn Scalar>>;

    /// Multiplicative inverse
    fn inv(&self) -> GroupResult<Box<dyn Scalar>>;

    /// Uniformly random scalar drawn from `rng`
    fn pick(&self, rng: &mut dyn RngCore) -> Box<dyn Scalar>;

    /// Scalar from little-endian bytes of any length, reduced mod the order
    fn set_bytes(&self, bytes: &[u8]) -> Box<dyn Scalar>;
}

/// Element of a prime-order group
pub trait Point: Marshaling + fmt::Debug + fmt::Display + Send + Sync {
    /// Access the concrete type, for downcasting operands
    fn as_any(&self) -> &dyn Any;

    /// Clone into a new box
    fn clone_box(&self) -> Box<dyn Point>;

    /// Equality; elements of other groups are never equal
    fn equal(&self, other: &dyn Point) -> bool;

    /// Identity element
    fn null(&self) -> Box<dyn Point>;

    /// Standard generator
    fn base(&self) -> Box<dyn Point>;

    /// Uniformly random element drawn from `rng`
    fn pick(&self, rng: &mut dyn RngCore) -> Box<dyn Point>;

    /// `self + other`
    fn add(&self, other: &dyn Point) -> GroupResult<Box<dyn Point>>;

    /// `self - other`
    fn sub(&self, other: &dyn Point) -> GroupResult<Box<dyn Point>>;

    /// `-self`
    fn neg(&self) -> Box<dyn Point>;

    /// `scalar * self`
    fn mul(&self, scalar: &dyn Scalar) -> GroupResult<Box<dyn Point>>;
}

/// Group capability of a suite
pub trait Group {
    /// Name of the group
    fn group_name(&self) -> &str;

    /// Marshaled scalar size
    fn scalar_len(&self) -> usize;

    /// New zero scalar
    fn scalar(&self) -> Box<dyn Scalar>;

    /// Marshaled point size
    fn point_len(&self) -> usize;

    /// New identity point
    fn point(&self) -> Box<dyn Point>;
}

impl Clone for Box<dyn Scalar> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl Clone for Box<dyn Point> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// Boxed elements can be passed straight to `Encoding::write`/`read`.

impl Marshaling for Box<dyn Scalar> {
    fn marshal_size(&self) -> usize {
        (**self).marshal_size()
    }

    fn marshal_binary(&self) -> Vec<u8> {
        (**self).marshal_binary()
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> std::result::Result<(), EncodingError> {
        (**self).unmarshal_binary(data)
    }
}

impl Marshaling for Box<dyn Point> {
    fn marshal_size(&self) -> usize {
        (**self).marshal_size()
    }

    fn marshal_binary(&self) -> Vec<u8> {
        (**self).marshal_binary()
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> std::result::Result<(), EncodingError> {
        (**self).unmarshal_binary(data)
    }
}
