/*!
Traits for marshaling values and encoding them as streams.

Every marshaled object has a fixed size, so a stream of objects is just
their encodings back to back with no framing.
*/

use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder};
use bytes::{BufMut, Bytes, BytesMut};

use crate::core::error::{EncodingError, Result};

/// A value with a fixed-size binary encoding
pub trait Marshaling {
    /// Length of the binary encoding in bytes
    fn marshal_size(&self) -> usize;

    /// Encode the value
    fn marshal_binary(&self) -> Vec<u8>;

    /// Replace the value with the one decoded from `data`
    fn unmarshal_binary(&mut self, data: &[u8]) -> std::result::Result<(), EncodingError>;
}

/// Encoding capability of a suite
///
/// The provided methods implement the plain binary encoding; suites with a
/// different wire format override them.
pub trait Encoding {
    /// Write the encodings of `objs` to `w` in order
    fn write(&self, w: &mut dyn Write, objs: &[&dyn Marshaling]) -> Result<()> {
        for obj in objs {
            w.write_all(&obj.marshal_binary())?;
        }
        Ok(())
    }

    /// Read one encoding per object from `r`, decoding into `objs` in order
    fn read(&self, r: &mut dyn Read, objs: &mut [&mut dyn Marshaling]) -> Result<()> {
        for obj in objs.iter_mut() {
            let mut buf = vec![0u8; obj.marshal_size()];
            r.read_exact(&mut buf)?;
            obj.unmarshal_binary(&buf)?;
        }
        Ok(())
    }

    /// Encode `objs` into a single buffer
    fn encode(&self, objs: &[&dyn Marshaling]) -> Bytes {
        let capacity = objs.iter().map(|obj| obj.marshal_size()).sum();
        let mut buf = BytesMut::with_capacity(capacity);
        for obj in objs {
            buf.put_slice(&obj.marshal_binary());
        }
        buf.freeze()
    }
}

fn check_length(expected: usize, data: &[u8]) -> std::result::Result<(), EncodingError> {
    if data.len() != expected {
        return Err(EncodingError::InvalidLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

impl Marshaling for u32 {
    fn marshal_size(&self) -> usize {
        4
    }

    fn marshal_binary(&self) -> Vec<u8> {
        let mut buf = vec![0u8; 4];
        BigEndian::write_u32(&mut buf, *self);
        buf
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> std::result::Result<(), EncodingError> {
        check_length(4, data)?;
        *self = BigEndian::read_u32(data);
        Ok(())
    }
}

impl Marshaling for u64 {
    fn marshal_size(&self) -> usize {
        8
    }

    fn marshal_binary(&self) -> Vec<u8> {
        let mut buf = vec![0u8; 8];
        BigEndian::write_u64(&mut buf, *self);
        buf
    }

    fn unmarshal_binary(&mut self, data: &[u8]) -> std::result::Result<(), EncodingError> {
        check_length(8, data)?;
        *self = BigEndian::read_u64(data);
        Ok(())
    }
}
