//! Big-endian, 4-byte aligned primitive reads and writes.

use crate::{Limits, XdrError};

/// Number of zero bytes that follow `len` bytes of opaque data.
pub const fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Cursor over an encoded buffer.
#[derive(Debug)]
pub struct XdrReader<'a> {
    bytes: &'a [u8],
    position: usize,
    depth_remaining: u32,
    len_remaining: usize,
}

impl<'a> XdrReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_limits(bytes, Limits::default())
    }

    pub fn with_limits(bytes: &'a [u8], limits: Limits) -> Self {
        Self {
            bytes,
            position: 0,
            depth_remaining: limits.depth,
            len_remaining: limits.len,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], XdrError> {
        if needed > self.len_remaining {
            return Err(XdrError::LengthLimitExceeded);
        }
        let remaining = self.remaining();
        if needed > remaining {
            return Err(XdrError::Truncated { needed, remaining });
        }
        let start = self.position;
        self.position += needed;
        self.len_remaining -= needed;
        Ok(&self.bytes[start..self.position])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], XdrError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn skip_padding(&mut self, len: usize) -> Result<(), XdrError> {
        let padding = self.take(padding_len(len))?;
        if padding.iter().any(|byte| *byte != 0) {
            return Err(XdrError::NonZeroPadding);
        }
        Ok(())
    }

    pub fn read_u32(&mut self) -> Result<u32, XdrError> {
        self.take_array().map(u32::from_be_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32, XdrError> {
        self.take_array().map(i32::from_be_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, XdrError> {
        self.take_array().map(u64::from_be_bytes)
    }

    pub fn read_i64(&mut self) -> Result<i64, XdrError> {
        self.take_array().map(i64::from_be_bytes)
    }

    pub fn read_bool(&mut self) -> Result<bool, XdrError> {
        match self.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(XdrError::InvalidBool(other)),
        }
    }

    /// Reads `N` bytes of fixed opaque data followed by its padding.
    pub fn read_fixed_opaque<const N: usize>(&mut self) -> Result<[u8; N], XdrError> {
        let out = self.take_array::<N>()?;
        self.skip_padding(N)?;
        Ok(out)
    }

    /// Reads a length prefix for a variable-length value, rejecting lengths
    /// above `max`.
    pub fn read_len(&mut self, max: u32) -> Result<u32, XdrError> {
        let len = self.read_u32()?;
        if len > max {
            return Err(XdrError::LengthExceedsMax { len, max });
        }
        Ok(len)
    }

    /// Reads variable opaque data of at most `max` bytes.
    pub fn read_var_opaque(&mut self, max: u32) -> Result<Vec<u8>, XdrError> {
        let len = self.read_len(max)? as usize;
        let bytes = self.take(len)?.to_vec();
        self.skip_padding(len)?;
        Ok(bytes)
    }

    /// Runs `f` one nesting level deeper.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, XdrError>,
    ) -> Result<T, XdrError> {
        self.depth_remaining = self
            .depth_remaining
            .checked_sub(1)
            .ok_or(XdrError::DepthLimitExceeded)?;
        let result = f(self);
        self.depth_remaining += 1;
        result
    }

    /// Fails if any input is left unread.
    pub fn finish(self) -> Result<(), XdrError> {
        match self.remaining() {
            0 => Ok(()),
            left => Err(XdrError::TrailingData(left)),
        }
    }
}

/// Growable output buffer.
#[derive(Debug)]
pub struct XdrWriter {
    bytes: Vec<u8>,
    depth_remaining: u32,
    len_remaining: usize,
}

impl Default for XdrWriter {
    fn default() -> Self {
        Self::with_limits(Limits::default())
    }
}

impl XdrWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            bytes: Vec::new(),
            depth_remaining: limits.depth,
            len_remaining: limits.len,
        }
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), XdrError> {
        if bytes.len() > self.len_remaining {
            return Err(XdrError::LengthLimitExceeded);
        }
        self.len_remaining -= bytes.len();
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    fn put_padding(&mut self, len: usize) -> Result<(), XdrError> {
        self.put(&[0u8; 3][..padding_len(len)])
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), XdrError> {
        self.put(&value.to_be_bytes())
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), XdrError> {
        self.put(&value.to_be_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> Result<(), XdrError> {
        self.put(&value.to_be_bytes())
    }

    pub fn write_i64(&mut self, value: i64) -> Result<(), XdrError> {
        self.put(&value.to_be_bytes())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), XdrError> {
        self.write_u32(u32::from(value))
    }

    pub fn write_fixed_opaque(&mut self, bytes: &[u8]) -> Result<(), XdrError> {
        self.put(bytes)?;
        self.put_padding(bytes.len())
    }

    /// Writes a length prefix, rejecting lengths above `max`.
    pub fn write_len(&mut self, len: usize, max: u32) -> Result<(), XdrError> {
        match u32::try_from(len) {
            Ok(len) if len <= max => self.write_u32(len),
            _ => Err(XdrError::CardinalityExceeded { len, max }),
        }
    }

    pub fn write_var_opaque(&mut self, bytes: &[u8], max: u32) -> Result<(), XdrError> {
        self.write_len(bytes.len(), max)?;
        self.write_fixed_opaque(bytes)
    }

    /// Runs `f` one nesting level deeper.
    pub fn nested(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), XdrError>,
    ) -> Result<(), XdrError> {
        self.depth_remaining = self
            .depth_remaining
            .checked_sub(1)
            .ok_or(XdrError::DepthLimitExceeded)?;
        let result = f(self);
        self.depth_remaining += 1;
        result
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
