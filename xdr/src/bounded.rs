//! Length-prefixed collections with a declared maximum.
//!
//! The bound is part of the type, so every value in existence already
//! satisfies `len <= MAX` and encoding never has to re-check it.

use {
    crate::{XdrCodec, XdrError, XdrReader, XdrWriter},
    core::{fmt, ops::Deref},
};

fn check_len(len: usize, max: u32) -> Result<(), XdrError> {
    if len as u64 > u64::from(max) {
        return Err(XdrError::CardinalityExceeded { len, max });
    }
    Ok(())
}

/// Variable-length array `T<MAX>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedVec<T, const MAX: u32 = { u32::MAX }>(Vec<T>);

impl<T, const MAX: u32> BoundedVec<T, MAX> {
    pub const MAX_LEN: u32 = MAX;

    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a list from `items`, failing if there are more than `MAX`.
    pub fn of(items: Vec<T>) -> Result<Self, XdrError> {
        check_len(items.len(), MAX)?;
        Ok(Self(items))
    }

    /// Appends `item`; the list is left unchanged when it is full.
    pub fn push(&mut self, item: T) -> Result<(), XdrError> {
        check_len(self.0.len() + 1, MAX)?;
        self.0.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Clone, const MAX: u32> BoundedVec<T, MAX> {
    /// Returns a copy of the list with `item` appended.
    pub fn with(&self, item: T) -> Result<Self, XdrError> {
        let mut next = self.clone();
        next.push(item)?;
        Ok(next)
    }
}

impl<T, const MAX: u32> Default for BoundedVec<T, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const MAX: u32> Deref for BoundedVec<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const MAX: u32> TryFrom<Vec<T>> for BoundedVec<T, MAX> {
    type Error = XdrError;

    fn try_from(items: Vec<T>) -> Result<Self, XdrError> {
        Self::of(items)
    }
}

impl<T, const MAX: u32> From<BoundedVec<T, MAX>> for Vec<T> {
    fn from(list: BoundedVec<T, MAX>) -> Self {
        list.0
    }
}

impl<T, const MAX: u32> IntoIterator for BoundedVec<T, MAX> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const MAX: u32> IntoIterator for &'a BoundedVec<T, MAX> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: XdrCodec, const MAX: u32> XdrCodec for BoundedVec<T, MAX> {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let len = reader.read_len(MAX)? as usize;
        // Each element takes at least 4 bytes.
        let mut items = Vec::with_capacity(len.min(reader.remaining() / 4));
        for _ in 0..len {
            items.push(T::read_xdr(reader)?);
        }
        Ok(Self(items))
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_len(self.0.len(), MAX)?;
        self.0.iter().try_for_each(|item| item.write_xdr(writer))
    }
}

/// Variable-length opaque data `opaque<MAX>`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundedBytes<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> BoundedBytes<MAX> {
    pub const MAX_LEN: u32 = MAX;

    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn of(bytes: Vec<u8>) -> Result<Self, XdrError> {
        check_len(bytes.len(), MAX)?;
        Ok(Self(bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl<const MAX: u32> fmt::Debug for BoundedBytes<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedBytes(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl<const MAX: u32> Deref for BoundedBytes<MAX> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> AsRef<[u8]> for BoundedBytes<MAX> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for BoundedBytes<MAX> {
    type Error = XdrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, XdrError> {
        Self::of(bytes)
    }
}

impl<const MAX: u32> TryFrom<&[u8]> for BoundedBytes<MAX> {
    type Error = XdrError;

    fn try_from(bytes: &[u8]) -> Result<Self, XdrError> {
        Self::of(bytes.to_vec())
    }
}

impl<const MAX: u32> XdrCodec for BoundedBytes<MAX> {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_var_opaque(MAX).map(Self)
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_var_opaque(&self.0, MAX)
    }
}

/// XDR `string<MAX>`.
///
/// The wire form is plain bytes; nothing forces them to be UTF-8, so the
/// text view is fallible.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundedString<const MAX: u32 = { u32::MAX }>(BoundedBytes<MAX>);

impl<const MAX: u32> BoundedString<MAX> {
    pub const fn new() -> Self {
        Self(BoundedBytes::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.0.as_slice()).ok()
    }
}

impl<const MAX: u32> fmt::Debug for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const MAX: u32> fmt::Display for BoundedString<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<const MAX: u32> TryFrom<&str> for BoundedString<MAX> {
    type Error = XdrError;

    fn try_from(text: &str) -> Result<Self, XdrError> {
        BoundedBytes::of(text.as_bytes().to_vec()).map(Self)
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for BoundedString<MAX> {
    type Error = XdrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, XdrError> {
        BoundedBytes::of(bytes).map(Self)
    }
}

impl<const MAX: u32> XdrCodec for BoundedString<MAX> {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        BoundedBytes::read_xdr(reader).map(Self)
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        self.0.write_xdr(writer)
    }
}
