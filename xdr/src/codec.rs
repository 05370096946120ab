use {
    crate::{Limits, XdrError, XdrReader, XdrWriter},
    base64::{engine::general_purpose::STANDARD, Engine as _},
    core::fmt::Debug,
};

/// A value with a canonical XDR encoding.
///
/// Implementors only provide [`read_xdr`](Self::read_xdr) and
/// [`write_xdr`](Self::write_xdr); the byte and base64 helpers are derived
/// from them. Top-level decoding requires the whole input to be consumed.
pub trait XdrCodec: Sized {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError>;

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError>;

    fn to_xdr(&self) -> Result<Vec<u8>, XdrError> {
        self.to_xdr_with_limits(Limits::default())
    }

    fn to_xdr_with_limits(&self, limits: Limits) -> Result<Vec<u8>, XdrError> {
        let mut writer = XdrWriter::with_limits(limits);
        self.write_xdr(&mut writer)?;
        Ok(writer.into_bytes())
    }

    fn from_xdr(bytes: &[u8]) -> Result<Self, XdrError> {
        Self::from_xdr_with_limits(bytes, Limits::default())
    }

    fn from_xdr_with_limits(bytes: &[u8], limits: Limits) -> Result<Self, XdrError> {
        let mut reader = XdrReader::with_limits(bytes, limits);
        let value = Self::read_xdr(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }

    fn to_xdr_base64(&self) -> Result<String, XdrError> {
        self.to_xdr().map(|bytes| STANDARD.encode(bytes))
    }

    fn from_xdr_base64(text: &str) -> Result<Self, XdrError> {
        let bytes = STANDARD
            .decode(text)
            .map_err(|_| XdrError::InvalidBase64)?;
        Self::from_xdr(&bytes)
    }
}

/// Types usable as a union discriminator: declared enumerations and raw
/// 32-bit integers.
pub trait XdrDiscriminant: XdrCodec + Copy + PartialEq + Debug + 'static {
    fn to_code(self) -> i64;
}

impl XdrCodec for u32 {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_u32()
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_u32(*self)
    }
}

impl XdrCodec for i32 {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_i32()
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_i32(*self)
    }
}

impl XdrCodec for u64 {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_u64()
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_u64(*self)
    }
}

impl XdrCodec for i64 {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_i64()
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_i64(*self)
    }
}

impl XdrCodec for bool {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_bool()
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_bool(*self)
    }
}

impl XdrDiscriminant for i32 {
    fn to_code(self) -> i64 {
        i64::from(self)
    }
}

impl XdrDiscriminant for u32 {
    fn to_code(self) -> i64 {
        i64::from(self)
    }
}

// Optional values are a presence flag followed by the value.
impl<T: XdrCodec> XdrCodec for Option<T> {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        if reader.read_bool()? {
            T::read_xdr(reader).map(Some)
        } else {
            Ok(None)
        }
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        match self {
            Some(value) => {
                writer.write_bool(true)?;
                value.write_xdr(writer)
            }
            None => writer.write_bool(false),
        }
    }
}

impl<T: XdrCodec> XdrCodec for Box<T> {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        T::read_xdr(reader).map(Box::new)
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        self.as_ref().write_xdr(writer)
    }
}

// Fixed opaque data.
impl<const N: usize> XdrCodec for [u8; N] {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        reader.read_fixed_opaque::<N>()
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        writer.write_fixed_opaque(self)
    }
}

// Fixed-length arrays of encodable values carry no length prefix.
impl<T: XdrCodec, const N: usize> XdrCodec for [T; N] {
    fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let items = (0..N)
            .map(|_| T::read_xdr(reader))
            .collect::<Result<Vec<_>, _>>()?;
        crate::try_into_fixed(items)
    }

    fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
        self.iter().try_for_each(|item| item.write_xdr(writer))
    }
}
