/// Newtype over fixed opaque data (`opaque name[LEN]`).
macro_rules! impl_fixed_opaque {
    ($(#[$meta:meta])* TYPE = $type:ident, LEN = $len:expr) => {
        $(#[$meta])*
        #[derive(
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::default::Default,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::hash::Hash,
            ::core::cmp::PartialOrd,
            ::core::cmp::Ord,
        )]
        pub struct $type(pub [u8; $len]);

        impl $type {
            pub const LEN: usize = $len;

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $type {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$type> for [u8; $len] {
            fn from(value: $type) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $type {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $type {
            type Error = stellar_xdr_codec::XdrError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                <[u8; $len]>::try_from(bytes).map(Self).map_err(|_| {
                    stellar_xdr_codec::XdrError::FixedLengthMismatch {
                        expected: $len,
                        actual: bytes.len(),
                    }
                })
            }
        }

        impl core::fmt::Display for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
            }
        }

        impl core::fmt::Debug for $type {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($type), self)
            }
        }

        impl stellar_xdr_codec::XdrCodec for $type {
            fn read_xdr(
                reader: &mut stellar_xdr_codec::XdrReader<'_>,
            ) -> Result<Self, stellar_xdr_codec::XdrError> {
                reader.read_fixed_opaque::<$len>().map(Self)
            }

            fn write_xdr(
                &self,
                writer: &mut stellar_xdr_codec::XdrWriter,
            ) -> Result<(), stellar_xdr_codec::XdrError> {
                writer.write_fixed_opaque(&self.0)
            }
        }
    };
}

/// `impl Default` returning the void arm of an extension union.
macro_rules! impl_ext_default {
    ($($type:ident),+ $(,)?) => {
        $(
            impl Default for $type {
                fn default() -> Self {
                    Self::V0
                }
            }
        )+
    };
}
