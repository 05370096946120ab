/// Declares a closed XDR enumeration.
///
/// Each variant carries its explicit wire code. Decoding any code not listed
/// fails with [`XdrError::UnknownDiscriminant`](crate::XdrError).
///
/// ```
/// stellar_xdr_codec::xdr_enum! {
///     pub enum Color {
///         Red = 0,
///         Green = 1,
///         Blue = 5,
///     }
/// }
///
/// assert_eq!(Color::from_code(5).unwrap(), Color::Blue);
/// assert!(Color::from_code(2).is_err());
/// ```
#[macro_export]
macro_rules! xdr_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::fmt::Debug,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::hash::Hash,
            ::core::cmp::PartialOrd,
            ::core::cmp::Ord,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $name {
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// All declared variants in declaration order.
            pub const fn variants() -> &'static [$name] {
                Self::VARIANTS
            }

            pub const fn code(self) -> i32 {
                self as i32
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            pub fn from_code(code: i32) -> Result<Self, $crate::XdrError> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => Err($crate::XdrError::UnknownDiscriminant {
                        type_name: stringify!($name),
                        value: i64::from(code),
                    }),
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                Self::VARIANTS.iter().copied().find(|variant| variant.name() == name)
            }
        }

        impl ::core::convert::TryFrom<i32> for $name {
            type Error = $crate::XdrError;

            fn try_from(code: i32) -> Result<Self, $crate::XdrError> {
                Self::from_code(code)
            }
        }

        impl ::core::convert::From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::XdrCodec for $name {
            fn read_xdr(reader: &mut $crate::XdrReader<'_>) -> Result<Self, $crate::XdrError> {
                Self::from_code(reader.read_i32()?)
            }

            fn write_xdr(&self, writer: &mut $crate::XdrWriter) -> Result<(), $crate::XdrError> {
                writer.write_i32(self.code())
            }
        }

        impl $crate::XdrDiscriminant for $name {
            fn to_code(self) -> i64 {
                i64::from(self.code())
            }
        }
    };
}

/// Declares an XDR struct: fields are encoded back to back in declaration
/// order.
///
/// Fields marked `= Default` may be left unset in the builder and take the
/// type's default value. The optional `with builder Name` clause generates a
/// builder whose `build` reports the first unset required field.
///
/// ```
/// use stellar_xdr_codec::{xdr_struct, XdrCodec, XdrError};
///
/// xdr_struct! {
///     pub struct Point with builder PointBuilder {
///         pub x: i32,
///         pub y: i32,
///         pub tag: u32 = Default,
///     }
/// }
///
/// let point = Point::builder().x(1).y(2).build().unwrap();
/// assert_eq!(point.tag, 0);
/// assert_eq!(point.to_xdr().unwrap().len(), 12);
/// assert_eq!(Point::builder().x(1).build(), Err(XdrError::MissingField("y")));
/// ```
#[macro_export]
macro_rules! xdr_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident with builder $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= $default:ident)?
            ),* $(,)?
        }
    ) => {
        $crate::xdr_struct! {
            $(#[$meta])*
            $vis struct $name {
                $(
                    $(#[$fmeta])*
                    $fvis $field : $ty $(= $default)?
                ),*
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(::core::clone::Clone, ::core::fmt::Debug, ::core::default::Default)]
        $vis struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[must_use]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*

            pub fn build(self) -> Result<$name, $crate::XdrError> {
                Ok($name {
                    $($field: $crate::__xdr_take!(self.$field, stringify!($field) $(, $default)?),)*
                })
            }
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(= $default:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::core::clone::Clone,
            ::core::fmt::Debug,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::hash::Hash,
        )]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $name {
            /// Field layout in wire order.
            pub const FIELDS: &'static [$crate::FieldDescriptor] = &[
                $($crate::FieldDescriptor {
                    name: stringify!($field),
                    type_name: stringify!($ty),
                    presence: $crate::__xdr_presence!($($default)?),
                },)*
            ];
        }

        impl $crate::XdrCodec for $name {
            fn read_xdr(reader: &mut $crate::XdrReader<'_>) -> Result<Self, $crate::XdrError> {
                reader.nested(|reader| {
                    Ok(Self {
                        $($field: <$ty as $crate::XdrCodec>::read_xdr(reader)?,)*
                    })
                })
            }

            fn write_xdr(&self, writer: &mut $crate::XdrWriter) -> Result<(), $crate::XdrError> {
                writer.nested(|writer| {
                    $($crate::XdrCodec::write_xdr(&self.$field, writer)?;)*
                    Ok(())
                })
            }
        }
    };
}

/// Declares a discriminated union over an enumeration or a raw integer.
///
/// Arms are written `Variant(Payload) = discriminant` or `Variant =
/// discriminant` for void arms. Discriminants need not be contiguous.
///
/// ```
/// use stellar_xdr_codec::{xdr_union, XdrCodec, XdrError};
///
/// xdr_union! {
///     pub enum Ext switch (i32) {
///         V0 = 0,
///         V2(u64) = 2,
///     }
/// }
///
/// assert_eq!(Ext::V2(7).discriminant(), 2);
/// assert_eq!(Ext::wrap(2, 7u64).unwrap(), Ext::V2(7));
/// assert!(matches!(Ext::wrap(2, 7u32), Err(XdrError::ArmTypeMismatch { .. })));
/// assert!(Ext::from_xdr(&[0, 0, 0, 1]).is_err());
/// ```
#[macro_export]
macro_rules! xdr_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident switch ($disc_ty:ty) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(($payload:ty))? = $disc:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::core::clone::Clone,
            ::core::fmt::Debug,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::hash::Hash,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(($payload))?,
            )+
        }

        impl $name {
            /// Declared discriminants in declaration order.
            pub const ARMS: &'static [$disc_ty] = &[$($disc),+];

            pub fn arms() -> &'static [$disc_ty] {
                Self::ARMS
            }

            pub fn discriminant(&self) -> $disc_ty {
                match self {
                    $(Self::$variant { .. } => $disc,)+
                }
            }

            /// Name of the active arm.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant),)+
                }
            }

            /// The payload of the active arm, if it has one of type `T`.
            pub fn payload<T: 'static>(&self) -> Option<&T> {
                match self {
                    $(Self::$variant { .. } => {
                        $crate::__xdr_union_payload!(self, T, $variant $(, $payload)?)
                    })+
                }
            }

            /// Builds the arm selected by `discriminant` from `value`.
            ///
            /// Void arms take `()`.
            pub fn wrap<T: 'static>(
                discriminant: $disc_ty,
                value: T,
            ) -> Result<Self, $crate::XdrError> {
                #[allow(unused_mut, unused_variables)]
                let mut value = Some(value);
                $(
                    if discriminant == $disc {
                        return $crate::__xdr_union_wrap!(
                            value, T, discriminant, $name, $variant $(, $payload)?
                        );
                    }
                )+
                Err($crate::XdrError::UnknownDiscriminant {
                    type_name: stringify!($name),
                    value: $crate::XdrDiscriminant::to_code(discriminant),
                })
            }
        }

        impl $crate::XdrCodec for $name {
            fn read_xdr(reader: &mut $crate::XdrReader<'_>) -> Result<Self, $crate::XdrError> {
                reader.nested(|reader| {
                    let discriminant = <$disc_ty as $crate::XdrCodec>::read_xdr(reader)?;
                    $(
                        if discriminant == $disc {
                            return Ok($crate::__xdr_union_read!(
                                reader, $name, $variant $(, $payload)?
                            ));
                        }
                    )+
                    Err($crate::XdrError::UnknownDiscriminant {
                        type_name: stringify!($name),
                        value: $crate::XdrDiscriminant::to_code(discriminant),
                    })
                })
            }

            fn write_xdr(&self, writer: &mut $crate::XdrWriter) -> Result<(), $crate::XdrError> {
                writer.nested(|writer| {
                    $crate::XdrCodec::write_xdr(&self.discriminant(), writer)?;
                    match self {
                        $(Self::$variant { .. } => {
                            $crate::__xdr_union_write!(self, writer, $variant $(, $payload)?)
                        })+
                    }
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_presence {
    () => {
        $crate::Presence::Required
    };
    (Default) => {
        $crate::Presence::Defaulted
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_take {
    ($value:expr, $name:expr) => {
        $value.ok_or($crate::XdrError::MissingField($name))?
    };
    ($value:expr, $name:expr, Default) => {
        $value.unwrap_or_default()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_union_payload {
    ($self:ident, $t:ident, $variant:ident) => {
        None
    };
    ($self:ident, $t:ident, $variant:ident, $payload:ty) => {
        match $self {
            Self::$variant(value) => (value as &dyn ::core::any::Any).downcast_ref::<$t>(),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_union_wrap {
    ($value:ident, $t:ident, $disc:ident, $name:ident, $variant:ident) => {
        if ::core::any::TypeId::of::<$t>() == ::core::any::TypeId::of::<()>() {
            Ok($name::$variant)
        } else {
            Err($crate::XdrError::ArmTypeMismatch {
                type_name: stringify!($name),
                arm: $crate::XdrDiscriminant::to_code($disc),
            })
        }
    };
    ($value:ident, $t:ident, $disc:ident, $name:ident, $variant:ident, $payload:ty) => {
        match (&mut $value as &mut dyn ::core::any::Any)
            .downcast_mut::<Option<$payload>>()
            .and_then(Option::take)
        {
            Some(payload) => Ok($name::$variant(payload)),
            None => Err($crate::XdrError::ArmTypeMismatch {
                type_name: stringify!($name),
                arm: $crate::XdrDiscriminant::to_code($disc),
            }),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_union_read {
    ($reader:ident, $name:ident, $variant:ident) => {
        $name::$variant
    };
    ($reader:ident, $name:ident, $variant:ident, $payload:ty) => {
        $name::$variant(<$payload as $crate::XdrCodec>::read_xdr($reader)?)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __xdr_union_write {
    ($self:ident, $writer:ident, $variant:ident) => {
        Ok(())
    };
    ($self:ident, $writer:ident, $variant:ident, $payload:ty) => {
        match $self {
            Self::$variant(value) => $crate::XdrCodec::write_xdr(value, $writer),
            #[allow(unreachable_patterns)]
            _ => Ok(()),
        }
    };
}

#[cfg(test)]
mod tests {
    use {
        crate::{BoundedVec, Limits, Presence, XdrCodec, XdrError},
        assert_matches::assert_matches,
        test_case::test_case,
    };

    crate::xdr_enum! {
        /// Shapes used by the tests.
        pub enum Shape {
            Circle = 0,
            Square = 1,
            Hexagon = 6,
        }
    }

    crate::xdr_struct! {
        pub struct Tagged with builder TaggedBuilder {
            pub label: u32,
            pub weight: i64,
            pub ext: Ext = Default,
        }
    }

    crate::xdr_union! {
        pub enum Ext switch (i32) {
            V0 = 0,
            V2(Tagged2) = 2,
        }
    }

    impl Default for Ext {
        fn default() -> Self {
            Self::V0
        }
    }

    crate::xdr_struct! {
        pub struct Tagged2 {
            pub note: u32,
        }
    }

    crate::xdr_union! {
        pub enum Figure switch (Shape) {
            Circle(u32) = Shape::Circle,
            Square(i64) = Shape::Square,
            Hexagon = Shape::Hexagon,
        }
    }

    crate::xdr_union! {
        pub enum Chain switch (u32) {
            End = 0,
            Link(Box<Chain>) = 1,
        }
    }

    mod schema_with_hash_type {
        mod digest {
            use crate::{XdrCodec, XdrError, XdrReader, XdrWriter};

            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct Hash(pub [u8; 4]);

            impl XdrCodec for Hash {
                fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self, XdrError> {
                    reader.read_fixed_opaque::<4>().map(Self)
                }

                fn write_xdr(&self, writer: &mut XdrWriter) -> Result<(), XdrError> {
                    writer.write_fixed_opaque(&self.0)
                }
            }
        }

        pub use self::digest::*;

        crate::xdr_enum! {
            pub enum Kind {
                Hash = 0,
                Height = 1,
            }
        }

        crate::xdr_struct! {
            pub struct Anchor with builder AnchorBuilder {
                pub hash: Hash,
                pub height: u32 = Default,
            }
        }

        crate::xdr_union! {
            pub enum Pointer switch (Kind) {
                Hash(Hash) = Kind::Hash,
                Height(u32) = Kind::Height,
            }
        }
    }

    #[test]
    fn test_macros_beside_local_hash_type() {
        use {
            schema_with_hash_type::{Anchor, Hash, Kind, Pointer},
            std::collections::HashSet,
        };

        let anchor = Anchor::builder().hash(Hash([1, 2, 3, 4])).build().unwrap();
        let bytes = anchor.to_xdr().unwrap();
        assert_eq!(bytes, [1, 2, 3, 4, 0, 0, 0, 0]);
        assert_eq!(Anchor::from_xdr(&bytes).unwrap(), anchor);

        let pointer = Pointer::Hash(Hash([9; 4]));
        assert_eq!(Pointer::from_xdr(&pointer.to_xdr().unwrap()).unwrap(), pointer);
        assert_eq!(pointer.discriminant(), Kind::Hash);

        let kinds: HashSet<Kind> = Kind::variants().iter().copied().collect();
        assert_eq!(kinds.len(), 2);
    }

    #[test_case(0, Shape::Circle)]
    #[test_case(1, Shape::Square)]
    #[test_case(6, Shape::Hexagon)]
    fn test_enum_codes(code: i32, shape: Shape) {
        assert_eq!(Shape::from_code(code).unwrap(), shape);
        assert_eq!(Shape::try_from(code).unwrap(), shape);
        assert_eq!(i32::from(shape), code);
        assert_eq!(Shape::from_xdr(&code.to_be_bytes()).unwrap(), shape);
    }

    #[test]
    fn test_enum_closure() {
        let err = Shape::from_code(2).unwrap_err();
        assert_eq!(
            err,
            XdrError::UnknownDiscriminant {
                type_name: "Shape",
                value: 2
            }
        );
        assert!(!err.is_malformed_input());
        assert_eq!(Shape::variants().len(), 3);
        assert_eq!(Shape::Hexagon.to_string(), "Hexagon");
        assert_eq!(Shape::from_name("Square"), Some(Shape::Square));
    }

    #[test]
    fn test_struct_builder() {
        let value = Tagged::builder().label(3).weight(-1).build().unwrap();
        assert_eq!(value.ext, Ext::V0);
        assert_eq!(
            value.to_xdr().unwrap(),
            [0, 0, 0, 3, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0]
        );
        assert_eq!(
            Tagged::builder().weight(1).build(),
            Err(XdrError::MissingField("label"))
        );
    }

    #[test]
    fn test_struct_descriptor() {
        let fields: Vec<_> = Tagged::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(fields, ["label", "weight", "ext"]);
        assert_eq!(Tagged::FIELDS[1].type_name, "i64");
        assert_eq!(Tagged::FIELDS[2].presence, Presence::Defaulted);
        assert!(Tagged::FIELDS[0].is_required());
    }

    #[test]
    fn test_non_contiguous_arms() {
        let v2 = Ext::V2(Tagged2 { note: 9 });
        let bytes = v2.to_xdr().unwrap();
        assert_eq!(bytes, [0, 0, 0, 2, 0, 0, 0, 9]);
        assert_eq!(Ext::from_xdr(&bytes).unwrap(), v2);
        assert_eq!(
            Ext::from_xdr(&[0, 0, 0, 1]),
            Err(XdrError::UnknownDiscriminant {
                type_name: "Ext",
                value: 1
            })
        );
        assert_eq!(Ext::arms(), &[0, 2]);
    }

    #[test]
    fn test_union_wrap() {
        assert_eq!(Figure::wrap(Shape::Circle, 4u32).unwrap(), Figure::Circle(4));
        assert_eq!(Figure::wrap(Shape::Hexagon, ()).unwrap(), Figure::Hexagon);
        assert_eq!(
            Figure::wrap(Shape::Square, 4u32),
            Err(XdrError::ArmTypeMismatch {
                type_name: "Figure",
                arm: 1
            })
        );
        assert_matches!(
            Figure::wrap(Shape::Hexagon, 1u8),
            Err(XdrError::ArmTypeMismatch { arm: 6, .. })
        );
        assert_matches!(
            Ext::wrap(5, ()),
            Err(XdrError::UnknownDiscriminant { value: 5, .. })
        );
    }

    #[test]
    fn test_union_payload_and_discriminant() {
        let figure = Figure::Square(-3);
        assert_eq!(figure.discriminant(), Shape::Square);
        assert_eq!(figure.name(), "Square");
        assert_eq!(figure.payload::<i64>(), Some(&-3));
        assert_eq!(figure.payload::<u32>(), None);
        assert_eq!(Figure::Hexagon.payload::<()>(), None);
        assert_eq!(
            Figure::from_xdr(&[0, 0, 0, 6]).unwrap(),
            Figure::Hexagon
        );
    }

    #[test]
    fn test_union_over_enum_rejects_undeclared_arm() {
        crate::xdr_union! {
            enum CirclesOnly switch (Shape) {
                Circle(u32) = Shape::Circle,
            }
        }
        assert_eq!(
            CirclesOnly::from_xdr(&[0, 0, 0, 1, 0, 0, 0, 0]),
            Err(XdrError::UnknownDiscriminant {
                type_name: "CirclesOnly",
                value: 1
            })
        );
    }

    #[test]
    fn test_depth_limit_on_recursive_union() {
        let mut chain = Chain::End;
        for _ in 0..10 {
            chain = Chain::Link(Box::new(chain));
        }
        let bytes = chain.to_xdr().unwrap();
        assert_eq!(Chain::from_xdr(&bytes).unwrap(), chain);
        assert_eq!(
            Chain::from_xdr_with_limits(&bytes, Limits::default().with_depth(5)),
            Err(XdrError::DepthLimitExceeded)
        );
    }

    #[test]
    fn test_bounded_field_in_struct() {
        crate::xdr_struct! {
            struct Batch {
                items: BoundedVec<Shape, 2>,
            }
        }
        let batch = Batch {
            items: BoundedVec::of(vec![Shape::Circle, Shape::Hexagon]).unwrap(),
        };
        let bytes = batch.to_xdr().unwrap();
        assert_eq!(bytes, [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 6]);
        assert_eq!(Batch::from_xdr(&bytes).unwrap(), batch);
    }
}
