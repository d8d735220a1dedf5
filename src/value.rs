//! Classification of runtime values against the line protocol scalar set.
//!
//! The serializer asks two questions per field or tag value: may this type
//! appear in line protocol at all, and if so does it render as an integer
//! (with the `i` suffix) or with a decimal point. Both answers come from
//! [ValueType]; the suffix rendering itself belongs to the serializer.

use crate::{InfluxError, InfluxResult};

/// The type classes a serializer can meet at runtime.
///
/// The first fourteen variants are the legal line protocol scalars; the
/// rest stand in for everything else (collections, byte blobs, unit-like
/// values) and must be rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    Bool,
    Char,
    Str,
    Bytes,
    Seq,
    Map,
    Unit,
}

impl ValueType {
    /// Every variant, for exhaustive checks.
    pub const ALL: [ValueType; 18] = [
        ValueType::I8,
        ValueType::I16,
        ValueType::I32,
        ValueType::I64,
        ValueType::U8,
        ValueType::U16,
        ValueType::U32,
        ValueType::U64,
        ValueType::F32,
        ValueType::F64,
        ValueType::Decimal,
        ValueType::Bool,
        ValueType::Char,
        ValueType::Str,
        ValueType::Bytes,
        ValueType::Seq,
        ValueType::Map,
        ValueType::Unit,
    ];

    /// True iff this type may appear as a line protocol field or tag value.
    pub fn is_valid(self) -> bool {
        !matches!(
            self,
            ValueType::Bytes | ValueType::Seq | ValueType::Map | ValueType::Unit
        )
    }

    /// True iff this is one of the integer widths, which render with the
    /// `i` suffix.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            ValueType::I8
                | ValueType::I16
                | ValueType::I32
                | ValueType::I64
                | ValueType::U8
                | ValueType::U16
                | ValueType::U32
                | ValueType::U64
        )
    }

    /// True iff this type renders with a decimal point.
    pub fn is_floating_point(self) -> bool {
        matches!(self, ValueType::F32 | ValueType::F64 | ValueType::Decimal)
    }

    /// Identity for valid scalars, [InfluxError::UnsupportedValueType]
    /// otherwise. Serializers call this before rendering so that an illegal
    /// type fails loudly instead of being coerced.
    pub fn validated(self) -> InfluxResult<ValueType> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(InfluxError::UnsupportedValueType(self))
        }
    }
}

/// Maps concrete Rust scalars to their [ValueType]. Must be implemented by
/// any type handed to the serializer as a field value.
pub trait FieldValue {
    fn value_type(&self) -> ValueType;
}

impl FieldValue for i8 {
    fn value_type(&self) -> ValueType {
        ValueType::I8
    }
}

impl FieldValue for i16 {
    fn value_type(&self) -> ValueType {
        ValueType::I16
    }
}

impl FieldValue for i32 {
    fn value_type(&self) -> ValueType {
        ValueType::I32
    }
}

impl FieldValue for i64 {
    fn value_type(&self) -> ValueType {
        ValueType::I64
    }
}

impl FieldValue for u8 {
    fn value_type(&self) -> ValueType {
        ValueType::U8
    }
}

impl FieldValue for u16 {
    fn value_type(&self) -> ValueType {
        ValueType::U16
    }
}

impl FieldValue for u32 {
    fn value_type(&self) -> ValueType {
        ValueType::U32
    }
}

impl FieldValue for u64 {
    fn value_type(&self) -> ValueType {
        ValueType::U64
    }
}

impl FieldValue for f32 {
    fn value_type(&self) -> ValueType {
        ValueType::F32
    }
}

impl FieldValue for f64 {
    fn value_type(&self) -> ValueType {
        ValueType::F64
    }
}

impl FieldValue for bool {
    fn value_type(&self) -> ValueType {
        ValueType::Bool
    }
}

impl FieldValue for char {
    fn value_type(&self) -> ValueType {
        ValueType::Char
    }
}

impl FieldValue for &str {
    fn value_type(&self) -> ValueType {
        ValueType::Str
    }
}

impl FieldValue for String {
    fn value_type(&self) -> ValueType {
        ValueType::Str
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [ValueType; 14] = [
        ValueType::I8,
        ValueType::I16,
        ValueType::I32,
        ValueType::I64,
        ValueType::U8,
        ValueType::U16,
        ValueType::U32,
        ValueType::U64,
        ValueType::F32,
        ValueType::F64,
        ValueType::Decimal,
        ValueType::Bool,
        ValueType::Char,
        ValueType::Str,
    ];

    #[test]
    fn exactly_the_documented_scalars_are_valid() {
        for vt in ValueType::ALL.iter() {
            assert_eq!(vt.is_valid(), VALID.contains(vt), "{:?}", vt);
        }
    }

    #[test]
    fn integral_and_floating_point_partition_the_valid_set() {
        for vt in ValueType::ALL.iter() {
            if vt.is_integral() || vt.is_floating_point() {
                assert!(vt.is_valid(), "{:?}", vt);
            }
            assert!(
                !(vt.is_integral() && vt.is_floating_point()),
                "{:?} classified as both integral and floating point",
                vt
            );
        }
    }

    #[test]
    fn validated_rejects_invalid_types() {
        assert_eq!(ValueType::I64.validated(), Ok(ValueType::I64));
        assert_eq!(
            ValueType::Seq.validated(),
            Err(InfluxError::UnsupportedValueType(ValueType::Seq))
        );
    }

    #[test]
    fn can_classify_rust_scalars() {
        assert_eq!(10i32.value_type(), ValueType::I32);
        assert_eq!(10.3f64.value_type(), ValueType::F64);
        assert_eq!("b".value_type(), ValueType::Str);
        assert_eq!(String::from("b").value_type(), ValueType::Str);
        assert_eq!(true.value_type(), ValueType::Bool);
        assert_eq!('x'.value_type(), ValueType::Char);
        assert!(3u16.value_type().is_integral());
        assert!(3.5f32.value_type().is_floating_point());
    }
}
