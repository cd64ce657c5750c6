use crate::core::{FeatureValue, FieldKind, Result, VertigoError};

/// A destination field the decoder knows how to write.
///
/// Implemented for the closed set of declared field kinds: plain scalars,
/// `Option`-wrapped scalars, homogeneous arrays, and byte sequences. The
/// derive macro records `KIND` in the catalog entry and routes decoded
/// payloads through `write_value`.
pub trait FeatureField {
    const KIND: FieldKind;

    /// Writes one payload into the field.
    ///
    /// An `Absent` payload leaves the field at its current value. A payload
    /// of any kind other than the declared one fails with
    /// [`VertigoError::FieldTypeMismatch`] without touching the field.
    fn write_value(&mut self, feature: &str, value: &FeatureValue) -> Result<()>;
}

fn mismatch(feature: &str, declared: FieldKind, value: &FeatureValue) -> VertigoError {
    VertigoError::FieldTypeMismatch {
        feature: feature.to_string(),
        declared,
        actual: value.kind(),
    }
}

macro_rules! scalar_field {
    ($ty:ty, $variant:ident, $kind:ident, $optional_kind:ident) => {
        impl FeatureField for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn write_value(&mut self, feature: &str, value: &FeatureValue) -> Result<()> {
                match value {
                    FeatureValue::$variant(v) => {
                        *self = v.clone();
                        Ok(())
                    }
                    FeatureValue::Absent => Ok(()),
                    other => Err(mismatch(feature, Self::KIND, other)),
                }
            }
        }

        impl FeatureField for Option<$ty> {
            const KIND: FieldKind = FieldKind::$optional_kind;

            fn write_value(&mut self, feature: &str, value: &FeatureValue) -> Result<()> {
                match value {
                    FeatureValue::$variant(v) => {
                        *self = Some(v.clone());
                        Ok(())
                    }
                    FeatureValue::Absent => Ok(()),
                    other => Err(mismatch(feature, Self::KIND, other)),
                }
            }
        }
    };
}

macro_rules! array_field {
    ($ty:ty, $variant:ident, $kind:ident) => {
        impl FeatureField for Vec<$ty> {
            const KIND: FieldKind = FieldKind::$kind;

            fn write_value(&mut self, feature: &str, value: &FeatureValue) -> Result<()> {
                match value {
                    // Replaces the contents wholesale; source order and
                    // length are preserved.
                    FeatureValue::$variant(v) => {
                        *self = v.clone();
                        Ok(())
                    }
                    FeatureValue::Absent => Ok(()),
                    other => Err(mismatch(feature, Self::KIND, other)),
                }
            }
        }
    };
}

scalar_field!(bool, Boolean, Boolean, OptionalBoolean);
scalar_field!(i64, Integer, Integer, OptionalInteger);
scalar_field!(f64, Float, Float, OptionalFloat);
scalar_field!(String, Text, Text, OptionalText);

array_field!(bool, BooleanArray, BooleanArray);
array_field!(i64, IntegerArray, IntegerArray);
array_field!(f64, FloatArray, FloatArray);
array_field!(String, TextArray, TextArray);

impl FeatureField for Vec<u8> {
    const KIND: FieldKind = FieldKind::Bytes;

    fn write_value(&mut self, feature: &str, value: &FeatureValue) -> Result<()> {
        match value {
            FeatureValue::Bytes(v) => {
                *self = v.clone();
                Ok(())
            }
            FeatureValue::Absent => Ok(()),
            other => Err(mismatch(feature, Self::KIND, other)),
        }
    }
}
