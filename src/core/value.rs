use std::fmt;

/// A single feature payload as returned by the online serving API.
///
/// The wire response carries one of these per header entry. `Absent` models
/// the "no value stored for this feature at this entity" case: the decoder
/// skips it instead of zeroing the destination field.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Absent,
    Boolean(bool),
    BooleanArray(Vec<bool>),
    Integer(i64),
    IntegerArray(Vec<i64>),
    Float(f64),
    FloatArray(Vec<f64>),
    Text(String),
    TextArray(Vec<String>),
    Bytes(Vec<u8>),
}

impl FeatureValue {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Absent => FeatureKind::Absent,
            Self::Boolean(_) => FeatureKind::Boolean,
            Self::BooleanArray(_) => FeatureKind::BooleanArray,
            Self::Integer(_) => FeatureKind::Integer,
            Self::IntegerArray(_) => FeatureKind::IntegerArray,
            Self::Float(_) => FeatureKind::Float,
            Self::FloatArray(_) => FeatureKind::FloatArray,
            Self::Text(_) => FeatureKind::Text,
            Self::TextArray(_) => FeatureKind::TextArray,
            Self::Bytes(_) => FeatureKind::Bytes,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for FeatureValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for FeatureValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<bool>> for FeatureValue {
    fn from(v: Vec<bool>) -> Self {
        Self::BooleanArray(v)
    }
}

impl From<Vec<i64>> for FeatureValue {
    fn from(v: Vec<i64>) -> Self {
        Self::IntegerArray(v)
    }
}

impl From<Vec<f64>> for FeatureValue {
    fn from(v: Vec<f64>) -> Self {
        Self::FloatArray(v)
    }
}

impl From<Vec<String>> for FeatureValue {
    fn from(v: Vec<String>) -> Self {
        Self::TextArray(v)
    }
}

impl From<Vec<u8>> for FeatureValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

/// Dynamic kind of a [`FeatureValue`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Absent,
    Boolean,
    BooleanArray,
    Integer,
    IntegerArray,
    Float,
    FloatArray,
    Text,
    TextArray,
    Bytes,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Boolean => "boolean",
            Self::BooleanArray => "boolean array",
            Self::Integer => "integer",
            Self::IntegerArray => "integer array",
            Self::Float => "float",
            Self::FloatArray => "float array",
            Self::Text => "text",
            Self::TextArray => "text array",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared kind of a destination record field.
///
/// Distinct from [`FeatureKind`]: optional scalars exist only on the
/// destination side, and `Absent` is never a declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Boolean,
    Integer,
    Float,
    Text,
    Bytes,
    OptionalBoolean,
    OptionalInteger,
    OptionalFloat,
    OptionalText,
    BooleanArray,
    IntegerArray,
    FloatArray,
    TextArray,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::OptionalBoolean => "optional boolean",
            Self::OptionalInteger => "optional integer",
            Self::OptionalFloat => "optional float",
            Self::OptionalText => "optional text",
            Self::BooleanArray => "boolean array",
            Self::IntegerArray => "integer array",
            Self::FloatArray => "float array",
            Self::TextArray => "text array",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
