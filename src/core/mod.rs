pub mod error;
pub mod value;

pub use error::{Result, TransportError, VertigoError};
pub use value::{FeatureKind, FeatureValue, FieldKind};
