use thiserror::Error;

use crate::core::value::{FeatureKind, FieldKind};

/// Error type of the external transport collaborator. Transport failures are
/// propagated unmodified; the client only attaches the entity id as context.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum VertigoError {
    #[error(
        "feature descriptors do not match entity data entries: {header} descriptors, {values} values"
    )]
    ArityMismatch { header: usize, values: usize },

    #[error("feature '{feature}': cannot write {actual} payload into {declared} field")]
    FieldTypeMismatch {
        feature: String,
        declared: FieldKind,
        actual: FeatureKind,
    },

    #[error("project id must not be empty")]
    InvalidProjectId,

    #[error("feature store name must not be empty")]
    InvalidFeatureStoreName,

    #[error("read feature values for entity '{entity_id}': {source}")]
    Transport {
        entity_id: String,
        #[source]
        source: TransportError,
    },
}

pub type Result<T> = std::result::Result<T, VertigoError>;
