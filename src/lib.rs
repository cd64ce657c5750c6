// ============================================================================
// Vertigo Library
// ============================================================================

pub mod client;
pub mod core;
pub mod decode;

// Re-export main types for convenience
pub use core::{FeatureKind, FeatureValue, FieldKind, Result, TransportError, VertigoError};
pub use decode::{Entity, FeatureDescriptor, FeatureRecord, FieldCatalog};

// Re-export client API
pub use client::{
    Client, Config, ConfigBuilder, DEFAULT_REGION, FeatureTransport, Query,
    ReadFeatureValuesRequest, ReadFeatureValuesResponse, VERTEX_ENDPOINT,
};

// Derive macro for FeatureRecord (same name as the trait, macro namespace)
pub use vertigo_derive::FeatureRecord;
