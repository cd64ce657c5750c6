use async_trait::async_trait;

use crate::core::{FeatureValue, TransportError};
use crate::decode::FeatureDescriptor;

/// Wire request for a single-entity online read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFeatureValuesRequest {
    /// Full resource path of the entity type being queried.
    pub entity_type: String,
    pub entity_id: String,
    pub feature_ids: Vec<String>,
}

/// Raw result of a single-entity online read: an ordered header and a value
/// list positionally paired with it.
#[derive(Debug, Clone)]
pub struct ReadFeatureValuesResponse {
    pub entity_id: String,
    pub header: Vec<FeatureDescriptor>,
    pub values: Vec<FeatureValue>,
}

/// The RPC boundary to the online serving API.
///
/// The crate only requires this shape; the exact wire encoding, retries,
/// authentication and connection management belong to the implementation.
/// Production code wraps the real gRPC stub; tests use an in-memory mock.
#[async_trait]
pub trait FeatureTransport: Send + Sync {
    /// Reads the feature values of one entity.
    async fn read_feature_values(
        &self,
        request: ReadFeatureValuesRequest,
    ) -> std::result::Result<ReadFeatureValuesResponse, TransportError>;
}
