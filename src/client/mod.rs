pub mod config;
pub mod query;
pub mod transport;

pub use config::{Config, ConfigBuilder, DEFAULT_REGION, VERTEX_ENDPOINT};
pub use query::Query;
pub use transport::{FeatureTransport, ReadFeatureValuesRequest, ReadFeatureValuesResponse};

use tracing::debug;

use crate::core::{Result, VertigoError};
use crate::decode::Entity;

/// Client for the feature store's online serving API.
///
/// Generic over the transport so tests can substitute an in-memory mock for
/// the real gRPC stub. The client itself holds no connection state.
pub struct Client<T: FeatureTransport> {
    cfg: Config,
    transport: T,
}

impl<T: FeatureTransport> Client<T> {
    pub fn new(cfg: Config, transport: T) -> Self {
        Self { cfg, transport }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Reads the feature values of the queried entity and wraps them as an
    /// [`Entity`] ready for [`Entity::scan_struct`].
    ///
    /// Transport failures are returned with the entity id attached as
    /// context, otherwise unmodified. The read carries no built-in timeout;
    /// callers impose cancellation by dropping or racing the returned
    /// future.
    pub async fn get_entity(&self, query: &Query) -> Result<Entity> {
        let request = query.build_request(&self.cfg);
        debug!(
            "reading feature values: entity='{}' path='{}' features={}",
            request.entity_id,
            request.entity_type,
            request.feature_ids.len()
        );

        let response = self
            .transport
            .read_feature_values(request)
            .await
            .map_err(|source| VertigoError::Transport {
                entity_id: query.entity_id.clone(),
                source,
            })?;

        Ok(Entity::new(
            response.entity_id,
            response.header,
            response.values,
        ))
    }
}
