use serde::{Deserialize, Serialize};

use crate::core::{Result, VertigoError};

/// Region applied when a builder does not set one.
pub const DEFAULT_REGION: &str = "us-central1";

/// Host:port of the serving API; regional endpoints prefix it with the
/// region name.
pub const VERTEX_ENDPOINT: &str = "aiplatform.googleapis.com:443";

/// Validated configuration for the online serving client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Project the feature store resides in.
    pub project_id: String,

    /// Region (sometimes referred to as location) the feature store is
    /// running in.
    pub region: String,

    /// Name of the feature store.
    pub feature_store_name: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Regional endpoint of the serving API.
    pub fn api_endpoint(&self) -> String {
        format!("{}-{}", self.region, VERTEX_ENDPOINT)
    }

    /// Resource hierarchy of the feature store being read from.
    pub fn parent_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/featurestores/{}",
            self.project_id, self.region, self.feature_store_name
        )
    }

    /// Resource name of one entity type within the feature store.
    pub fn entity_type_path(&self, entity_type: &str) -> String {
        format!("{}/entityTypes/{}", self.parent_path(), entity_type)
    }
}

/// Builder for [`Config`].
///
/// Validation runs once, in [`ConfigBuilder::build`], before any client is
/// constructed: project id and feature store name are mandatory, the region
/// falls back to [`DEFAULT_REGION`] when unset.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    project_id: String,
    region: String,
    feature_store_name: String,
}

impl ConfigBuilder {
    /// Set the project id
    pub fn project_id(mut self, project_id: &str) -> Self {
        self.project_id = project_id.to_string();
        self
    }

    /// Set the region
    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// Set the feature store name
    pub fn feature_store_name(mut self, feature_store_name: &str) -> Self {
        self.feature_store_name = feature_store_name.to_string();
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.project_id.is_empty() {
            return Err(VertigoError::InvalidProjectId);
        }
        if self.feature_store_name.is_empty() {
            return Err(VertigoError::InvalidFeatureStoreName);
        }

        let region = if self.region.is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            self.region
        };

        Ok(Config {
            project_id: self.project_id,
            region,
            feature_store_name: self.feature_store_name,
        })
    }
}
