use crate::client::config::Config;
use crate::client::transport::ReadFeatureValuesRequest;

/// A read of one entity's feature values from the online serving API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Entity type the entity belongs to.
    pub entity_type: String,

    /// Id of the entity being read.
    pub entity_id: String,

    /// Feature ids to read. `"*"` selects every feature of the entity type.
    pub features: Vec<String>,
}

impl Query {
    pub fn new(entity_type: &str, entity_id: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            features: Vec::new(),
        }
    }

    /// Add one requested feature id
    pub fn feature(mut self, id: &str) -> Self {
        self.features.push(id.to_string());
        self
    }

    /// Add several requested feature ids
    pub fn features(mut self, ids: &[&str]) -> Self {
        self.features.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    /// Translates the query into the wire request submitted to the serving
    /// API, resolving the full entity-type resource path from `cfg`.
    pub fn build_request(&self, cfg: &Config) -> ReadFeatureValuesRequest {
        ReadFeatureValuesRequest {
            entity_type: cfg.entity_type_path(&self.entity_type),
            entity_id: self.entity_id.clone(),
            feature_ids: self.features.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request() {
        let query = Query::new("test_entity", "123abc").feature("*");
        let cfg = Config::builder()
            .project_id("my-project")
            .region("northamerica-northeast1")
            .feature_store_name("my_featurestore")
            .build()
            .unwrap();

        let request = query.build_request(&cfg);
        assert_eq!(request.entity_id, "123abc");
        assert_eq!(
            request.entity_type,
            "projects/my-project/locations/northamerica-northeast1/featurestores/my_featurestore/entityTypes/test_entity"
        );
        assert_eq!(request.feature_ids, vec!["*".to_string()]);
    }

    #[test]
    fn test_feature_appenders() {
        let query = Query::new("users", "u1")
            .feature("age")
            .features(&["score", "tags"]);
        assert_eq!(
            query.features,
            vec!["age".to_string(), "score".to_string(), "tags".to_string()]
        );
    }
}
