pub mod catalog;
pub mod field;

pub use catalog::{FieldCatalog, FieldCatalogBuilder, FieldDescriptor, WriteFn};
pub use field::FeatureField;

use tracing::debug;

use crate::core::{FeatureValue, Result, VertigoError};

/// A destination record type with a cached feature-id-to-field catalog.
///
/// Usually implemented via `#[derive(FeatureRecord)]`; hand-written impls
/// can build the catalog with [`FieldCatalog::builder`].
pub trait FeatureRecord {
    /// The catalog for this type, built once and cached for the process
    /// lifetime. Read-only type metadata: concurrent decodes into distinct
    /// record instances need no synchronization.
    fn field_catalog() -> &'static FieldCatalog<Self>
    where
        Self: Sized;
}

/// One column of a response header, positionally paired with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub id: String,
}

impl FeatureDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Header and values for one entity, as fetched from the online serving API.
///
/// Constructed once per remote read, consumed by [`Entity::scan_struct`],
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Id of the entity the feature values belong to.
    pub id: String,
    header: Vec<FeatureDescriptor>,
    values: Vec<FeatureValue>,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        header: Vec<FeatureDescriptor>,
        values: Vec<FeatureValue>,
    ) -> Self {
        Self {
            id: id.into(),
            header,
            values,
        }
    }

    pub fn header(&self) -> &[FeatureDescriptor] {
        &self.header
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// Decodes the entity's feature values into `dst`.
    ///
    /// Header and value list must be positionally paired; a length mismatch
    /// fails with [`VertigoError::ArityMismatch`] before any field is
    /// touched. Header entries with no matching annotation in `dst` and
    /// entries whose value is absent are skipped, so decode only ever adds
    /// to the destination: unmatched fields keep their pre-call values.
    ///
    /// # Examples
    ///
    /// ```
    /// use vertigo::{Entity, FeatureDescriptor, FeatureRecord, FeatureValue};
    ///
    /// #[derive(Default, FeatureRecord)]
    /// struct UserFeatures {
    ///     #[feature(id = "age")]
    ///     age: i64,
    ///     #[feature(id = "tags")]
    ///     tags: Vec<String>,
    /// }
    ///
    /// # fn main() -> vertigo::Result<()> {
    /// let entity = Entity::new(
    ///     "user-1",
    ///     vec![FeatureDescriptor::new("age"), FeatureDescriptor::new("tags")],
    ///     vec![
    ///         FeatureValue::Integer(25),
    ///         FeatureValue::TextArray(vec!["a".to_string(), "b".to_string()]),
    ///     ],
    /// );
    ///
    /// let mut features = UserFeatures::default();
    /// entity.scan_struct(&mut features)?;
    /// assert_eq!(features.age, 25);
    /// assert_eq!(features.tags.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn scan_struct<T: FeatureRecord + 'static>(&self, dst: &mut T) -> Result<()> {
        if self.header.len() != self.values.len() {
            return Err(VertigoError::ArityMismatch {
                header: self.header.len(),
                values: self.values.len(),
            });
        }

        let catalog = T::field_catalog();
        let mut written = 0usize;
        for (descriptor, value) in self.header.iter().zip(self.values.iter()) {
            let Some(field) = catalog.get(&descriptor.id) else {
                continue;
            };
            if value.is_absent() {
                continue;
            }
            field.write(dst, value)?;
            written += 1;
        }
        debug!(
            "scanned entity '{}': {} of {} features written",
            self.id,
            written,
            self.header.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldKind;
    use std::sync::OnceLock;

    #[derive(Default)]
    struct Profile {
        age: i64,
        score: Option<f64>,
        tags: Vec<String>,
    }

    fn write_age(record: &mut Profile, feature: &str, value: &FeatureValue) -> Result<()> {
        record.age.write_value(feature, value)
    }

    fn write_score(record: &mut Profile, feature: &str, value: &FeatureValue) -> Result<()> {
        record.score.write_value(feature, value)
    }

    fn write_tags(record: &mut Profile, feature: &str, value: &FeatureValue) -> Result<()> {
        record.tags.write_value(feature, value)
    }

    impl FeatureRecord for Profile {
        fn field_catalog() -> &'static FieldCatalog<Self> {
            static CATALOG: OnceLock<FieldCatalog<Profile>> = OnceLock::new();
            CATALOG.get_or_init(|| {
                FieldCatalog::builder()
                    .bind("age", 0, <i64 as FeatureField>::KIND, write_age)
                    .bind("score", 1, <Option<f64> as FeatureField>::KIND, write_score)
                    .bind("tags", 2, <Vec<String> as FeatureField>::KIND, write_tags)
                    .build()
            })
        }
    }

    fn header(ids: &[&str]) -> Vec<FeatureDescriptor> {
        ids.iter().map(|id| FeatureDescriptor::new(*id)).collect()
    }

    #[test]
    fn test_scan_matched_fields() {
        let entity = Entity::new(
            "user-1",
            header(&["age", "score", "tags"]),
            vec![
                FeatureValue::Integer(25),
                FeatureValue::Float(50.0),
                FeatureValue::TextArray(vec!["a".to_string(), "b".to_string()]),
            ],
        );

        let mut profile = Profile::default();
        entity.scan_struct(&mut profile).unwrap();

        assert_eq!(profile.age, 25);
        assert_eq!(profile.score, Some(50.0));
        assert_eq!(profile.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_arity_mismatch_leaves_destination_unchanged() {
        let entity = Entity::new(
            "user-1",
            header(&["age", "score"]),
            vec![FeatureValue::Integer(25)],
        );

        let mut profile = Profile {
            age: 7,
            score: Some(1.0),
            tags: vec!["keep".to_string()],
        };
        let err = entity.scan_struct(&mut profile).unwrap_err();

        match err {
            VertigoError::ArityMismatch { header, values } => {
                assert_eq!(header, 2);
                assert_eq!(values, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(profile.age, 7);
        assert_eq!(profile.score, Some(1.0));
        assert_eq!(profile.tags, vec!["keep".to_string()]);
    }

    #[test]
    fn test_absent_value_skipped() {
        let entity = Entity::new(
            "user-1",
            header(&["age", "score"]),
            vec![FeatureValue::Integer(30), FeatureValue::Absent],
        );

        let mut profile = Profile::default();
        entity.scan_struct(&mut profile).unwrap();

        assert_eq!(profile.age, 30);
        assert_eq!(profile.score, None);
    }

    #[test]
    fn test_unmapped_header_entries_skipped() {
        let entity = Entity::new(
            "user-1",
            header(&["unknown_feature", "age"]),
            vec![FeatureValue::Text("ignored".to_string()), FeatureValue::Integer(1)],
        );

        let mut profile = Profile::default();
        entity.scan_struct(&mut profile).unwrap();

        assert_eq!(profile.age, 1);
    }

    #[test]
    fn test_type_mismatch_propagates() {
        let entity = Entity::new(
            "user-1",
            header(&["age"]),
            vec![FeatureValue::Text("not a number".to_string())],
        );

        let mut profile = Profile::default();
        let err = entity.scan_struct(&mut profile).unwrap_err();
        assert!(matches!(
            err,
            VertigoError::FieldTypeMismatch {
                declared: FieldKind::Integer,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_entity_is_a_noop() {
        let entity = Entity::new("user-1", Vec::new(), Vec::new());
        let mut profile = Profile::default();
        entity.scan_struct(&mut profile).unwrap();
        assert_eq!(profile.age, 0);
    }
}
