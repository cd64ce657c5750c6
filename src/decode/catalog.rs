use std::collections::HashMap;
use std::fmt;

use crate::core::{FeatureValue, FieldKind, Result};

/// Assignment function for one field of `T`, taking the feature id for error
/// context.
pub type WriteFn<T> = fn(&mut T, &str, &FeatureValue) -> Result<()>;

/// One decodable field of a destination record: its external feature id, its
/// declaration position within the record, its declared kind, and the typed
/// setter.
pub struct FieldDescriptor<T> {
    name: &'static str,
    position: usize,
    kind: FieldKind,
    write: WriteFn<T>,
}

impl<T> FieldDescriptor<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub(crate) fn write(&self, record: &mut T, value: &FeatureValue) -> Result<()> {
        (self.write)(record, self.name, value)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Mapping from external feature id to field descriptor for one record type.
///
/// Built once per type by the `FeatureRecord` derive and cached for the
/// process lifetime. Lookups are exact string matches; entries carry no
/// ordering guarantee.
pub struct FieldCatalog<T> {
    entries: HashMap<&'static str, FieldDescriptor<T>>,
}

impl<T> FieldCatalog<T> {
    pub fn builder() -> FieldCatalogBuilder<T> {
        FieldCatalogBuilder {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> fmt::Debug for FieldCatalog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

pub struct FieldCatalogBuilder<T> {
    entries: Vec<FieldDescriptor<T>>,
}

impl<T> FieldCatalogBuilder<T> {
    /// Registers one field under its external feature id.
    pub fn bind(
        mut self,
        name: &'static str,
        position: usize,
        kind: FieldKind,
        write: WriteFn<T>,
    ) -> Self {
        self.entries.push(FieldDescriptor {
            name,
            position,
            kind,
            write,
        });
        self
    }

    /// Finalizes the catalog. Feature ids must be unique per record type;
    /// the derive enforces this at compile time, so a duplicate here is a
    /// programming error in a hand-written binding.
    pub fn build(self) -> FieldCatalog<T> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for descriptor in self.entries {
            let name = descriptor.name;
            let previous = entries.insert(name, descriptor);
            assert!(previous.is_none(), "duplicate feature binding '{name}'");
        }
        FieldCatalog { entries }
    }
}
