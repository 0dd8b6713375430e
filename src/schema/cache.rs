use std::collections::HashMap;
use std::sync::RwLock;

use crate::schema::types::{FieldDescriptor, FieldKind, ScalarType, SchemaError};
use crate::schema::Result;

/// Identifies one resolved leaf field.
///
/// The key is the composite of owning type name, field name and declared
/// kind, so two record types that share a field name with different
/// underlying kinds never reuse each other's entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub owner: String,
    pub field: String,
    pub kind: FieldKind,
}

impl CacheKey {
    pub fn for_field(owner: &str, field: &FieldDescriptor) -> Self {
        Self {
            owner: owner.to_string(),
            field: field.name.clone(),
            kind: field.kind.clone(),
        }
    }
}

/// Memoizes scalar resolutions across conversions.
///
/// Constructed once and passed by reference into each conversion; entries
/// live for the cache's lifetime and are never invalidated. Purely an
/// optimization: a hit must equal what a fresh resolution would produce.
#[derive(Debug, Default)]
pub struct ConversionCache {
    entries: RwLock<HashMap<CacheKey, ScalarType>>,
}

impl ConversionCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the memoized scalar for `key`, if one exists.
    pub fn get(&self, key: &CacheKey) -> Result<Option<ScalarType>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SchemaError::Internal("conversion cache lock poisoned".to_string()))?;
        Ok(entries.get(key).copied())
    }

    pub fn insert(&self, key: CacheKey, scalar: ScalarType) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SchemaError::Internal("conversion cache lock poisoned".to_string()))?;
        entries.insert(key, scalar);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
