use std::collections::HashMap;
use std::sync::RwLock;

use crate::schema::types::{RecordType, SchemaError};
use crate::schema::Result;

/// Thread-safe store of registered record type descriptor tables.
///
/// Nested `FieldKind::Record` references resolve through the registry at
/// build time; referencing a name that was never registered fails the build
/// with `SchemaError::NotFound`.
#[derive(Debug, Default)]
pub struct RecordRegistry {
    types: RwLock<HashMap<String, RecordType>>,
}

impl RecordRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a record type, replacing any earlier table with the same
    /// name. Returns whether a table was replaced.
    pub fn register(&self, record: RecordType) -> Result<bool> {
        let mut types = self
            .types
            .write()
            .map_err(|_| SchemaError::Internal("record registry lock poisoned".to_string()))?;
        Ok(types.insert(record.name.clone(), record).is_some())
    }

    /// Retrieves a clone of the record type if it is registered.
    pub fn get(&self, name: &str) -> Result<Option<RecordType>> {
        let types = self
            .types
            .read()
            .map_err(|_| SchemaError::Internal("record registry lock poisoned".to_string()))?;
        Ok(types.get(name).cloned())
    }

    /// Removes a registered record type. Returns true if it existed.
    pub fn unregister(&self, name: &str) -> Result<bool> {
        let mut types = self
            .types
            .write()
            .map_err(|_| SchemaError::Internal("record registry lock poisoned".to_string()))?;
        Ok(types.remove(name).is_some())
    }

    pub fn is_registered(&self, name: &str) -> Result<bool> {
        let types = self
            .types
            .read()
            .map_err(|_| SchemaError::Internal("record registry lock poisoned".to_string()))?;
        Ok(types.contains_key(name))
    }

    /// Names of all registered record types.
    pub fn names(&self) -> Result<Vec<String>> {
        let types = self
            .types
            .read()
            .map_err(|_| SchemaError::Internal("record registry lock poisoned".to_string()))?;
        Ok(types.keys().cloned().collect())
    }
}
