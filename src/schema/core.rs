use log::{info, warn};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::interpreter::RecordInterpreter;
use crate::schema::builder::ObjectBuilder;
use crate::schema::cache::ConversionCache;
use crate::schema::registry::RecordRegistry;
use crate::schema::types::{RecordType, SchemaError, SchemaObject, SchemaOutputType};
use crate::schema::Result;

/// Owns the record registry, the conversion cache and the store of derived
/// schema objects, and exposes the derivation entry points.
///
/// Constructed once at startup; registrations and derivations may then run
/// from any thread.
#[derive(Debug, Default)]
pub struct SchemaCore {
    registry: RecordRegistry,
    cache: ConversionCache,
    derived: RwLock<HashMap<String, SchemaObject>>,
}

impl SchemaCore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RecordRegistry::new(),
            cache: ConversionCache::new(),
            derived: RwLock::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &RecordRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &ConversionCache {
        &self.cache
    }

    /// Registers a record type descriptor table.
    ///
    /// Re-registering a name drops the previously derived object for it, so
    /// the next derivation rebuilds against the new table.
    pub fn register(&self, record: RecordType) -> Result<()> {
        let name = record.name.clone();
        let field_count = record.fields.len();
        if self.registry.register(record)? {
            warn!("Record type '{name}' re-registered, dropping derived object");
            self.derived_mut()?.remove(&name);
        }
        info!("Registered record type '{name}' with {field_count} fields");
        Ok(())
    }

    /// Registers a record type from a JSON definition string.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the JSON is invalid or the definition
    /// fails validation.
    pub fn register_str(&self, json: &str) -> Result<String> {
        let record = RecordInterpreter::new().interpret_str(json)?;
        let name = record.name.clone();
        self.register(record)?;
        Ok(name)
    }

    /// Registers a record type from a JSON definition file.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the file cannot be read, the JSON is
    /// invalid or the definition fails validation.
    pub fn register_file(&self, path: &str) -> Result<String> {
        let record = RecordInterpreter::new().interpret_file(path)?;
        let name = record.name.clone();
        self.register(record)?;
        Ok(name)
    }

    /// Derives the schema object for a registered record type.
    ///
    /// Serves repeated derivations of the same name from the derived-object
    /// store; the underlying conversion is deterministic, so the stored
    /// object equals what a fresh build would produce.
    pub fn derive_object(&self, name: &str) -> Result<SchemaObject> {
        if let Some(object) = self.derived(name)? {
            return Ok(object);
        }

        let record = self
            .registry
            .get(name)?
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        let object = ObjectBuilder::new(&self.registry, &self.cache).build_object(&record)?;
        info!(
            "Derived schema object '{}' with {} fields",
            object.name,
            object.fields.len()
        );

        self.derived_mut()?
            .insert(name.to_string(), object.clone());
        Ok(object)
    }

    /// Derives the schema output type for a registered record type.
    pub fn derive(&self, name: &str) -> Result<SchemaOutputType> {
        Ok(SchemaOutputType::Object(self.derive_object(name)?))
    }

    /// Returns the previously derived object for `name`, if any.
    pub fn derived(&self, name: &str) -> Result<Option<SchemaObject>> {
        let derived = self
            .derived
            .read()
            .map_err(|_| SchemaError::Internal("derived object store lock poisoned".to_string()))?;
        Ok(derived.get(name).cloned())
    }

    fn derived_mut(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, SchemaObject>>> {
        self.derived
            .write()
            .map_err(|_| SchemaError::Internal("derived object store lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{FieldDescriptor, FieldKind, PrimitiveKind, ScalarType};

    fn person_and_pet(core: &SchemaCore) {
        core.register(
            RecordType::new("Pet").with_field(FieldDescriptor::new(
                "nickname",
                FieldKind::Primitive(PrimitiveKind::String),
            )),
        )
        .unwrap();
        core.register(
            RecordType::new("Person")
                .with_field(FieldDescriptor::new(
                    "name",
                    FieldKind::Primitive(PrimitiveKind::String),
                ))
                .with_field(
                    FieldDescriptor::new("age", FieldKind::Primitive(PrimitiveKind::Int64))
                        .with_annotation("unique", "true"),
                )
                .with_field(FieldDescriptor::new(
                    "pets",
                    FieldKind::Collection(Box::new(FieldKind::Record("Pet".to_string()))),
                )),
        )
        .unwrap();
    }

    #[test]
    fn test_derive_registered_type() {
        let core = SchemaCore::new();
        person_and_pet(&core);

        let object = core.derive_object("Person").unwrap();
        assert_eq!(object.name, "Person");
        assert_eq!(object.fields.len(), 3);
        assert_eq!(
            object.field("age").unwrap().output,
            SchemaOutputType::Scalar(ScalarType::Id)
        );
    }

    #[test]
    fn test_derive_unknown_type_fails() {
        let core = SchemaCore::new();
        assert!(matches!(
            core.derive_object("Ghost"),
            Err(SchemaError::NotFound(_))
        ));
    }

    #[test]
    fn test_repeated_derivation_served_from_store() {
        let core = SchemaCore::new();
        person_and_pet(&core);

        let first = core.derive_object("Person").unwrap();
        assert!(core.derived("Person").unwrap().is_some());
        let second = core.derive_object("Person").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reregistration_drops_derived_object() {
        let core = SchemaCore::new();
        person_and_pet(&core);
        core.derive_object("Person").unwrap();

        core.register(RecordType::new("Person").with_field(FieldDescriptor::new(
            "name",
            FieldKind::Primitive(PrimitiveKind::String),
        )))
        .unwrap();
        assert!(core.derived("Person").unwrap().is_none());

        let rebuilt = core.derive_object("Person").unwrap();
        assert_eq!(rebuilt.fields.len(), 1);
    }

    #[test]
    fn test_register_str_round_trip() {
        let core = SchemaCore::new();
        let json = r#"{
            "name": "Reading",
            "fields": [
                { "name": "sensor", "kind": { "primitive": "string" } },
                { "name": "value", "kind": { "primitive": "float64" } }
            ]
        }"#;

        let name = core.register_str(json).unwrap();
        assert_eq!(name, "Reading");

        let object = core.derive_object("Reading").unwrap();
        assert_eq!(
            object.field("value").unwrap().output,
            SchemaOutputType::Scalar(ScalarType::Float)
        );
    }
}
