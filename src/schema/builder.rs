use log::debug;
use std::collections::HashSet;

use crate::schema::cache::{CacheKey, ConversionCache};
use crate::schema::classifier::FieldClassifier;
use crate::schema::mapper::ScalarMapper;
use crate::schema::registry::RecordRegistry;
use crate::schema::types::{
    FieldDescriptor, FieldKind, PrimitiveKind, RecordType, ScalarType, SchemaError,
    SchemaFieldSpec, SchemaObject, SchemaOutputType,
};
use crate::schema::Result;

/// Builds named schema objects from record type descriptor tables.
///
/// The builder borrows its registry and cache so callers control their
/// lifetimes; one builder can serve any number of conversions.
pub struct ObjectBuilder<'a> {
    registry: &'a RecordRegistry,
    cache: &'a ConversionCache,
}

impl<'a> ObjectBuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a RecordRegistry, cache: &'a ConversionCache) -> Self {
        Self { registry, cache }
    }

    /// Builds a named schema object from `record`.
    ///
    /// Enumerates the fields in declaration order, drops excluded fields,
    /// resolves each remaining field's output type and attaches its
    /// description and deprecation reason. Any field failure aborts the
    /// whole build; there is no partial output.
    ///
    /// # Errors
    /// - `SchemaError::UnsupportedKind` for a field whose kind has no mapping
    /// - `SchemaError::CyclicType` when the type graph is recursive
    /// - `SchemaError::NotFound` for an unregistered nested record reference
    pub fn build_object(&self, record: &RecordType) -> Result<SchemaObject> {
        let mut in_progress = HashSet::new();
        self.build_object_inner(record, &mut in_progress)
    }

    fn build_object_inner(
        &self,
        record: &RecordType,
        in_progress: &mut HashSet<String>,
    ) -> Result<SchemaObject> {
        if !in_progress.insert(record.name.clone()) {
            return Err(SchemaError::CyclicType(format!(
                "record type '{}' refers back to itself while being built",
                record.name
            )));
        }

        let mut object = SchemaObject::new(record.name.clone());
        for field in record.enumerate_fields() {
            if FieldClassifier::is_excluded(field) {
                continue;
            }
            let output = self.resolve_field_type(record, field, in_progress)?;
            object.add_field(
                SchemaFieldSpec::new(field.name.clone(), output)
                    .with_description(FieldClassifier::description(field))
                    .with_deprecation_reason(FieldClassifier::deprecation_reason(field)),
            );
        }

        in_progress.remove(&record.name);
        Ok(object)
    }

    /// Resolves one field's output type, in strict precedence order:
    /// the `unique` override, then nested record, collection of records,
    /// collection of primitives, and finally the field's own primitive kind.
    fn resolve_field_type(
        &self,
        owner: &RecordType,
        field: &FieldDescriptor,
        in_progress: &mut HashSet<String>,
    ) -> Result<SchemaOutputType> {
        if let Some(scalar) = ScalarMapper::unique_override(field) {
            return Ok(SchemaOutputType::Scalar(scalar));
        }

        match &field.kind {
            FieldKind::Record(name) => {
                let nested = self.build_nested(name, in_progress)?;
                Ok(SchemaOutputType::Object(nested))
            }
            FieldKind::Collection(element) => match element.as_ref() {
                FieldKind::Record(name) => {
                    let nested = self.build_nested(name, in_progress)?;
                    Ok(SchemaOutputType::List(Box::new(SchemaOutputType::Object(
                        nested,
                    ))))
                }
                FieldKind::Primitive(kind) => {
                    let scalar = self.map_scalar(owner, field, *kind)?;
                    Ok(SchemaOutputType::List(Box::new(SchemaOutputType::Scalar(
                        scalar,
                    ))))
                }
                FieldKind::Collection(_) => Err(SchemaError::unsupported_kind(
                    &owner.name,
                    &field.name,
                    "declares a collection of collections, which has no schema mapping",
                )),
            },
            FieldKind::Primitive(kind) => {
                let key = CacheKey::for_field(&owner.name, field);
                if let Some(scalar) = self.cache.get(&key)? {
                    return Ok(SchemaOutputType::Scalar(scalar));
                }
                let scalar = self.map_scalar(owner, field, *kind)?;
                self.cache.insert(key, scalar)?;
                Ok(SchemaOutputType::Scalar(scalar))
            }
        }
    }

    /// Re-enters the whole pipeline for a nested record reference.
    fn build_nested(
        &self,
        name: &str,
        in_progress: &mut HashSet<String>,
    ) -> Result<SchemaObject> {
        debug!("Building nested schema object for '{name}'");
        let record = self
            .registry
            .get(name)?
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        self.build_object_inner(&record, in_progress)
    }

    fn map_scalar(
        &self,
        owner: &RecordType,
        field: &FieldDescriptor,
        kind: PrimitiveKind,
    ) -> Result<ScalarType> {
        ScalarMapper::map_primitive(kind).map_err(|_| {
            SchemaError::unsupported_kind(
                &owner.name,
                &field.name,
                format!("has kind '{kind:?}' with no scalar mapping"),
            )
        })
    }
}
