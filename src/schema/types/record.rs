use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category of a record field's declared type.
///
/// Nested record types are referenced by their registered name rather than
/// embedded, so descriptor tables stay flat and recursive type graphs can be
/// detected at build time instead of looping forever.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A primitive scalar value.
    Primitive(PrimitiveKind),
    /// A nested record type, referenced by registered type name.
    Record(String),
    /// A collection of the inner kind.
    Collection(Box<FieldKind>),
}

/// Primitive value kinds a field can declare.
///
/// Covers the supported scalar set plus the kinds that deliberately have no
/// scalar mapping, so a descriptor table can express them and the mapper can
/// reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    String,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    Func,
    Pointer,
}

/// A single field in a record type descriptor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    /// Declarative per-field metadata: `exclude`, `unique`, `description`,
    /// `deprecationReason`. Read but never modified during conversion.
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotations: HashMap::new(),
        }
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    pub fn with_annotations(mut self, annotations: HashMap<String, String>) -> Self {
        self.annotations = annotations;
        self
    }
}

/// A record type's shape: its name and ordered field descriptor table.
///
/// Built once at startup, either through the builder methods here or from a
/// JSON definition via the interpreter. Immutable for the duration of a
/// conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordType {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Fields in declaration order.
    pub fn enumerate_fields(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
