use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scalar output types the mapper can produce.
///
/// All integer widths collapse to `Int` and both float widths collapse to
/// `Float`; precision distinctions are intentionally discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Boolean,
    Int,
    Float,
    Id,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Id => "ID",
        };
        write!(f, "{name}")
    }
}

/// The converted representation handed to the schema execution engine:
/// a scalar, a named object, or a list wrapping either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaOutputType {
    Scalar(ScalarType),
    Object(SchemaObject),
    List(Box<SchemaOutputType>),
}

impl SchemaOutputType {
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<ScalarType> {
        match self {
            Self::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }
}

/// One resolved field in a schema object.
///
/// Description and deprecation reason carry the annotation text verbatim;
/// an empty string means the annotation was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFieldSpec {
    pub name: String,
    pub output: SchemaOutputType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deprecation_reason: String,
}

impl SchemaFieldSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, output: SchemaOutputType) -> Self {
        Self {
            name: name.into(),
            output,
            description: String::new(),
            deprecation_reason: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = reason.into();
        self
    }

    /// A non-empty deprecation reason marks the field deprecated.
    pub fn is_deprecated(&self) -> bool {
        !self.deprecation_reason.is_empty()
    }
}

/// A named schema object assembled from a record type.
///
/// Fields map by name; inserting a duplicate name silently overwrites the
/// earlier entry. The object's name equals its source record type's name,
/// so two different record types sharing a name produce colliding objects;
/// avoiding that is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaObject {
    pub name: String,
    pub fields: HashMap<String, SchemaFieldSpec>,
}

impl SchemaObject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, field: SchemaFieldSpec) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&SchemaFieldSpec> {
        self.fields.get(name)
    }
}
