use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::schema::types::{FieldKind, PrimitiveKind};

/// Represents a complete JSON record type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRecordDefinition {
    pub name: String,
    pub fields: Vec<JsonFieldDefinition>,
}

/// Represents a field in the JSON record definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFieldDefinition {
    pub name: String,
    pub kind: JsonFieldKind,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

/// JSON representation of a field kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonFieldKind {
    Primitive(PrimitiveKind),
    Record(String),
    Collection(Box<JsonFieldKind>),
}

impl From<JsonFieldKind> for FieldKind {
    fn from(json: JsonFieldKind) -> Self {
        match json {
            JsonFieldKind::Primitive(kind) => Self::Primitive(kind),
            JsonFieldKind::Record(name) => Self::Record(name),
            JsonFieldKind::Collection(element) => {
                Self::Collection(Box::new(Self::from(*element)))
            }
        }
    }
}
