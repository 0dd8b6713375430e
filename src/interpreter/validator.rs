use std::collections::HashSet;

use crate::interpreter::types::{JsonFieldKind, JsonRecordDefinition};
use crate::schema::types::SchemaError;

pub struct RecordValidator;

impl RecordValidator {
    /// Validates a JSON record definition.
    ///
    /// # Errors
    /// Returns a `SchemaError::InvalidField` if:
    /// - The record type name is empty
    /// - Any field name is empty
    /// - Any field name is defined multiple times
    /// - Any nested record reference names an empty type
    pub fn validate(definition: &JsonRecordDefinition) -> crate::interpreter::Result<()> {
        if definition.name.is_empty() {
            return Err(SchemaError::InvalidField(
                "Record type name cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &definition.fields {
            if field.name.is_empty() {
                return Err(SchemaError::InvalidField(
                    "Field name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(&field.name) {
                return Err(SchemaError::InvalidField(format!(
                    "Field {} is defined multiple times",
                    field.name
                )));
            }
            Self::validate_kind(&field.name, &field.kind)?;
        }

        Ok(())
    }

    fn validate_kind(field_name: &str, kind: &JsonFieldKind) -> crate::interpreter::Result<()> {
        match kind {
            JsonFieldKind::Primitive(_) => Ok(()),
            JsonFieldKind::Record(name) => {
                if name.is_empty() {
                    return Err(SchemaError::InvalidField(format!(
                        "Field {field_name} references a record type with an empty name"
                    )));
                }
                Ok(())
            }
            JsonFieldKind::Collection(element) => Self::validate_kind(field_name, element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::types::JsonFieldDefinition;
    use crate::schema::types::PrimitiveKind;
    use std::collections::HashMap;

    fn create_valid_definition() -> JsonRecordDefinition {
        JsonRecordDefinition {
            name: "Person".to_string(),
            fields: vec![JsonFieldDefinition {
                name: "name".to_string(),
                kind: JsonFieldKind::Primitive(PrimitiveKind::String),
                annotations: HashMap::new(),
            }],
        }
    }

    #[test]
    fn test_validate_valid_definition() {
        let definition = create_valid_definition();
        assert!(RecordValidator::validate(&definition).is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut definition = create_valid_definition();
        definition.name = "".to_string();
        assert!(RecordValidator::validate(&definition).is_err());
    }

    #[test]
    fn test_validate_empty_field_name() {
        let mut definition = create_valid_definition();
        definition.fields[0].name = "".to_string();
        assert!(RecordValidator::validate(&definition).is_err());
    }

    #[test]
    fn test_validate_duplicate_field() {
        let mut definition = create_valid_definition();
        definition.fields.push(JsonFieldDefinition {
            name: "name".to_string(),
            kind: JsonFieldKind::Primitive(PrimitiveKind::Int64),
            annotations: HashMap::new(),
        });
        assert!(RecordValidator::validate(&definition).is_err());
    }

    #[test]
    fn test_validate_empty_record_reference() {
        let mut definition = create_valid_definition();
        definition.fields.push(JsonFieldDefinition {
            name: "companion".to_string(),
            kind: JsonFieldKind::Collection(Box::new(JsonFieldKind::Record("".to_string()))),
            annotations: HashMap::new(),
        });
        assert!(RecordValidator::validate(&definition).is_err());
    }
}
