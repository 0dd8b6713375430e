use crate::interpreter::types::{JsonFieldDefinition, JsonRecordDefinition};
use crate::interpreter::validator::RecordValidator;
use crate::schema::types::{FieldDescriptor, RecordType, SchemaError};

/// Interprets JSON record definitions and converts them to descriptor tables.
#[derive(Default)]
pub struct RecordInterpreter;

impl RecordInterpreter {
    /// Creates a new record interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Interprets a JSON record definition and converts it to a `RecordType`.
    ///
    /// # Errors
    /// Returns a `SchemaError` if the definition fails validation.
    pub fn interpret(
        &self,
        definition: JsonRecordDefinition,
    ) -> crate::interpreter::Result<RecordType> {
        // First validate the JSON definition
        RecordValidator::validate(&definition)?;

        let mut record = RecordType::new(definition.name);
        for field in definition.fields {
            record.add_field(Self::convert_field(field));
        }

        Ok(record)
    }

    /// Converts a JSON field definition to a field descriptor.
    fn convert_field(definition: JsonFieldDefinition) -> FieldDescriptor {
        FieldDescriptor::new(definition.name, definition.kind.into())
            .with_annotations(definition.annotations)
    }

    /// Interprets a JSON record definition from a string.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The JSON string is invalid
    /// - The definition fails validation
    pub fn interpret_str(&self, json_str: &str) -> crate::interpreter::Result<RecordType> {
        let definition: JsonRecordDefinition = serde_json::from_str(json_str)
            .map_err(|e| SchemaError::InvalidField(format!("Invalid record definition: {e}")))?;
        self.interpret(definition)
    }

    /// Interprets a JSON record definition from a file.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The file cannot be read
    /// - The file contains invalid JSON
    /// - The definition fails validation
    pub fn interpret_file(&self, path: &str) -> crate::interpreter::Result<RecordType> {
        let json_str = std::fs::read_to_string(path).map_err(|e| {
            SchemaError::InvalidField(format!("Failed to read record definition file: {e}"))
        })?;
        self.interpret_str(&json_str)
    }
}
