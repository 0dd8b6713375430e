//! Interpreter module for parsing JSON record definitions into descriptor tables.

mod interpreter;
mod types;
mod validator;

pub use interpreter::RecordInterpreter;
pub use types::{JsonFieldDefinition, JsonFieldKind, JsonRecordDefinition};
pub use validator::RecordValidator;

use crate::schema::types::SchemaError;

/// Result type for record interpretation operations
pub type Result<T> = std::result::Result<T, SchemaError>;
