pub mod errors;
pub mod output;
pub mod record;

pub use errors::SchemaError;
pub use output::{ScalarType, SchemaFieldSpec, SchemaObject, SchemaOutputType};
pub use record::{FieldDescriptor, FieldKind, PrimitiveKind, RecordType};
