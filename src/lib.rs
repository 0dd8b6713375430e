//! # structql
//!
//! Derives API schema object descriptions from plain record type descriptor
//! tables, so application code does not need to hand-author a parallel schema
//! definition for every record type it exposes.
//!
//! ## Core Components
//!
//! * `schema::types` - Record type descriptor tables and the emitted schema graph
//! * `schema::classifier` - Per-field annotation handling (exclude, unique, docs, deprecation)
//! * `schema::mapper` - Primitive kind to scalar output mapping
//! * `schema::builder` - Recursive object builder over registered record types
//! * `schema::cache` - Memoization of scalar resolutions
//! * `schema::registry` - Thread-safe store of registered record types
//! * `interpreter` - JSON record definition parsing and validation
//!
//! ## Architecture
//!
//! A record type is registered once at startup, either built in code or
//! interpreted from a JSON definition. Derivation walks the type's field
//! descriptors in declaration order, drops excluded fields, applies the
//! `unique` override, maps primitive kinds to scalars and recurses into
//! nested record types and collections of records, producing a named schema
//! object for a schema execution engine to consume. The walk is pure and
//! synchronous; cyclic type graphs are rejected rather than recursed.

pub mod interpreter;
pub mod schema;

// Re-export main types for convenience
pub use interpreter::{JsonFieldDefinition, JsonFieldKind, JsonRecordDefinition, RecordInterpreter};
pub use schema::{
    ConversionCache, FieldClassifier, FieldDescriptor, FieldKind, ObjectBuilder, PrimitiveKind,
    RecordRegistry, RecordType, ScalarMapper, ScalarType, SchemaCore, SchemaError, SchemaFieldSpec,
    SchemaObject, SchemaOutputType,
};
