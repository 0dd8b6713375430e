pub mod builder;
pub mod cache;
pub mod classifier;
pub mod core;
pub mod mapper;
pub mod registry;
pub mod types;

pub use builder::ObjectBuilder;
pub use cache::{CacheKey, ConversionCache};
pub use classifier::FieldClassifier;
pub use self::core::SchemaCore;
pub use mapper::ScalarMapper;
pub use registry::RecordRegistry;

// Re-export all types at the schema module level
pub use types::{
    FieldDescriptor, FieldKind, PrimitiveKind, RecordType, ScalarType, SchemaError,
    SchemaFieldSpec, SchemaObject, SchemaOutputType,
};

/// Result type for schema derivation operations
pub type Result<T> = std::result::Result<T, SchemaError>;
