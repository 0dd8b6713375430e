/// Errors surfaced by schema derivation.
///
/// Derivation never recovers internally: a failure anywhere in the recursive
/// resolution aborts the whole top-level build, and the caller receives
/// either a complete schema object or a single descriptive error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    /// A field's underlying kind has no scalar mapping.
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(String),

    /// A record type was encountered while it was already being built.
    #[error("Cyclic type reference: {0}")]
    CyclicType(String),

    /// A referenced record type has not been registered.
    #[error("Record type not found: {0}")]
    NotFound(String),

    /// A descriptor table or JSON definition is malformed.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A shared store's lock was poisoned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SchemaError {
    /// Unsupported-kind error carrying the owning type and field names.
    pub fn unsupported_kind(owner: &str, field: &str, detail: impl std::fmt::Display) -> Self {
        Self::UnsupportedKind(format!("field '{owner}.{field}' {detail}"))
    }
}
