use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::schema::classifier::FieldClassifier;
use crate::schema::types::{FieldDescriptor, PrimitiveKind, ScalarType, SchemaError};
use crate::schema::Result;

/// Scalar mappings for the supported primitive kinds. Every integer width
/// maps to the generic `Int` scalar and both float widths map to `Float`.
static SCALAR_TABLE: Lazy<HashMap<PrimitiveKind, ScalarType>> = Lazy::new(|| {
    HashMap::from([
        (PrimitiveKind::String, ScalarType::String),
        (PrimitiveKind::Bool, ScalarType::Boolean),
        (PrimitiveKind::Int8, ScalarType::Int),
        (PrimitiveKind::Int16, ScalarType::Int),
        (PrimitiveKind::Int32, ScalarType::Int),
        (PrimitiveKind::Int64, ScalarType::Int),
        (PrimitiveKind::Float32, ScalarType::Float),
        (PrimitiveKind::Float64, ScalarType::Float),
    ])
});

/// Maps primitive field kinds to scalar output types.
pub struct ScalarMapper;

impl ScalarMapper {
    /// Maps a primitive kind to its scalar output type.
    ///
    /// # Errors
    /// Returns `SchemaError::UnsupportedKind` when the kind is not in the
    /// supported set (complex numbers, function values, raw pointers).
    pub fn map_primitive(kind: PrimitiveKind) -> Result<ScalarType> {
        SCALAR_TABLE.get(&kind).copied().ok_or_else(|| {
            SchemaError::UnsupportedKind(format!("no scalar mapping for kind '{kind:?}'"))
        })
    }

    /// The `unique = "true"` override: checked before any kind-based mapping
    /// and takes precedence unconditionally when present.
    pub fn unique_override(field: &FieldDescriptor) -> Option<ScalarType> {
        FieldClassifier::is_unique(field).then_some(ScalarType::Id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldKind;

    #[test]
    fn test_supported_kinds_map_to_documented_scalars() {
        let expected = [
            (PrimitiveKind::String, ScalarType::String),
            (PrimitiveKind::Bool, ScalarType::Boolean),
            (PrimitiveKind::Int8, ScalarType::Int),
            (PrimitiveKind::Int16, ScalarType::Int),
            (PrimitiveKind::Int32, ScalarType::Int),
            (PrimitiveKind::Int64, ScalarType::Int),
            (PrimitiveKind::Float32, ScalarType::Float),
            (PrimitiveKind::Float64, ScalarType::Float),
        ];
        for (kind, scalar) in expected {
            assert_eq!(ScalarMapper::map_primitive(kind).unwrap(), scalar);
        }
    }

    #[test]
    fn test_unsupported_kinds_fail() {
        for kind in [
            PrimitiveKind::Complex64,
            PrimitiveKind::Complex128,
            PrimitiveKind::Func,
            PrimitiveKind::Pointer,
        ] {
            let result = ScalarMapper::map_primitive(kind);
            assert!(matches!(result, Err(SchemaError::UnsupportedKind(_))));
        }
    }

    #[test]
    fn test_unique_override_beats_declared_kind() {
        let field = FieldDescriptor::new("id", FieldKind::Primitive(PrimitiveKind::Int64))
            .with_annotation("unique", "true");
        assert_eq!(ScalarMapper::unique_override(&field), Some(ScalarType::Id));
    }

    #[test]
    fn test_no_override_without_unique_annotation() {
        let field = FieldDescriptor::new("name", FieldKind::Primitive(PrimitiveKind::String));
        assert_eq!(ScalarMapper::unique_override(&field), None);

        let field = field.with_annotation("unique", "false");
        assert_eq!(ScalarMapper::unique_override(&field), None);
    }
}
