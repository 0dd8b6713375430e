use crate::schema::types::FieldDescriptor;

/// Annotation key that omits a field from the output object.
pub const EXCLUDE: &str = "exclude";
/// Annotation key that forces identifier-scalar output.
pub const UNIQUE: &str = "unique";
/// Annotation key for the field's documentation text.
pub const DESCRIPTION: &str = "description";
/// Annotation key for the field's deprecation reason.
pub const DEPRECATION_REASON: &str = "deprecationReason";

/// Reads per-field annotations to decide inclusion, documentation text and
/// deprecation status. Pure functions of the field's annotation map; a
/// missing annotation resolves to the empty string, never an error.
pub struct FieldClassifier;

impl FieldClassifier {
    /// Returns the annotation value for `key`, or `""` when absent.
    pub fn annotation(field: &FieldDescriptor, key: &str) -> String {
        field.annotations.get(key).cloned().unwrap_or_default()
    }

    /// A field annotated `exclude = "true"` is omitted entirely.
    pub fn is_excluded(field: &FieldDescriptor) -> bool {
        Self::annotation(field, EXCLUDE) == "true"
    }

    /// A field annotated `unique = "true"` maps to the identifier scalar.
    pub fn is_unique(field: &FieldDescriptor) -> bool {
        Self::annotation(field, UNIQUE) == "true"
    }

    pub fn description(field: &FieldDescriptor) -> String {
        Self::annotation(field, DESCRIPTION)
    }

    pub fn deprecation_reason(field: &FieldDescriptor) -> String {
        Self::annotation(field, DEPRECATION_REASON)
    }
}
