//! Source type to TypeScript primitive mapping.

use std::fmt;

/// TypeScript primitive emitted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypingType {
    /// `boolean`
    Boolean,
    /// `string`
    String,
    /// `number`
    Number,
    /// `any`, used for every type without a dedicated mapping.
    Any,
}

impl TypingType {
    /// Returns the TypeScript spelling of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for TypingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a source field type name to its TypeScript primitive.
///
/// Unknown names map to [`TypingType::Any`].
#[must_use]
pub fn convert_type(field_type: &str) -> TypingType {
    match field_type {
        "Boolean" => TypingType::Boolean,
        "String" => TypingType::String,
        "Decimal" | "Double" | "Integer" | "Long" | "Number" => TypingType::Number,
        _ => TypingType::Any,
    }
}
