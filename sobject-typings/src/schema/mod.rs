//! SObject describe metadata and the field declaration model.
//!
//! The describe types mirror the JSON returned by the platform describe call
//! closely enough to deserialize it directly; keys the pipeline does not use
//! are ignored. [`FieldDeclaration`] and [`SObjectDefinition`] are the
//! intermediate form consumed by the typing generator.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A single field declaration produced for an object.
///
/// `field_type` holds a source-domain type name such as `String` or
/// `List<Contact>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Field or relationship name.
    pub name: String,
    /// Source-domain type name.
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldDeclaration {
    /// Creates a declaration from a name and a source type.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Field declarations for one object. Names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SObjectDefinition {
    /// API name of the object.
    pub name: String,
    /// Declarations in generator order.
    pub fields: Vec<FieldDeclaration>,
}

/// Describe metadata for one standard or custom object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SObject {
    /// API name; empty when the describe payload omitted it.
    #[serde(default)]
    pub name: String,
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Whether the object is a custom object.
    #[serde(default)]
    pub custom: bool,
    /// Field describes.
    #[serde(default)]
    pub fields: Vec<SObjectField>,
    /// Relationships from child objects that look up to this one.
    #[serde(default)]
    pub child_relationships: Vec<ChildRelationship>,
}

impl SObject {
    /// Returns the object name, or `None` when it is missing or empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        (!self.name.is_empty()).then_some(self.name.as_str())
    }
}

/// Describe metadata for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SObjectField {
    /// Field API name.
    pub name: String,
    /// Describe type, for example `string` or `reference`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Target objects for reference fields.
    #[serde(default)]
    pub reference_to: Vec<String>,
    /// Relationship name for reference fields.
    #[serde(default)]
    pub relationship_name: Option<String>,
}

/// Describe metadata for a child relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRelationship {
    /// API name of the child object.
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    /// Relationship name; platform describes omit it for some relationships.
    #[serde(default)]
    pub relationship_name: Option<String>,
    /// Lookup field on the child object.
    #[serde(default)]
    pub field: String,
}

/// Objects gathered by a metadata refresh, split by origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SObjectRefreshOutput {
    /// Project root the refresh ran against.
    pub sfdx_path: Utf8PathBuf,
    standard: Vec<SObject>,
    custom: Vec<SObject>,
}

impl SObjectRefreshOutput {
    /// Creates a refresh output for the given project root.
    pub fn new(sfdx_path: impl Into<Utf8PathBuf>, standard: Vec<SObject>, custom: Vec<SObject>) -> Self {
        Self {
            sfdx_path: sfdx_path.into(),
            standard,
            custom,
        }
    }

    /// Returns the project root.
    #[must_use]
    pub fn sfdx_path(&self) -> &Utf8Path {
        &self.sfdx_path
    }

    /// Returns the standard objects.
    #[must_use]
    pub fn get_standard(&self) -> &[SObject] {
        &self.standard
    }

    /// Returns the custom objects.
    #[must_use]
    pub fn get_custom(&self) -> &[SObject] {
        &self.custom
    }

    /// Iterates standard objects followed by custom objects.
    pub fn all(&self) -> impl Iterator<Item = &SObject> {
        self.standard.iter().chain(&self.custom)
    }
}
