//! Conversion from describe metadata into field declarations.
//!
//! [`DeclarationGenerator`] is the seam the typing generator consumes; the
//! default [`DescribeDeclarationGenerator`] maps describe types onto Apex type
//! names and adds declarations for parent and child relationships.

use crate::schema::{FieldDeclaration, SObject, SObjectDefinition, SObjectField};

/// Type used for polymorphic lookups.
pub const POLYMORPHIC_REFERENCE_TYPE: &str = "SObject";

/// Produces the field declarations for one object.
pub trait DeclarationGenerator: Send + Sync {
    /// Builds the declaration set for `sobject`.
    fn generate_sobject_definition(&self, sobject: &SObject) -> SObjectDefinition;
}

/// Maps platform describe payloads onto Apex field declarations.
#[derive(Debug, Default, Clone, Copy)]
pub struct DescribeDeclarationGenerator;

impl DeclarationGenerator for DescribeDeclarationGenerator {
    fn generate_sobject_definition(&self, sobject: &SObject) -> SObjectDefinition {
        let mut fields = Vec::with_capacity(sobject.fields.len() + sobject.child_relationships.len());

        for field in &sobject.fields {
            fields.push(FieldDeclaration::new(
                field.name.clone(),
                apex_type(&field.field_type),
            ));
            if let Some(decl) = relationship_declaration(field) {
                fields.push(decl);
            }
        }

        // Relationships without a name fall back to the child object name,
        // so several of them can collide.
        fields.extend(sobject.child_relationships.iter().map(|rel| {
            let name = rel
                .relationship_name
                .clone()
                .unwrap_or_else(|| rel.child_sobject.clone());
            FieldDeclaration::new(name, format!("List<{}>", rel.child_sobject))
        }));

        SObjectDefinition {
            name: sobject.name.clone(),
            fields,
        }
    }
}

fn relationship_declaration(field: &SObjectField) -> Option<FieldDeclaration> {
    let relationship = field.relationship_name.as_deref()?;
    let target = match field.reference_to.as_slice() {
        [single] => single.as_str(),
        _ => POLYMORPHIC_REFERENCE_TYPE,
    };
    Some(FieldDeclaration::new(relationship, target))
}

/// Maps a describe field type onto the Apex type name.
#[must_use]
pub fn apex_type(describe_type: &str) -> &'static str {
    match describe_type {
        "boolean" => "Boolean",
        "string" | "textarea" | "picklist" | "multipicklist" | "combobox" | "email" | "phone"
        | "url" | "encryptedstring" => "String",
        "double" | "currency" | "percent" => "Double",
        "int" => "Integer",
        "long" => "Long",
        "id" | "reference" => "Id",
        "date" => "Date",
        "datetime" => "Datetime",
        "time" => "Time",
        "base64" => "Blob",
        "location" => "Location",
        "address" => "Address",
        _ => "Object",
    }
}

#[cfg(test)]
mod tests {
    //! Tests for describe-to-declaration mapping.

    use super::*;
    use crate::schema::ChildRelationship;
    use rstest::rstest;

    fn field(name: &str, field_type: &str) -> SObjectField {
        SObjectField {
            name: name.to_owned(),
            field_type: field_type.to_owned(),
            reference_to: Vec::new(),
            relationship_name: None,
        }
    }

    #[rstest]
    #[case("boolean", "Boolean")]
    #[case("picklist", "String")]
    #[case("currency", "Double")]
    #[case("int", "Integer")]
    #[case("long", "Long")]
    #[case("reference", "Id")]
    #[case("datetime", "Datetime")]
    #[case("base64", "Blob")]
    #[case("anyType", "Object")]
    fn maps_describe_types(#[case] describe_type: &str, #[case] expected: &str) {
        assert_eq!(apex_type(describe_type), expected);
    }

    #[test]
    fn reference_fields_add_relationship_declarations() {
        let mut owner = field("OwnerId", "reference");
        owner.reference_to = vec!["User".to_owned()];
        owner.relationship_name = Some("Owner".to_owned());

        let mut what = field("WhatId", "reference");
        what.reference_to = vec!["Account".to_owned(), "Opportunity".to_owned()];
        what.relationship_name = Some("What".to_owned());

        let sobject = SObject {
            name: "Task".to_owned(),
            fields: vec![owner, what],
            ..SObject::default()
        };

        let definition = DescribeDeclarationGenerator.generate_sobject_definition(&sobject);
        assert_eq!(definition.name, "Task");
        assert_eq!(
            definition.fields,
            vec![
                FieldDeclaration::new("OwnerId", "Id"),
                FieldDeclaration::new("Owner", "User"),
                FieldDeclaration::new("WhatId", "Id"),
                FieldDeclaration::new("What", POLYMORPHIC_REFERENCE_TYPE),
            ]
        );
    }

    #[test]
    fn unnamed_child_relationships_reuse_child_object_name() {
        let sobject = SObject {
            name: "Account".to_owned(),
            child_relationships: vec![
                ChildRelationship {
                    child_sobject: "Contact".to_owned(),
                    relationship_name: Some("Contacts".to_owned()),
                    field: "AccountId".to_owned(),
                },
                ChildRelationship {
                    child_sobject: "AccountShare".to_owned(),
                    relationship_name: None,
                    field: "AccountId".to_owned(),
                },
                ChildRelationship {
                    child_sobject: "AccountShare".to_owned(),
                    relationship_name: None,
                    field: "RowCause".to_owned(),
                },
            ],
            ..SObject::default()
        };

        let definition = DescribeDeclarationGenerator.generate_sobject_definition(&sobject);
        assert_eq!(
            definition.fields,
            vec![
                FieldDeclaration::new("Contacts", "List<Contact>"),
                FieldDeclaration::new("AccountShare", "List<AccountShare>"),
                FieldDeclaration::new("AccountShare", "List<AccountShare>"),
            ]
        );
    }
}
