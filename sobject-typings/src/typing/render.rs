//! Module stub rendering for object declaration files.

use crate::schema::{FieldDeclaration, SObjectDefinition};

use super::mapper::convert_type;

/// Module namespace LWC uses for schema imports.
pub const SCHEMA_MODULE_NAMESPACE: &str = "@salesforce/schema";

/// Line terminator placed between and after module stubs.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator placed between and after module stubs.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const COLLECTION_PREFIXES: [&str; 3] = ["List<", "Set<", "Map<"];

/// Renders the declaration file body for one object.
///
/// Fields are ordered by name, duplicate names keep their first entry, and
/// collection-typed fields are left out. The result always ends with
/// [`LINE_ENDING`].
#[must_use]
pub fn convert_declarations(definition: &SObjectDefinition) -> String {
    let mut declarations: Vec<&FieldDeclaration> = definition.fields.iter().collect();
    declarations.sort_by(|first, second| first.name.cmp(&second.name));
    declarations.dedup_by(|next, kept| next.name == kept.name);

    let mut content = declarations
        .into_iter()
        .filter(|decl| !is_collection_type(&decl.field_type))
        .map(|decl| convert_declaration(&definition.name, decl))
        .collect::<Vec<_>>()
        .join(LINE_ENDING);
    content.push_str(LINE_ENDING);
    content
}

/// Renders a single field as a module stub.
#[must_use]
pub fn convert_declaration(object_name: &str, decl: &FieldDeclaration) -> String {
    let name = &decl.name;
    let typing_type = convert_type(&decl.field_type);
    format!(
        "declare module \"{SCHEMA_MODULE_NAMESPACE}/{object_name}.{name}\" {{\n  const {name}:{typing_type};\n  export default {name};\n}}"
    )
}

/// Returns `true` for parametrized list, set, and map types.
#[must_use]
pub fn is_collection_type(field_type: &str) -> bool {
    COLLECTION_PREFIXES
        .iter()
        .any(|prefix| field_type.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    //! Tests for declaration rendering and assembly.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn account() -> SObjectDefinition {
        SObjectDefinition {
            name: "Account".to_owned(),
            fields: vec![
                FieldDeclaration::new("Name credit pending issue", "String"),
                FieldDeclaration::new("Id", "Id"),
                FieldDeclaration::new("Children", "List<Contact>"),
            ],
        }
    }

    fn stub(object: &str, name: &str, typing: &str) -> String {
        format!(
            "declare module \"@salesforce/schema/{object}.{name}\" {{\n  const {name}:{typing};\n  export default {name};\n}}"
        )
    }

    #[test]
    fn renders_module_stub() {
        let decl = FieldDeclaration::new("IsDeleted", "Boolean");
        assert_eq!(
            convert_declaration("Account", &decl),
            "declare module \"@salesforce/schema/Account.IsDeleted\" {\n  const IsDeleted:boolean;\n  export default IsDeleted;\n}"
        );
    }

    #[rstest]
    fn account_renders_sorted_scalars_only(account: SObjectDefinition) {
        let expected = format!(
            "{}{LINE_ENDING}{}{LINE_ENDING}",
            stub("Account", "Id", "any"),
            stub("Account", "Name credit pending issue", "string"),
        );
        assert_eq!(convert_declarations(&account), expected);
    }

    #[rstest]
    fn rendering_is_deterministic(account: SObjectDefinition) {
        assert_eq!(convert_declarations(&account), convert_declarations(&account));
    }

    #[test]
    fn duplicate_names_keep_first_after_sort() {
        let definition = SObjectDefinition {
            name: "Case".to_owned(),
            fields: vec![
                FieldDeclaration::new("Subject", "String"),
                FieldDeclaration::new("Owner", "User"),
                FieldDeclaration::new("Subject", "Integer"),
                FieldDeclaration::new("Owner", "Group"),
            ],
        };

        let content = convert_declarations(&definition);
        assert_eq!(content.matches("const Subject:").count(), 1);
        assert_eq!(content.matches("const Owner:").count(), 1);
        assert!(content.contains("const Subject:string;"));
        let owner = content.find("Case.Owner").expect("owner stub");
        let subject = content.find("Case.Subject").expect("subject stub");
        assert!(owner < subject, "stubs should be ordered by name: {content}");
    }

    #[test]
    fn collection_duplicate_shadows_later_scalar() {
        // Dedup runs before the collection filter, so a collection listed
        // first shadows its scalar namesake.
        let definition = SObjectDefinition {
            name: "Account".to_owned(),
            fields: vec![
                FieldDeclaration::new("Shares", "List<AccountShare>"),
                FieldDeclaration::new("Shares", "String"),
            ],
        };
        assert_eq!(convert_declarations(&definition), LINE_ENDING);
    }

    fn stub_names(content: &str) -> Vec<&str> {
        content
            .lines()
            .filter_map(|line| line.strip_prefix("declare module \"@salesforce/schema/Mixed."))
            .filter_map(|rest| rest.strip_suffix("\" {"))
            .collect()
    }

    #[rstest]
    #[case(&[("A", "String"), ("A", "String"), ("B", "Id")], &["A", "B"])]
    #[case(&[("Rel", "List<X>"), ("Rel", "String"), ("Other", "Integer")], &["Other"])]
    #[case(&[("Rel", "String"), ("Rel", "List<X>")], &["Rel"])]
    #[case(&[("Z", "Map<Id,Z>"), ("Y", "Set<Id>"), ("X", "List<X>")], &[])]
    #[case(&[("C", "Date"), ("B", "Set<Id>"), ("C", "Map<Id,C>"), ("A", "Boolean"), ("A", "Boolean")], &["A", "C"])]
    fn rendered_stubs_are_unique_and_scalar(
        #[case] fields: &[(&str, &str)],
        #[case] expected: &[&str],
    ) {
        let definition = SObjectDefinition {
            name: "Mixed".to_owned(),
            fields: fields
                .iter()
                .map(|(name, field_type)| FieldDeclaration::new(*name, *field_type))
                .collect(),
        };

        let content = convert_declarations(&definition);
        let names = stub_names(&content);

        assert_eq!(names, expected);
        let mut unique = names.clone();
        unique.dedup();
        assert_eq!(unique.len(), names.len(), "duplicate stub in {content}");
        assert!(
            !COLLECTION_PREFIXES.iter().any(|prefix| content.contains(prefix)),
            "collection type leaked into {content}"
        );
    }

    #[test]
    fn empty_definition_renders_single_terminator() {
        let definition = SObjectDefinition {
            name: "Empty".to_owned(),
            fields: Vec::new(),
        };
        assert_eq!(convert_declarations(&definition), LINE_ENDING);
    }

    #[rstest]
    #[case("List<Contact>", true)]
    #[case("Set<Id>", true)]
    #[case("Map<Id,Account>", true)]
    #[case("String", false)]
    #[case("Listing", false)]
    #[case("list<Contact>", false)]
    fn detects_collection_types(#[case] field_type: &str, #[case] expected: bool) {
        assert_eq!(is_collection_type(field_type), expected);
    }
}
