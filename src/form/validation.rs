use std::sync::LazyLock;

use convert_case::{Case, Casing};
use regex::Regex;

use crate::domain::{FieldDraft, NamedField};

use super::{
    config::{EditorConfig, NameComparison},
    error::ValidationError,
};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z_$ ][A-Za-z0-9_$ ]*)?$").expect("identifier grammar must compile")
});

/// Copy of `draft` with surrounding whitespace removed from the name.
pub fn format(draft: &FieldDraft) -> FieldDraft {
    FieldDraft {
        name: trim_name(&draft.name).to_string(),
        ..draft.clone()
    }
}

/// Strips whitespace and U+FEFF from both ends.
fn trim_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Runs every rule against `draft`. Failures keep rule order; nothing short-circuits.
pub fn validate<F: NamedField>(
    draft: &FieldDraft,
    existing: &[F],
    config: &EditorConfig,
) -> Vec<ValidationError> {
    let checks = [
        (
            ValidationError::UniqueName,
            is_unique_name(&draft.name, existing, config.name_comparison),
        ),
        (
            ValidationError::NameFormat,
            is_identifier_format(&draft.name),
        ),
        (ValidationError::RequiredName, is_present(&draft.name)),
        (
            ValidationError::NameLength,
            is_identifier_length(&draft.name, config.max_identifier_length),
        ),
        (ValidationError::RequiredType, draft.data_type.is_some()),
    ];
    checks
        .into_iter()
        .filter(|(_, valid)| !valid)
        .map(|(error, _)| error)
        .collect()
}

pub fn is_unique_name<F: NamedField>(
    name: &str,
    existing: &[F],
    comparison: NameComparison,
) -> bool {
    match comparison {
        NameComparison::Exact => !existing.iter().any(|field| field.name() == name),
        NameComparison::SnakeCase => {
            let candidate = snake_case(name);
            !existing
                .iter()
                .any(|field| snake_case(field.name()) == candidate)
        }
    }
}

pub fn is_identifier_format(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

pub fn is_present(value: &str) -> bool {
    !trim_name(value).is_empty()
}

pub fn is_identifier_length(name: &str, max: usize) -> bool {
    snake_case(name).chars().count() <= max
}

pub fn snake_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataType, ExistingField};

    fn draft(name: &str) -> FieldDraft {
        FieldDraft::empty(DataType::String).with_name(name)
    }

    fn no_fields() -> Vec<ExistingField> {
        Vec::new()
    }

    #[test]
    fn accepts_well_formed_draft() {
        let existing = vec![ExistingField::named("id")];
        let errors = validate(&draft("Created At"), &existing, &EditorConfig::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn leading_digit_and_missing_type_are_both_reported() {
        let field = format(&draft(" 1abc ").with_type(None));
        let errors = validate(&field, &no_fields(), &EditorConfig::default());
        assert_eq!(
            errors,
            vec![ValidationError::NameFormat, ValidationError::RequiredType]
        );
    }

    #[test]
    fn duplicate_name_is_the_only_violation() {
        let existing = vec![ExistingField::named("Age")];
        let field = draft("Age").with_type(Some(DataType::Number));
        let errors = validate(&field, &existing, &EditorConfig::default());
        assert_eq!(errors, vec![ValidationError::UniqueName]);
    }

    #[test]
    fn exact_comparison_is_case_sensitive() {
        let existing = vec![ExistingField::named("Age")];
        let errors = validate(&draft("age"), &existing, &EditorConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn snake_case_comparison_catches_spelling_variants() {
        let existing = vec![ExistingField::named("created_at")];
        let config = EditorConfig::default().with_name_comparison(NameComparison::SnakeCase);
        let errors = validate(&draft("Created At"), &existing, &config);
        assert_eq!(errors, vec![ValidationError::UniqueName]);
    }

    #[test]
    fn blank_name_only_fails_required() {
        let config = EditorConfig::default();
        assert_eq!(
            validate(&draft(""), &no_fields(), &config),
            vec![ValidationError::RequiredName]
        );
        assert_eq!(
            validate(&draft("   "), &no_fields(), &config),
            vec![ValidationError::RequiredName]
        );
    }

    #[test]
    fn identifier_grammar() {
        assert!(is_identifier_format("user_name"));
        assert!(is_identifier_format("$price"));
        assert!(is_identifier_format("First Name 2"));
        assert!(is_identifier_format("_private"));
        assert!(!is_identifier_format("2fast"));
        assert!(!is_identifier_format("e-mail"));
        assert!(!is_identifier_format("naïve"));
    }

    #[test]
    fn length_is_measured_on_snake_case() {
        let config = EditorConfig::default().with_max_identifier_length(10);
        // "FirstName" is 9 characters but "first_name" is 10.
        assert!(validate(&draft("FirstName"), &no_fields(), &config).is_empty());
        // "FirstNameX" is 10 characters but "first_name_x" is 12.
        assert_eq!(
            validate(&draft("FirstNameX"), &no_fields(), &config),
            vec![ValidationError::NameLength]
        );
    }

    #[test]
    fn reports_every_violation_in_rule_order() {
        let existing = vec![ExistingField::named("9 lives and then some more")];
        let config = EditorConfig::default().with_max_identifier_length(5);
        let field = draft("9 lives and then some more").with_type(None);
        assert_eq!(
            validate(&field, &existing, &config),
            vec![
                ValidationError::UniqueName,
                ValidationError::NameFormat,
                ValidationError::NameLength,
                ValidationError::RequiredType,
            ]
        );
    }

    #[test]
    fn format_strips_byte_order_marks() {
        let formatted = format(&draft("\u{FEFF} abc\u{FEFF}"));
        assert_eq!(formatted.name, "abc");
        assert!(validate::<ExistingField>(&formatted, &[], &EditorConfig::default()).is_empty());
        assert!(!is_present("\u{FEFF}\t"));
    }

    #[test]
    fn format_trims_only_the_name() {
        let field = draft("  total  ").with_unique(true);
        let formatted = format(&field);
        assert_eq!(formatted.name, "total");
        assert!(formatted.unique);
        assert_eq!(formatted.data_type, Some(DataType::String));
        assert_eq!(field.name, "  total  ");
    }
}
