//! End-to-end validation of API-style payloads against a mixed
//! shorthand/verbose schema declaration.

use pretty_assertions::assert_eq;
use serde_json::json;
use shapecheck_validator::{ValidationError, Validator};

fn signup_validator() -> Validator {
    Validator::new(&json!({
        "username": {"type": "string", "required": true},
        "age": "number",
        "newsletter": "boolean",
        "joined": {"type": "date", "required": true},
        "role": {"type": "string", "enum": ["admin", "moderator", "member"]},
        "profile": {
            "display_name": {"type": "string", "required": true},
            "website": "string",
        },
        "contacts": ["string", {"type": "object", "child": {"email": {"type": "string", "required": true}}}],
    }))
    .expect("schema compiles")
}

fn failures(result: Result<(), ValidationError>) -> shapecheck_validator::AggregateError {
    match result.expect_err("expected validation to fail") {
        ValidationError::Aggregate(errors) => errors,
        ValidationError::Field(error) => panic!("expected aggregate, got {error:?}"),
    }
}

#[test]
fn valid_payload_passes() {
    let payload = json!({
        "username": "ada",
        "age": 36,
        "newsletter": false,
        "joined": "2024-03-01T09:30:00Z",
        "role": "member",
        "profile": {"display_name": "Ada L.", "website": "https://example.org"},
        "contacts": ["ops@example.org", {"email": "ada@example.org"}],
    });
    assert_eq!(signup_validator().validate(&payload), Ok(()));
}

#[test]
fn minimal_payload_passes_without_optional_fields() {
    let payload = json!({
        "username": "ada",
        "joined": "2024-03-01",
        "profile": {"display_name": "Ada"},
    });
    assert_eq!(signup_validator().validate(&payload), Ok(()));
}

#[test]
fn every_sibling_failure_is_reported_at_once() {
    let payload = json!({
        "username": "",
        "age": "thirty-six",
        "joined": "not a date",
        "role": "root",
        "profile": {"display_name": "Ada"},
    });

    let errors = failures(signup_validator().validate(&payload));
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("username"), Some("The field is required."));
    assert_eq!(errors.get("age"), Some("The field is not of the correct type."));
    assert_eq!(errors.get("joined"), Some("The field is not of the correct type."));
    assert_eq!(
        errors.get("role"),
        Some("The field can only be one of: admin, moderator, member.")
    );
}

#[test]
fn nested_failures_carry_dotted_paths() {
    let payload = json!({
        "username": "ada",
        "joined": "2024-03-01",
        "profile": {"website": 42},
    });

    let errors = failures(signup_validator().validate(&payload));
    assert_eq!(errors.get("profile.display_name"), Some("The field is required."));
    assert_eq!(
        errors.get("profile.website"),
        Some("The field is not of the correct type.")
    );
}

#[test]
fn unexpected_keys_are_rejected_by_name() {
    let payload = json!({
        "username": "ada",
        "joined": "2024-03-01",
        "profile": {"display_name": "Ada"},
        "shoe_size": 37,
    });

    let errors = failures(signup_validator().validate(&payload));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("shoe_size"), Some("The field is not expected."));
}

#[test]
fn sequence_elements_match_any_alternative() {
    let payload = json!({
        "username": "ada",
        "joined": "2024-03-01",
        "profile": {"display_name": "Ada"},
        "contacts": [{"email": "ada@example.org"}, "backup@example.org"],
    });
    assert_eq!(signup_validator().validate(&payload), Ok(()));
}

#[test]
fn unmatched_sequence_element_fails_at_its_index() {
    let payload = json!({
        "username": "ada",
        "joined": "2024-03-01",
        "profile": {"display_name": "Ada"},
        "contacts": ["ok@example.org", 41],
    });

    let errors = failures(signup_validator().validate(&payload));
    assert_eq!(
        errors.get("contacts[1]"),
        Some("The field is not of the correct type.")
    );
}

#[test]
fn nested_required_field_missing_reports_exact_path() {
    let validator = Validator::new(&json!({
        "firstLayer": {
            "name": {"type": "string", "required": true},
        },
    }))
    .unwrap();

    let errors = failures(validator.validate(&json!({"firstLayer": {}})));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("firstLayer.name"), Some("The field is required."));
}

#[test]
fn validation_is_pure_and_repeatable() {
    let validator = signup_validator();
    let payload = json!({"username": "ada"});

    let first = failures(validator.validate(&payload));
    let second = failures(validator.validate(&payload));
    assert_eq!(first, second);
}
