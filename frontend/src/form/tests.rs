use super::*;
use dreams_shared::validate::{validate_email, validate_password_strict};

static SIGN_IN_SPECS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        label: "Email",
        input_type: "email",
        placeholder: "you@example.com",
        rule: Rule::Field(validate_email),
    },
    FieldSpec {
        name: "password",
        label: "Password",
        input_type: "password",
        placeholder: "",
        rule: Rule::Field(validate_password_strict),
    },
    FieldSpec {
        name: "confirmPassword",
        label: "Confirm Password",
        input_type: "password",
        placeholder: "",
        rule: Rule::Matches { other: "password" },
    },
];

fn draft() -> FormDraft {
    FormDraft::new(SIGN_IN_SPECS)
}

#[test]
fn test_invalid_email_blocks_submission() {
    let form = draft();
    form.input("email", "not-an-email".to_string());
    form.input("password", "Abcdefg1".to_string());
    form.input("confirmPassword", "Abcdefg1".to_string());

    assert!(!form.error("email").get_untracked().is_empty());
    assert!(!form.validate_all());
}

#[test]
fn test_untouched_fields_fail_at_submit() {
    let form = draft();
    // Only the email ever saw a change event; the rest sit at their
    // invalid initial values and must still block submission.
    form.input("email", "a@b.com".to_string());

    assert!(!form.validate_all());
    assert!(!form.error("password").get_untracked().is_empty());
    assert!(!form.error("confirmPassword").get_untracked().is_empty());
}

#[test]
fn test_confirm_mismatch_blocks_and_match_clears() {
    let form = draft();
    form.input("email", "a@b.com".to_string());
    form.input("password", "Abcdefg1".to_string());
    form.input("confirmPassword", "Different1".to_string());

    assert!(!form.validate_all());
    assert!(!form.error("confirmPassword").get_untracked().is_empty());

    form.input("confirmPassword", "Abcdefg1".to_string());
    assert!(form.validate_all());
    assert!(form.error("confirmPassword").get_untracked().is_empty());
}

#[test]
fn test_valid_draft_submits_and_resets() {
    let form = draft();
    form.input("email", "a@b.com".to_string());
    form.input("password", "Abcdefg1".to_string());
    form.input("confirmPassword", "Abcdefg1".to_string());

    assert!(form.validate_all());

    form.reset();
    assert!(form.value("email").get_untracked().is_empty());
    assert!(form.error("password").get_untracked().is_empty());
}

#[test]
fn test_per_keystroke_validation_updates_error() {
    let form = draft();
    form.input("password", "short".to_string());
    assert!(!form.error("password").get_untracked().is_empty());

    form.input("password", "Abcdefg1".to_string());
    assert!(form.error("password").get_untracked().is_empty());
}
