use super::*;

#[test]
fn test_email_accepts_plain_address() {
    assert_eq!(validate_email("a@b.com"), None);
    assert_eq!(validate_email("first.last@sub.domain.org"), None);
}

#[test]
fn test_email_rejects_bad_shapes() {
    assert!(validate_email("").is_some());
    assert!(validate_email("no-at-sign.com").is_some());
    assert!(validate_email("missing@tld").is_some());
    assert!(validate_email("@nolocal.com").is_some());
    assert!(validate_email("a@.com").is_some());
    assert!(validate_email("trailing@dot.").is_some());
    assert!(validate_email("has space@b.com").is_some());
}

#[test]
fn test_strict_password_requires_length_upper_digit() {
    // Too short
    assert!(validate_password_strict("Ab1").is_some());
    // No uppercase
    assert!(validate_password_strict("abcdefg1").is_some());
    // No digit
    assert!(validate_password_strict("Abcdefgh").is_some());
    // Empty
    assert!(validate_password_strict("").is_some());
    // All three satisfied
    assert_eq!(validate_password_strict("Abcdefg1"), None);
}

#[test]
fn test_min_password_only_checks_length() {
    assert!(validate_password_min("short1").is_some());
    // No uppercase or digit required here
    assert_eq!(validate_password_min("abcdefgh"), None);
}

#[test]
fn test_age_boundaries_are_inclusive() {
    assert!(validate_age("12").is_some());
    assert_eq!(validate_age("13"), None);
    assert_eq!(validate_age("120"), None);
    assert!(validate_age("121").is_some());
}

#[test]
fn test_age_rejects_non_numbers() {
    assert!(validate_age("").is_some());
    assert!(validate_age("abc").is_some());
}

#[test]
fn test_weight_and_height_ranges() {
    assert!(validate_weight("29.9").is_some());
    assert_eq!(validate_weight("30"), None);
    assert_eq!(validate_weight("300"), None);
    assert!(validate_weight("301").is_some());

    assert!(validate_height("99").is_some());
    assert_eq!(validate_height("100"), None);
    assert_eq!(validate_height("250"), None);
    assert!(validate_height("251").is_some());
}

#[test]
fn test_calories_and_duration_must_be_positive() {
    assert!(validate_calories("0").is_some());
    assert!(validate_calories("-5").is_some());
    assert!(validate_calories("").is_some());
    assert_eq!(validate_calories("450"), None);

    assert!(validate_duration("0").is_some());
    assert_eq!(validate_duration("45"), None);
}

#[test]
fn test_confirm_password_matches_current_value() {
    assert!(validate_confirm("Abcdefg1", "different").is_some());
    assert!(validate_confirm("Abcdefg1", "").is_some());
    assert_eq!(validate_confirm("Abcdefg1", "Abcdefg1"), None);
}

#[test]
fn test_phone_needs_ten_digits() {
    assert_eq!(validate_phone("(123) 456-7890"), None);
    assert_eq!(validate_phone("1234567890"), None);
    assert!(validate_phone("12345").is_some());
    assert!(validate_phone("").is_some());
}

#[test]
fn test_meal_rejects_blank() {
    assert!(validate_meal("   ").is_some());
    assert_eq!(validate_meal("Oatmeal"), None);
}
