use super::*;

// =============================================================
// Name validation
// =============================================================

#[test]
fn name_accepts_alphabetic_with_spaces() {
    assert_eq!(validate_name("Ann Smith"), None);
}

#[test]
fn name_rejects_empty() {
    assert_eq!(validate_name("   "), Some("Full Name is required".to_owned()));
}

#[test]
fn name_rejects_too_short() {
    assert!(validate_name("Al").is_some());
}

#[test]
fn name_rejects_too_long() {
    let long = "a".repeat(41);
    assert!(validate_name(&long).is_some());
}

#[test]
fn name_rejects_digits_and_punctuation() {
    assert_eq!(
        validate_name("Ann99"),
        Some("Only alphabets and spaces allowed".to_owned())
    );
    assert!(validate_name("Ann-Marie").is_some());
}

// =============================================================
// Email validation
// =============================================================

#[test]
fn email_accepts_plain_address() {
    assert_eq!(validate_email("ann@example.com"), None);
}

#[test]
fn email_rejects_missing_at() {
    assert_eq!(
        validate_email("ann.example.com"),
        Some("Invalid email format".to_owned())
    );
}

#[test]
fn email_rejects_undotted_domain() {
    assert!(validate_email("ann@localhost").is_some());
}

#[test]
fn email_rejects_empty_local_part() {
    assert!(validate_email("@example.com").is_some());
}

#[test]
fn email_rejects_empty() {
    assert_eq!(validate_email(""), Some("Email is required".to_owned()));
}

// =============================================================
// Password validation
// =============================================================

#[test]
fn password_accepts_at_minimum_length() {
    assert_eq!(validate_password("secret", 6), None);
}

#[test]
fn password_rejects_below_minimum() {
    assert_eq!(
        validate_password("short", 8),
        Some("Password must be at least 8 characters".to_owned())
    );
}

#[test]
fn password_rejects_empty() {
    assert_eq!(
        validate_password("", 6),
        Some("Password is required".to_owned())
    );
}

// =============================================================
// Course field validation
// =============================================================

#[test]
fn course_title_requires_five_chars() {
    assert!(validate_course_title("Rust").is_some());
    assert_eq!(validate_course_title("Rust 101"), None);
}

#[test]
fn course_description_requires_two_chars() {
    assert!(validate_course_description("x").is_some());
    assert_eq!(validate_course_description("ok"), None);
}

#[test]
fn instructor_requires_two_chars() {
    assert!(validate_instructor("J").is_some());
    assert_eq!(validate_instructor("Jane Smith"), None);
}

#[test]
fn duration_requires_non_empty() {
    assert!(validate_duration(" ").is_some());
    assert_eq!(validate_duration("8 weeks"), None);
}

#[test]
fn category_requires_selection() {
    assert_eq!(
        validate_category(""),
        Some("Category is required".to_owned())
    );
    assert_eq!(validate_category("Web Development"), None);
}

#[test]
fn image_url_requires_http_scheme() {
    assert!(validate_image_url("ftp://example.com/a.png").is_some());
    assert!(validate_image_url("").is_some());
    assert_eq!(validate_image_url("https://example.com/a.png"), None);
}
