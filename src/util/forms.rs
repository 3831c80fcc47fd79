//! Field validators for the sign-in, sign-up, and course forms.
//!
//! Each validator returns `None` when the value is acceptable, or a message
//! suitable for inline display next to the field. Validation runs on submit
//! before any network call.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Validate a full name: 4-40 characters, alphabetic and spaces only.
pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Full Name is required".to_owned());
    }
    if trimmed.chars().count() < 4 {
        return Some("Full Name must be at least 4 characters".to_owned());
    }
    if trimmed.chars().count() > 40 {
        return Some("Full Name cannot exceed 40 characters".to_owned());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Some("Only alphabets and spaces allowed".to_owned());
    }
    None
}

/// Validate an email address shape: one `@` with a dotted domain.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_owned());
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Some("Invalid email format".to_owned());
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || trimmed.contains(char::is_whitespace)
    {
        return Some("Invalid email format".to_owned());
    }
    None
}

/// Validate a password against a minimum length. Sign-in accepts 6
/// characters; sign-up requires 8.
pub fn validate_password(password: &str, min_len: usize) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_owned());
    }
    if password.chars().count() < min_len {
        return Some(format!("Password must be at least {min_len} characters"));
    }
    None
}

/// Validate a course title: at least 5 characters.
pub fn validate_course_title(title: &str) -> Option<String> {
    min_chars(title, 5, "Title")
}

/// Validate a course description: at least 2 characters.
pub fn validate_course_description(description: &str) -> Option<String> {
    min_chars(description, 2, "Description")
}

/// Validate an instructor name: at least 2 characters.
pub fn validate_instructor(instructor: &str) -> Option<String> {
    min_chars(instructor, 2, "Instructor")
}

/// Validate a course duration: non-empty.
pub fn validate_duration(duration: &str) -> Option<String> {
    if duration.trim().is_empty() {
        return Some("Please enter the course duration".to_owned());
    }
    None
}

/// Validate the category selection: non-empty.
pub fn validate_category(category: &str) -> Option<String> {
    if category.trim().is_empty() {
        return Some("Category is required".to_owned());
    }
    None
}

/// Validate a course image URL: non-empty and http(s).
pub fn validate_image_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Some("Image is required".to_owned());
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Some("Image must be an http(s) URL".to_owned());
    }
    None
}

fn min_chars(value: &str, min: usize, label: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{label} is required"));
    }
    if trimmed.chars().count() < min {
        return Some(format!("{label} must be at least {min} characters"));
    }
    None
}
