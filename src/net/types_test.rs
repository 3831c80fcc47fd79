use super::*;

// =============================================================
// User wire format
// =============================================================

#[test]
fn user_deserializes_mongo_id_alias() {
    let u: User = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "name": "Ann",
        "email": "ann@example.com",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .expect("user");
    assert_eq!(u.id, "u1");
    assert_eq!(u.name, "Ann");
    assert_eq!(u.created_at, "2024-01-01T00:00:00Z");
    assert_eq!(u.avatar_url, None);
}

#[test]
fn user_round_trips_through_json() {
    let u = User {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        created_at: String::new(),
        avatar_url: Some("https://example.com/a.png".to_owned()),
    };
    let json = serde_json::to_string(&u).expect("serialize");
    let back: User = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, u);
}

#[test]
fn user_rejects_record_without_id() {
    let result = serde_json::from_value::<User>(serde_json::json!({"name": "Ann"}));
    assert!(result.is_err());
}

#[test]
fn user_defaults_missing_optional_fields() {
    let u: User = serde_json::from_value(serde_json::json!({"id": "u2"})).expect("user");
    assert_eq!(u.name, "");
    assert_eq!(u.email, "");
    assert_eq!(u.avatar_url, None);
}

// =============================================================
// Course wire format
// =============================================================

#[test]
fn course_deserializes_backend_fields() {
    let c: Course = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "title": "Full Stack Web Development",
        "description": "From zero to deployed.",
        "instructor": "Jane Smith",
        "duration": "8 weeks",
        "category": "Web Development",
        "image": "https://example.com/c.png",
        "price": 49.99,
        "prerequisites": ["HTML"],
        "learningObjective": ["Build a site"],
        "userId": "u1"
    }))
    .expect("course");
    assert_eq!(c.id, "c1");
    assert_eq!(c.learning_objective, vec!["Build a site".to_owned()]);
    assert_eq!(c.created_by.as_deref(), Some("u1"));
    assert_eq!(c.price, Some(49.99));
}

#[test]
fn course_tolerates_sparse_records() {
    let c: Course = serde_json::from_value(serde_json::json!({
        "_id": "c2",
        "title": "Untitled"
    }))
    .expect("course");
    assert_eq!(c.category, "");
    assert!(c.prerequisites.is_empty());
    assert_eq!(c.image, None);
    assert_eq!(c.created_by, None);
}

#[test]
fn course_input_skips_empty_lists() {
    let input = CourseInput {
        title: "Rust 101".to_owned(),
        ..CourseInput::default()
    };
    let value = serde_json::to_value(&input).expect("serialize");
    assert!(value.get("prerequisites").is_none());
    assert!(value.get("learningObjective").is_none());
    assert_eq!(value["title"], "Rust 101");
}

// =============================================================
// Category slugs
// =============================================================

#[test]
fn slugify_lowercases_and_dashes() {
    assert_eq!(slugify("Web Development"), "web-development");
    assert_eq!(slugify("  Data   Science "), "data-science");
}

#[test]
fn unslugify_restores_spaces() {
    assert_eq!(unslugify("web-development"), "web development");
}

#[test]
fn category_slug_matches_course_category_slug() {
    let cat = Category {
        id: "k1".to_owned(),
        title: "Web Development".to_owned(),
        description: String::new(),
    };
    let course: Course = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "title": "Full Stack",
        "category": "Web Development"
    }))
    .expect("course");
    assert_eq!(cat.slug(), course.category_slug());
}
