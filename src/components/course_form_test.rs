use super::*;

// =============================================================
// List entry helpers feeding the prerequisite/objective editor
// =============================================================

#[test]
fn entries_seeds_one_blank_input_for_empty_list() {
    let seeded = entries(Vec::new());
    assert_eq!(seeded.len(), 1);
}

#[test]
fn entries_keeps_existing_values_in_order() {
    let seeded = entries(vec!["HTML".to_owned(), "CSS".to_owned()]);
    assert_eq!(seeded.len(), 2);
    assert_eq!(seeded[0].get_untracked(), "HTML");
    assert_eq!(seeded[1].get_untracked(), "CSS");
}

#[test]
fn collect_drops_blank_and_whitespace_entries() {
    let seeded = entries(vec![
        "HTML".to_owned(),
        "   ".to_owned(),
        String::new(),
        " CSS ".to_owned(),
    ]);
    assert_eq!(
        collect(&seeded),
        vec!["HTML".to_owned(), "CSS".to_owned()]
    );
}

#[test]
fn collect_of_seeded_blank_list_is_empty() {
    let seeded = entries(Vec::new());
    assert!(collect(&seeded).is_empty());
}
