use super::*;

const MAP: CategoryMap = CategoryMap::new(&[
    ("AI", &["ai", "autonomous"]),
    ("DeFi", &["defi", "swap", "lending"]),
    ("Rust", &[]),
]);

#[test]
fn relevant_returns_mapped_substrings() {
    assert_eq!(MAP.relevant("AI"), &["ai", "autonomous"]);
    assert_eq!(MAP.relevant("DeFi"), &["defi", "swap", "lending"]);
}

#[test]
fn relevant_is_empty_for_unmapped_label() {
    assert!(MAP.relevant("Gaming").is_empty());
    assert!(MAP.relevant("").is_empty());
}

#[test]
fn relevant_lookup_is_exact() {
    assert!(MAP.relevant("ai").is_empty());
    assert!(MAP.relevant("AI ").is_empty());
}

#[test]
fn labels_keep_declaration_order() {
    assert_eq!(MAP.labels().collect::<Vec<_>>(), vec!["AI", "DeFi", "Rust"]);
}

#[test]
fn label_with_empty_set_is_still_listed() {
    assert!(MAP.labels().any(|label| label == "Rust"));
    assert!(MAP.relevant("Rust").is_empty());
    assert!(!MAP.labels().any(|label| label == "Go"));
}

#[test]
fn empty_map_has_no_labels() {
    let empty = CategoryMap::new(&[]);
    assert_eq!(empty.labels().count(), 0);
    assert!(empty.relevant("AI").is_empty());
}
