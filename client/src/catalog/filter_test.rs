use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: u32,
    title: &'static str,
    description: &'static str,
    tags: Vec<&'static str>,
    kind: Option<&'static str>,
}

impl CatalogItem for Item {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&str] {
        &self.tags
    }

    fn kind(&self) -> Option<&str> {
        self.kind
    }
}

fn item(id: u32, title: &'static str, tags: &[&'static str]) -> Item {
    Item { id, title, description: "", tags: tags.to_vec(), kind: None }
}

const AI_MAP: CategoryMap = CategoryMap::new(&[("AI", &["ai", "autonomous"])]);

const DEFI_MAP: CategoryMap = CategoryMap::new(&[
    ("AI", &["ai", "autonomous"]),
    ("DeFi", &["defi", "pay", "swap"]),
    ("Stacks", &["stacks", "clarity"]),
]);

fn payments() -> Vec<Item> {
    vec![
        item(1, "dualPay", &["stacks", "marketplace"]),
        item(2, "POSBasePay", &["base", "pos"]),
        item(3, "BatchPay", &["payroll", "stacks"]),
        item(4, "NEUR", &["ai", "base", "token"]),
    ]
}

fn ids<T: CatalogItem>(items: &[&T]) -> Vec<u32> {
    items.iter().map(|i| i.id()).collect()
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn category_filter_keeps_only_mapped_tag_matches() {
    let items = vec![item(1, "NEUR", &["ai", "base", "token"]), item(2, "dualPay", &["stacks", "marketplace"])];
    let result = filter(&items, "", "AI", &AI_MAP);
    assert_eq!(ids(&result), vec![1]);
}

#[test]
fn search_matches_title_substring() {
    let items = payments();
    let result = filter(&items, "pay", ALL_FILTER, &DEFI_MAP);
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn search_without_match_yields_empty() {
    let items = payments();
    assert!(filter(&items, "zzz-no-match", ALL_FILTER, &DEFI_MAP).is_empty());
}

#[test]
fn unmapped_label_without_kind_match_yields_empty() {
    let items = payments();
    assert!(filter(&items, "", "Defi-typo", &DEFI_MAP).is_empty());
}

// =============================================================
// Search predicate
// =============================================================

#[test]
fn search_is_case_insensitive() {
    let items = payments();
    assert_eq!(ids(&filter(&items, "PAY", ALL_FILTER, &DEFI_MAP)), vec![1, 2, 3]);
    assert_eq!(ids(&filter(&items, "neur", ALL_FILTER, &DEFI_MAP)), vec![4]);
}

#[test]
fn search_matches_description() {
    let mut items = payments();
    items[3].description = "Autonomous agent treasury";
    assert_eq!(ids(&filter(&items, "treasury", ALL_FILTER, &DEFI_MAP)), vec![4]);
}

#[test]
fn search_matches_any_tag() {
    let items = payments();
    assert_eq!(ids(&filter(&items, "market", ALL_FILTER, &DEFI_MAP)), vec![1]);
    assert_eq!(ids(&filter(&items, "base", ALL_FILTER, &DEFI_MAP)), vec![2, 4]);
}

#[test]
fn search_is_substring_not_word_match() {
    let items = vec![item(1, "Ledger", &["blockchain"]), item(2, "Other", &["web"])];
    assert_eq!(ids(&filter(&items, "ai", ALL_FILTER, &AI_MAP)), vec![1]);
}

#[test]
fn search_does_not_consult_kind() {
    let mut items = payments();
    items[0].kind = Some("Clarity");
    assert!(filter(&items, "clarity", ALL_FILTER, &DEFI_MAP).is_empty());
}

#[test]
fn matches_search_accepts_empty_needle() {
    let it = item(1, "x", &[]);
    assert!(matches_search(&it, ""));
}

// =============================================================
// Category predicate
// =============================================================

#[test]
fn all_label_accepts_everything() {
    let it = item(1, "x", &[]);
    assert!(matches_category(&it, ALL_FILTER, &DEFI_MAP));
}

#[test]
fn category_uses_tag_substrings() {
    let items = payments();
    // "pay" is a substring of "payroll"; tag matching is substring based.
    assert_eq!(ids(&filter(&items, "", "DeFi", &DEFI_MAP)), vec![3]);
    assert_eq!(ids(&filter(&items, "", "Stacks", &DEFI_MAP)), vec![1, 3]);
}

#[test]
fn category_ignores_title_for_tag_path() {
    let items = payments();
    // Titles contain "Pay" but only tags are consulted for mapped substrings.
    let result = filter(&items, "", "DeFi", &DEFI_MAP);
    assert!(!ids(&result).contains(&1));
    assert!(!ids(&result).contains(&2));
}

#[test]
fn category_matches_kind_case_insensitively() {
    let mut items = payments();
    items[1].kind = Some("TypeScript");
    items[2].kind = Some("Rust");
    assert_eq!(ids(&filter(&items, "", "typescript", &DEFI_MAP)), vec![2]);
    assert_eq!(ids(&filter(&items, "", "RUST", &DEFI_MAP)), vec![3]);
}

#[test]
fn kind_path_works_for_unmapped_label() {
    let mut items = payments();
    items[0].kind = Some("Go");
    assert!(DEFI_MAP.relevant("Go").is_empty());
    assert!(!DEFI_MAP.labels().any(|label| label == "Go"));
    assert_eq!(ids(&filter(&items, "", "Go", &DEFI_MAP)), vec![1]);
}

#[test]
fn kind_match_is_substring() {
    let mut it = item(1, "x", &[]);
    it.kind = Some("TypeScript");
    assert!(matches_category(&it, "Script", &DEFI_MAP));
    assert!(!matches_category(&it, "Python", &DEFI_MAP));
}

#[test]
fn mapped_substrings_compare_case_insensitively() {
    const UPPER: CategoryMap = CategoryMap::new(&[("Edge", &["IoT"])]);
    let it = item(1, "x", &["iot"]);
    assert!(matches_category(&it, "Edge", &UPPER));
}

#[test]
fn search_and_category_must_both_hold() {
    let items = payments();
    assert_eq!(ids(&filter(&items, "batch", "Stacks", &DEFI_MAP)), vec![3]);
    assert!(filter(&items, "dual", "DeFi", &DEFI_MAP).is_empty());
}

// =============================================================
// Properties
// =============================================================

const SEARCHES: &[&str] = &["", "pay", "PAY", "a", "stacks", "base", "zzz", "n"];
const LABELS: &[&str] = &["All", "AI", "DeFi", "Stacks", "Unknown", ""];

#[test]
fn default_inputs_return_everything_in_order() {
    let items = payments();
    let result = filter(&items, "", ALL_FILTER, &DEFI_MAP);
    assert_eq!(result.len(), items.len());
    for (kept, original) in result.iter().zip(items.iter()) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn filter_is_deterministic_and_idempotent() {
    let items = payments();
    for search in SEARCHES {
        for label in LABELS {
            let first = filter(&items, search, label, &DEFI_MAP);
            let second = filter(&items, search, label, &DEFI_MAP);
            assert_eq!(first, second);

            let owned: Vec<Item> = first.iter().map(|i| (*i).clone()).collect();
            let again = filter(&owned, search, label, &DEFI_MAP);
            assert_eq!(ids(&again), ids(&first), "search={search:?} label={label:?}");
        }
    }
}

#[test]
fn results_are_ordered_subsets_without_duplicates() {
    let items = payments();
    for search in SEARCHES {
        for label in LABELS {
            let got = ids(&filter(&items, search, label, &DEFI_MAP));
            let mut positions = got
                .iter()
                .map(|id| items.iter().position(|i| i.id == *id))
                .collect::<Option<Vec<_>>>()
                .unwrap_or_default();
            assert_eq!(positions.len(), got.len());
            let sorted = positions.clone();
            positions.dedup();
            assert_eq!(positions, sorted);
            assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn every_search_result_contains_the_term() {
    let items = payments();
    for search in SEARCHES.iter().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        for it in filter(&items, search, ALL_FILTER, &DEFI_MAP) {
            let hit = it.title.to_lowercase().contains(&needle)
                || it.description.to_lowercase().contains(&needle)
                || it.tags.iter().any(|t| t.to_lowercase().contains(&needle));
            assert!(hit, "{} does not contain {needle}", it.title);
        }
    }
}

#[test]
fn every_category_result_matches_kind_or_mapped_tag() {
    let mut items = payments();
    items[0].kind = Some("Stacks Clarity");
    for label in LABELS.iter().filter(|l| **l != ALL_FILTER) {
        let lower = label.to_lowercase();
        let relevant = DEFI_MAP.relevant(label);
        for it in filter(&items, "", label, &DEFI_MAP) {
            let by_kind = it.kind.is_some_and(|k| k.to_lowercase().contains(&lower));
            let by_tag = it.tags.iter().any(|t| relevant.iter().any(|r| t.to_lowercase().contains(r)));
            assert!(by_kind || by_tag, "{} admitted under {label:?}", it.title);
        }
    }
}

#[test]
fn filtering_leaves_source_untouched() {
    let items = payments();
    let before = items.clone();
    let _kept = filter(&items, "pay", "Stacks", &DEFI_MAP);
    assert_eq!(items, before);
}

#[test]
fn empty_source_yields_empty_result() {
    let items: Vec<Item> = Vec::new();
    assert!(filter(&items, "", ALL_FILTER, &DEFI_MAP).is_empty());
}

// =============================================================
// Selector options
// =============================================================

#[test]
fn filter_labels_start_with_all() {
    assert_eq!(filter_labels(&DEFI_MAP), vec!["All", "AI", "DeFi", "Stacks"]);
    assert_eq!(filter_labels(&CategoryMap::new(&[])), vec!["All"]);
}

// =============================================================
// Keyed rendering
// =============================================================

#[test]
fn filtered_ids_are_unique_keys() {
    let items = payments();
    for label in filter_labels(&DEFI_MAP) {
        let mut keys = ids(&filter(&items, "", label, &DEFI_MAP));
        let len = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), len, "duplicate key under {label:?}");
    }
}

#[test]
fn source_index_is_stable_across_narrowing() {
    let items = payments();
    let all = filter(&items, "", ALL_FILTER, &DEFI_MAP);
    let narrowed = filter(&items, "batch", ALL_FILTER, &DEFI_MAP);
    assert_eq!(narrowed.len(), 1);

    let card = narrowed[0];
    let full_position = all.iter().position(|it| it.id == card.id).unwrap();
    assert_eq!(source_index(&items, card), full_position);
    assert_eq!(source_index(&items, card), 2);
}

#[test]
fn source_index_defaults_to_zero_for_foreign_item() {
    let items = payments();
    let stranger = item(99, "Stranger", &[]);
    assert_eq!(source_index(&items, &stranger), 0);
}
