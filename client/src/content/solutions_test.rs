use super::*;
use crate::catalog::{ALL_FILTER, filter, filter_labels};

fn titles(items: &[&Solution]) -> Vec<&'static str> {
    items.iter().map(|s| s.title).collect()
}

#[test]
fn selector_options_list_all_then_labels() {
    assert_eq!(filter_labels(&CATEGORY_MAP), vec!["All", "AI", "Web3", "Privacy", "Edge", "Quantum"]);
}

#[test]
fn ai_label_matches_mapped_tags() {
    let result = filter(&SOLUTIONS, "", "AI", &CATEGORY_MAP);
    assert_eq!(
        titles(&result),
        vec!["Neural Interface Dashboard", "Edge ML Platform", "Voice AI Assistant SDK", "Federated Learning Framework"]
    );
}

#[test]
fn identity_counts_for_web3_and_privacy() {
    assert_eq!(titles(&filter(&SOLUTIONS, "", "Web3", &CATEGORY_MAP)), vec!["Decentralized Identity"]);
    assert_eq!(
        titles(&filter(&SOLUTIONS, "", "Privacy", &CATEGORY_MAP)),
        vec!["Decentralized Identity", "Federated Learning Framework"]
    );
}

#[test]
fn solutions_have_no_kind_path() {
    // Labels that exist only as words in titles never match without a mapping.
    assert!(filter(&SOLUTIONS, "", "Dashboard", &CATEGORY_MAP).is_empty());
}

#[test]
fn search_hits_descriptions() {
    let result = filter(&SOLUTIONS, "zero-knowledge", ALL_FILTER, &CATEGORY_MAP);
    assert_eq!(titles(&result), vec!["Decentralized Identity"]);
}

#[test]
fn status_labels_and_classes() {
    assert_eq!(SolutionStatus::Live.label(), "live");
    assert_eq!(SolutionStatus::Beta.label(), "beta");
    assert_eq!(SolutionStatus::Experiment.label(), "experiment");
    assert!(SolutionStatus::Beta.badge_class().ends_with("--beta"));
}

#[test]
fn ids_are_unique() {
    let mut ids: Vec<u32> = SOLUTIONS.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SOLUTIONS.len());
}
