use super::*;

#[test]
fn default_is_idle() {
    let state = ContactFormState::default();
    assert!(!state.submitting);
    assert!(!state.sent);
    assert_eq!(state.button_label(), "Send Message");
}

#[test]
fn begin_marks_submitting() {
    let mut state = ContactFormState::default();
    assert!(state.begin());
    assert!(state.submitting);
    assert_eq!(state.button_label(), "Sending...");
}

#[test]
fn begin_while_submitting_is_ignored() {
    let mut state = ContactFormState::default();
    assert!(state.begin());
    assert!(!state.begin());
    assert!(state.submitting);
}

#[test]
fn complete_always_succeeds() {
    let mut state = ContactFormState::default();
    state.begin();
    state.complete();
    assert!(!state.submitting);
    assert!(state.sent);
}

#[test]
fn new_submission_clears_previous_notice() {
    let mut state = ContactFormState::default();
    state.begin();
    state.complete();
    assert!(state.begin());
    assert!(!state.sent);
    state.complete();
    state.dismiss();
    assert!(!state.sent);
}
