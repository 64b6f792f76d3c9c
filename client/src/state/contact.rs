//! Contact form submission state.
//!
//! Submission is simulated: the form waits a fixed delay and then always
//! reports success. Nothing leaves the browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Fixed wait before a submission reports success.
pub const SUBMIT_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub submitting: bool,
    pub sent: bool,
}

impl ContactFormState {
    /// Start a submission. Returns false when one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.sent = false;
        true
    }

    pub fn complete(&mut self) {
        self.submitting = false;
        self.sent = true;
    }

    pub fn dismiss(&mut self) {
        self.sent = false;
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Send Message" }
    }
}
