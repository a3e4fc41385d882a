//! Site View State
//!
//! One store holds everything the page renders from: menu, theme,
//! header styling and the contact form. Event handlers mutate this
//! state, class and attribute bindings render it; components never
//! poke element styles directly. The transition logic lives here as
//! plain methods so it stays testable off the browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ContactPayload;
use crate::theme::Theme;
use crate::validate::{self, Field};

/// Header styling derived from scroll position and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderFx {
    /// Stronger drop shadow once the page is scrolled at all.
    pub scrolled: bool,
    /// Header translated off-screen while scrolling down.
    pub hidden: bool,
}

impl HeaderFx {
    const SHADOW_AT: f64 = 10.0;
    const HIDE_PAST: f64 = 100.0;

    /// Next header state for a scroll event from `last_y` to `y`.
    /// Hiding requires downward movement; scrolling up at any depth
    /// brings the header back.
    pub fn advance(last_y: f64, y: f64) -> Self {
        Self {
            scrolled: y > Self::SHADOW_AT,
            hidden: y > last_y && y > Self::HIDE_PAST,
        }
    }
}

/// Outcome of the last evaluation of a field, tracked separately from
/// the visible error so focus can hide the message without forgetting
/// the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// One contact form field: live value, last evaluation, visible error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub validity: Validity,
    pub error: Option<&'static str>,
}

impl FieldState {
    /// Re-evaluate against the field rule. Runs on blur and submit.
    pub fn evaluate(&mut self, field: Field) -> bool {
        match validate::check(field, &self.value) {
            None => {
                self.validity = Validity::Valid;
                self.error = None;
                true
            }
            Some(message) => {
                self.validity = Validity::Invalid;
                self.error = Some(message);
                false
            }
        }
    }

    /// Focus hides the message until the next evaluation.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Wrapper class for the form group. Error and success never show
    /// at the same time.
    pub fn css_class(&self) -> &'static str {
        if self.error.is_some() {
            "form-group error"
        } else if self.validity == Validity::Valid {
            "form-group success"
        } else {
            "form-group"
        }
    }
}

/// Submission lifecycle; the button is disabled while `Sending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Aggregate message under the form.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Monotonic id so a stale auto-dismiss timer cannot clear a newer
    /// banner.
    pub seq: u32,
}

/// Contact form: four fields plus the submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub name: FieldState,
    pub email: FieldState,
    pub subject: FieldState,
    pub message: FieldState,
    pub phase: SubmissionPhase,
    pub banner: Option<Banner>,
    banner_seq: u32,
}

impl ContactFormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Evaluate every field rule. All fields get their state refreshed
    /// even when an earlier one fails.
    pub fn evaluate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in Field::ALL {
            all_valid &= self.field_mut(field).evaluate(field);
        }
        all_valid
    }

    /// True while a submission is in flight; used to ignore re-entry.
    pub fn sending(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    pub fn begin_submit(&mut self) {
        self.phase = SubmissionPhase::Sending;
        self.banner = None;
    }

    /// Trimmed field values as the outgoing payload.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            subject: self.subject.value.trim().to_string(),
            message: self.message.value.trim().to_string(),
        }
    }

    pub fn show_banner(&mut self, kind: BannerKind, text: String) -> u32 {
        self.banner_seq += 1;
        self.banner = Some(Banner { kind, text, seq: self.banner_seq });
        self.banner_seq
    }

    /// Dismiss only when `seq` still matches the banner on display.
    pub fn dismiss_banner(&mut self, seq: u32) {
        if self.banner.as_ref().is_some_and(|banner| banner.seq == seq) {
            self.banner = None;
        }
    }

    /// Successful submission: success banner, fields reset to pristine,
    /// button re-enabled. Returns the banner seq for the auto-dismiss
    /// timer.
    pub fn apply_success(&mut self, text: String) -> u32 {
        self.phase = SubmissionPhase::Idle;
        for field in Field::ALL {
            *self.field_mut(field) = FieldState::default();
        }
        self.show_banner(BannerKind::Success, text)
    }

    /// Failed submission: error banner, entered values kept for retry,
    /// button re-enabled.
    pub fn apply_failure(&mut self, text: String) -> u32 {
        self.phase = SubmissionPhase::Idle;
        self.show_banner(BannerKind::Error, text)
    }
}

/// Everything the page renders from.
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    pub theme: Theme,
    pub menu_open: bool,
    pub header: HeaderFx,
    pub form: ContactFormState,
}

pub type SiteStore = Store<SiteState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.name.value = "Ada Lovelace".into();
        form.email.value = "ada@example.com".into();
        form.subject.value = "Engines".into();
        form.message.value = "A note about the analytical engine.".into();
        form
    }

    #[test]
    fn test_header_shadow_past_ten_px() {
        assert!(!HeaderFx::advance(0.0, 5.0).scrolled);
        assert!(HeaderFx::advance(0.0, 11.0).scrolled);
    }

    #[test]
    fn test_header_hides_only_scrolling_down_past_hundred() {
        assert!(HeaderFx::advance(150.0, 200.0).hidden);
        assert!(!HeaderFx::advance(200.0, 150.0).hidden, "scrolling up shows the header");
        assert!(!HeaderFx::advance(20.0, 80.0).hidden, "too shallow to hide");
    }

    #[test]
    fn test_field_never_shows_error_and_success_together() {
        let mut field = FieldState::default();
        assert_eq!(field.css_class(), "form-group");

        field.value = "x".into();
        field.evaluate(Field::Name);
        assert_eq!(field.css_class(), "form-group error");

        field.value = "Ada".into();
        field.evaluate(Field::Name);
        assert_eq!(field.css_class(), "form-group success");
    }

    #[test]
    fn test_focus_clears_message_but_not_validity() {
        let mut field = FieldState::default();
        field.evaluate(Field::Email);
        assert!(field.error.is_some());

        field.clear_error();
        assert!(field.error.is_none());
        assert_eq!(field.validity, Validity::Invalid);
        assert_eq!(field.css_class(), "form-group");
    }

    #[test]
    fn test_evaluate_all_flags_only_failing_fields() {
        let mut form = filled_form();
        form.name.value = "Al".into();
        form.email.value = "bad".into();
        form.subject.value = "Hi there".into();
        form.message.value = "A longer message body".into();

        assert!(!form.evaluate_all());
        assert!(form.name.error.is_none(), "two-char name passes");
        assert_eq!(form.email.error, Some("Please enter a valid email address"));
        assert!(form.subject.error.is_none());
        assert!(form.message.error.is_none());
    }

    #[test]
    fn test_payload_carries_trimmed_values() {
        let mut form = filled_form();
        form.name.value = "  Ada Lovelace  ".into();
        let payload = form.payload();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn test_success_resets_fields_and_reenables() {
        let mut form = filled_form();
        form.evaluate_all();
        form.begin_submit();
        assert!(form.sending());

        form.apply_success("sent".into());
        assert!(!form.sending());
        assert_eq!(form.name, FieldState::default());
        assert_eq!(form.message, FieldState::default());
        assert_eq!(form.banner.as_ref().map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn test_failure_keeps_entered_values() {
        let mut form = filled_form();
        form.begin_submit();
        form.apply_failure("no luck".into());
        assert!(!form.sending());
        assert_eq!(form.name.value, "Ada Lovelace");
        assert_eq!(form.message.value, "A note about the analytical engine.");
        assert_eq!(form.banner.as_ref().map(|b| b.kind), Some(BannerKind::Error));
    }

    #[test]
    fn test_stale_dismiss_cannot_clear_newer_banner() {
        let mut form = ContactFormState::default();
        let first = form.show_banner(BannerKind::Success, "one".into());
        let second = form.show_banner(BannerKind::Error, "two".into());

        form.dismiss_banner(first);
        assert!(form.banner.is_some(), "old timer must not clear the new banner");
        form.dismiss_banner(second);
        assert!(form.banner.is_none());
    }

    #[test]
    fn test_begin_submit_drops_previous_banner() {
        let mut form = filled_form();
        form.show_banner(BannerKind::Error, "old".into());
        form.begin_submit();
        assert!(form.banner.is_none());
    }
}
