//! Submission controller
//!
//! Drives one contact-form submission attempt: validation, the busy window
//! around the transport call, and the resulting notification. At most one
//! attempt is in flight at a time; the controller enforces this with an
//! explicit state check rather than relying on the UI disabling the send
//! control.

use crate::analytics::EventSink;
use crate::notify::{Notifier, Severity};
use crate::state::ContactForm;
use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;

/// Notification texts for the three submission outcomes
const MSG_FORM_INVALID: &str = "Please complete all required fields correctly.";
const MSG_SENT: &str = "Message sent! We will be in touch soon.";
const MSG_SEND_FAILED: &str = "Failed to send your message. Please try again.";

/// Placeholders for optional inputs left empty
const PLACEHOLDER_PHONE: &str = "not provided";
const PLACEHOLDER_COUNT: &str = "not specified";
const PLACEHOLDER_MESSAGE: &str = "no additional message";

/// Conversion event emitted after a successful submission
pub const EVENT_FORM_SUBMITTED: &str = "contact_form_submitted";

/// The controller's UI state machine. Exactly one state holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// Why a submission attempt did not end in success. `Validation` and
/// `Transport` surface to the user as the same error toast; the distinction
/// exists for diagnostics only.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form validation failed")]
    Validation,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("submission transport failed")]
    Transport(#[source] anyhow::Error),
}

/// Wire payload for the submission endpoint. All fields are strings; empty
/// optional inputs are replaced with fixed placeholders.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub profession: String,
    pub count: String,
    pub message: String,
    pub date: String,
    pub time: String,
}

impl SubmissionPayload {
    /// Snapshot the form's current values, stamped with the local
    /// submission date and time
    pub fn from_form(form: &ContactForm) -> Self {
        let now = Local::now();
        Self {
            name: form.name.trimmed().to_string(),
            email: form.email.trimmed().to_string(),
            phone: or_placeholder(form.phone.trimmed(), PLACEHOLDER_PHONE),
            profession: form.profession.trimmed().to_string(),
            count: or_placeholder(form.athlete_count.trimmed(), PLACEHOLDER_COUNT),
            message: or_placeholder(form.message.trimmed(), PLACEHOLDER_MESSAGE),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
        }
    }

    /// The analytics view of the payload
    pub fn to_event_fields(&self) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
            ("phone".to_string(), self.phone.clone()),
            ("profession".to_string(), self.profession.clone()),
            ("count".to_string(), self.count.clone()),
            ("message".to_string(), self.message.clone()),
            ("date".to_string(), self.date.clone()),
            ("time".to_string(), self.time.clone()),
        ])
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// State machine driving a single submission attempt at a time
#[derive(Debug, Default)]
pub struct SubmitController {
    state: SubmissionState,
}

impl SubmitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Called when the outcome notification is dismissed; returns a
    /// terminal state to `Idle`
    pub fn acknowledge(&mut self) {
        if matches!(self.state, SubmissionState::Success | SubmissionState::Failed) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validate the form and enter the busy window. On success the form's
    /// send control is disabled and a payload snapshot is returned; the
    /// caller must follow up with [`finish`](Self::finish) regardless of
    /// the transport outcome.
    pub fn begin(
        &mut self,
        form: &mut ContactForm,
        notifier: &mut Notifier,
    ) -> Result<SubmissionPayload, SubmitError> {
        if self.is_submitting() {
            tracing::warn!("submit requested while a submission is in flight; ignoring");
            return Err(SubmitError::InFlight);
        }

        self.state = SubmissionState::Validating;
        if !form.validate() {
            tracing::debug!("form validation failed; no transport call made");
            self.state = SubmissionState::Failed;
            notifier.show(MSG_FORM_INVALID, Severity::Error);
            return Err(SubmitError::Validation);
        }

        // Busy window opens before the call is issued
        form.set_busy(true);
        self.state = SubmissionState::Submitting;
        Ok(SubmissionPayload::from_form(form))
    }

    /// Close the busy window and surface the outcome. The send control is
    /// re-enabled unconditionally, before the notification is shown.
    pub fn finish(
        &mut self,
        form: &mut ContactForm,
        notifier: &mut Notifier,
        payload: &SubmissionPayload,
        analytics: &dyn EventSink,
        result: anyhow::Result<()>,
    ) -> Result<(), SubmitError> {
        form.set_busy(false);

        match result {
            Ok(()) => {
                self.state = SubmissionState::Success;
                notifier.show(MSG_SENT, Severity::Success);
                form.clear();
                analytics.record(EVENT_FORM_SUBMITTED, payload.to_event_fields());
                Ok(())
            }
            Err(err) => {
                tracing::error!("lead submission failed: {err:#}");
                self.state = SubmissionState::Failed;
                notifier.show(MSG_SEND_FAILED, Severity::Error);
                Err(SubmitError::Transport(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MockEventSink;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.value = "Ana García".to_string();
        form.email.value = "ana@example.com".to_string();
        form.profession.value = "personal trainer".to_string();
        form
    }

    fn quiet_sink() -> MockEventSink {
        let mut sink = MockEventSink::new();
        sink.expect_record().times(0..).return_const(());
        sink
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_snapshot_trims_values() {
            let mut form = valid_form();
            form.name.value = "  Ana  ".to_string();
            let payload = SubmissionPayload::from_form(&form);
            assert_eq!(payload.name, "Ana");
            assert_eq!(payload.email, "ana@example.com");
        }

        #[test]
        fn test_empty_optionals_get_placeholders() {
            let payload = SubmissionPayload::from_form(&valid_form());
            assert_eq!(payload.phone, "not provided");
            assert_eq!(payload.count, "not specified");
            assert_eq!(payload.message, "no additional message");
        }

        #[test]
        fn test_filled_optionals_are_kept() {
            let mut form = valid_form();
            form.phone.value = "+34 600 123 456".to_string();
            form.message.value = "Hello there".to_string();
            let payload = SubmissionPayload::from_form(&form);
            assert_eq!(payload.phone, "+34 600 123 456");
            assert_eq!(payload.message, "Hello there");
        }

        #[test]
        fn test_event_fields_cover_full_shape() {
            let fields = SubmissionPayload::from_form(&valid_form()).to_event_fields();
            for key in ["name", "email", "phone", "profession", "count", "message", "date", "time"]
            {
                assert!(fields.contains_key(key), "missing {key}");
            }
            assert_eq!(fields.len(), 8);
        }

        #[test]
        fn test_serializes_to_flat_json_object() {
            let payload = SubmissionPayload::from_form(&valid_form());
            let json = serde_json::to_value(&payload).unwrap();
            assert_eq!(json["name"], "Ana García");
            assert!(json.as_object().unwrap().values().all(|v| v.is_string()));
        }
    }

    mod state_machine {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_enters_submitting_and_disables_send() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();

            let payload = controller.begin(&mut form, &mut notifier);

            assert!(payload.is_ok());
            assert_eq!(controller.state(), SubmissionState::Submitting);
            assert!(form.is_busy());
            assert!(!notifier.is_visible());
        }

        #[test]
        fn test_begin_rejects_invalid_form_without_busy_window() {
            let mut controller = SubmitController::new();
            let mut form = ContactForm::new();
            let mut notifier = Notifier::default();

            let result = controller.begin(&mut form, &mut notifier);

            assert!(matches!(result, Err(SubmitError::Validation)));
            assert_eq!(controller.state(), SubmissionState::Failed);
            assert!(!form.is_busy());
            let toast = notifier.current().unwrap();
            assert_eq!(toast.text, MSG_FORM_INVALID);
            assert_eq!(toast.severity, Severity::Error);
        }

        #[test]
        fn test_begin_while_submitting_is_rejected() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();

            controller.begin(&mut form, &mut notifier).unwrap();
            let second = controller.begin(&mut form, &mut notifier);

            assert!(matches!(second, Err(SubmitError::InFlight)));
            // The in-flight attempt is untouched
            assert_eq!(controller.state(), SubmissionState::Submitting);
            assert!(form.is_busy());
        }

        #[test]
        fn test_finish_success_reenables_clears_and_notifies() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();
            let mut sink = MockEventSink::new();
            sink.expect_record()
                .withf(|event, fields| event == EVENT_FORM_SUBMITTED && fields.len() == 8)
                .times(1)
                .return_const(());

            let payload = controller.begin(&mut form, &mut notifier).unwrap();
            let outcome = controller.finish(&mut form, &mut notifier, &payload, &sink, Ok(()));

            assert!(outcome.is_ok());
            assert_eq!(controller.state(), SubmissionState::Success);
            assert!(!form.is_busy());
            assert!(form.fields().all(|f| f.value.is_empty()));
            let toast = notifier.current().unwrap();
            assert_eq!(toast.severity, Severity::Success);
        }

        #[test]
        fn test_finish_failure_retains_form_and_notifies_error() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();
            let sink = quiet_sink();

            let payload = controller.begin(&mut form, &mut notifier).unwrap();
            let outcome = controller.finish(
                &mut form,
                &mut notifier,
                &payload,
                &sink,
                Err(anyhow!("connection refused")),
            );

            assert!(matches!(outcome, Err(SubmitError::Transport(_))));
            assert_eq!(controller.state(), SubmissionState::Failed);
            assert!(!form.is_busy());
            assert_eq!(form.name.trimmed(), "Ana García"); // retained
            let toast = notifier.current().unwrap();
            assert_eq!(toast.text, MSG_SEND_FAILED);
            assert_eq!(toast.severity, Severity::Error);
        }

        #[test]
        fn test_acknowledge_returns_terminal_states_to_idle() {
            let mut controller = SubmitController::new();
            let mut form = ContactForm::new();
            let mut notifier = Notifier::default();

            let _ = controller.begin(&mut form, &mut notifier);
            assert_eq!(controller.state(), SubmissionState::Failed);
            controller.acknowledge();
            assert_eq!(controller.state(), SubmissionState::Idle);

            // Acknowledge while idle is a no-op
            controller.acknowledge();
            assert_eq!(controller.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_new_submission_leaves_terminal_state() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();

            // Fail once via validation
            form.email.value = "bad".to_string();
            let _ = controller.begin(&mut form, &mut notifier);
            assert_eq!(controller.state(), SubmissionState::Failed);

            // A corrected resubmission proceeds from the terminal state
            form.email.value = "ana@example.com".to_string();
            assert!(controller.begin(&mut form, &mut notifier).is_ok());
            assert_eq!(controller.state(), SubmissionState::Submitting);
        }
    }

    mod round_trip {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::transport::{MockSubmissionTransport, SubmissionTransport};
        use mockall::predicate;

        #[tokio::test]
        async fn test_successful_attempt_calls_transport_once() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();
            let mut sink = MockEventSink::new();
            sink.expect_record()
                .with(predicate::eq(EVENT_FORM_SUBMITTED), predicate::always())
                .times(1)
                .return_const(());
            let mut transport = MockSubmissionTransport::new();
            transport.expect_submit().times(1).returning(|_| Ok(()));

            let payload = controller.begin(&mut form, &mut notifier).unwrap();
            let result = transport.submit(&payload).await;
            let outcome = controller.finish(&mut form, &mut notifier, &payload, &sink, result);

            assert!(outcome.is_ok());
            assert_eq!(controller.state(), SubmissionState::Success);
            assert!(!form.is_busy());
        }

        #[test]
        fn test_invalid_form_never_touches_transport() {
            let mut controller = SubmitController::new();
            let mut form = ContactForm::new();
            let mut notifier = Notifier::default();
            let mut transport = MockSubmissionTransport::new();
            transport.expect_submit().times(0);

            let outcome = controller.begin(&mut form, &mut notifier);

            assert!(matches!(outcome, Err(SubmitError::Validation)));
        }

        #[tokio::test]
        async fn test_transport_failure_surfaces_single_error_toast() {
            let mut controller = SubmitController::new();
            let mut form = valid_form();
            let mut notifier = Notifier::default();
            let mut sink = MockEventSink::new();
            sink.expect_record().times(0);
            let mut transport = MockSubmissionTransport::new();
            transport
                .expect_submit()
                .times(1)
                .returning(|_| Err(anyhow!("503 Service Unavailable")));

            let payload = controller.begin(&mut form, &mut notifier).unwrap();
            let result = transport.submit(&payload).await;
            let outcome = controller.finish(&mut form, &mut notifier, &payload, &sink, result);

            assert!(matches!(outcome, Err(SubmitError::Transport(_))));
            assert_eq!(notifier.current().unwrap().text, MSG_SEND_FAILED);
            // No retry: the transport was called exactly once (mock enforces)
        }
    }
}
