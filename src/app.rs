//! Application state and core logic

use crate::analytics::{EventSink, HttpSink, LogSink};
use crate::config::KioskConfig;
use crate::notify::Notifier;
use crate::state::{AppState, Form, View};
use crate::submit::{SubmissionPayload, SubmitController};
use crate::transport::{HttpTransport, SubmissionTransport};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::oneshot;

/// A spawned submission attempt awaiting its transport result. The event
/// loop keeps drawing (and the busy send control stays visible) until the
/// task resolves and [`App::tick`] completes the attempt.
struct InFlight {
    payload: SubmissionPayload,
    rx: oneshot::Receiver<Result<()>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// HTTP transport for lead submission
    pub transport: HttpTransport,
    /// Conversion event sink
    analytics: Box<dyn EventSink>,
    /// Submission state machine
    pub controller: SubmitController,
    /// The single notification slot
    pub notifier: Notifier,
    /// The submission currently in flight, if any
    in_flight: Option<InFlight>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: KioskConfig) -> Self {
        let transport = HttpTransport::new(config.endpoint);
        let analytics: Box<dyn EventSink> = match config.analytics_endpoint {
            Some(endpoint) => Box::new(HttpSink::new(endpoint)),
            None => Box::new(LogSink),
        };

        let mut state = AppState::default();
        state.start_counters();

        Self {
            state,
            transport,
            analytics,
            controller: SubmitController::new(),
            notifier: Notifier::default(),
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping: expire the notification window and complete
    /// a resolved submission
    pub fn tick(&mut self) {
        if self.notifier.tick() {
            self.controller.acknowledge();
        }
        self.poll_submission();
    }

    /// Complete the in-flight submission once its task has resolved
    fn poll_submission(&mut self) {
        let result = match &mut self.in_flight {
            None => return,
            Some(in_flight) => match in_flight.rx.try_recv() {
                Err(oneshot::error::TryRecvError::Empty) => return,
                Ok(result) => result,
                Err(oneshot::error::TryRecvError::Closed) => {
                    Err(anyhow!("submission task dropped before resolving"))
                }
            },
        };

        if let Some(InFlight { payload, .. }) = self.in_flight.take() {
            let outcome = self.controller.finish(
                &mut self.state.contact_form,
                &mut self.notifier,
                &payload,
                self.analytics.as_ref(),
                result,
            );
            if let Err(err) = outcome {
                tracing::debug!("submission attempt failed: {err}");
            }
        }
    }

    /// Dismiss the visible notification and settle the controller
    fn dismiss_notification(&mut self) {
        self.notifier.dismiss();
        self.controller.acknowledge();
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Esc closes a visible toast before anything else
        if key.code == KeyCode::Esc && self.notifier.is_visible() {
            self.dismiss_notification();
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Contact => self.handle_contact_key(key),
        }
        Ok(())
    }

    /// Handle keys on the home screen
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') | KeyCode::Tab | KeyCode::Enter => {
                self.state.navigate_to(View::Contact);
            }
            _ => {}
        }
    }

    /// Handle keys in the contact form view
    fn handle_contact_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.contact_form;
        let on_buttons_row = form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => {
                // Leaving a field re-validates it
                form.validate_field(form.active_field());
                form.next_field();
            }
            KeyCode::BackTab => {
                form.validate_field(form.active_field());
                form.prev_field();
            }
            KeyCode::Left | KeyCode::Up if on_buttons_row => form.prev_button(),
            KeyCode::Right | KeyCode::Down if on_buttons_row => form.next_button(),
            // Enter on the buttons row triggers the selected button
            // Button order: 0=Cancel, 1=Send
            KeyCode::Enter if on_buttons_row => match form.selected_button {
                0 => self.state.navigate_to(View::Home),
                _ => self.submit_contact(),
            },
            // Keyboard shortcut (works from any field)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact();
            }
            KeyCode::Esc => self.state.navigate_to(View::Home),
            // Form field input
            KeyCode::Char(c) if !on_buttons_row => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_buttons_row => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Enter if !on_buttons_row => {
                // Enter in the message field adds a newline
                if let Some(field) = form.get_active_field_mut() {
                    if field.is_multiline {
                        field.push_char('\n');
                    }
                }
            }
            _ => {}
        }
    }

    /// Start one submission attempt. The transport call runs on its own
    /// task so the event loop stays live and the disabled, relabeled send
    /// control is rendered before the call resolves; [`Self::tick`] picks
    /// up the result. Validation and in-flight rejections are already
    /// surfaced as notifications, so they are only logged here.
    fn submit_contact(&mut self) {
        let payload = match self
            .controller
            .begin(&mut self.state.contact_form, &mut self.notifier)
        {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!("submission attempt not started: {err}");
                return;
            }
        };

        let transport = self.transport.clone();
        let task_payload = payload.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(transport.submit(&task_payload).await);
        });

        self.in_flight = Some(InFlight { payload, rx });
    }
}
