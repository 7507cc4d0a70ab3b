//! Application state and key handling

use crate::controller::ContactController;
use crate::delivery::{Acknowledgement, DeliveryClientTrait, DeliveryError};
use crate::state::{RevealState, Spinner};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Window in which a second Ctrl+C quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

type DeliveryResult = Result<Acknowledgement, DeliveryError>;

/// Main application struct
pub struct App {
    /// Form state and submission logic
    pub controller: ContactController,
    /// Whether the app should quit
    quit: bool,
    /// Enter animation, dropped once it has finished
    pub reveal: Option<RevealState>,
    /// Submit button spinner, restarted for every send
    pub spinner: Spinner,
    /// Result of the send currently in flight
    pending: Option<oneshot::Receiver<DeliveryResult>>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn DeliveryClientTrait>) -> Self {
        Self {
            controller: ContactController::new(client),
            quit: false,
            reveal: Some(RevealState::new()),
            spinner: Spinner::new(),
            pending: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the enter animation is still playing
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Advance the enter animation, dropping it once complete
    pub fn update_reveal(&mut self) {
        if let Some(ref mut reveal) = self.reveal {
            reveal.update();
            if reveal.is_complete() {
                self.reveal = None;
            }
        }
    }

    /// Whether the Ctrl+C quit hint should be shown
    pub fn awaiting_second_ctrl_c(&self) -> bool {
        self.last_ctrl_c
            .is_some_and(|at| at.elapsed() < DOUBLE_CTRL_C_WINDOW)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key finishes the enter animation
        if let Some(ref mut reveal) = self.reveal {
            reveal.skip();
            self.reveal = None;
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            if self.awaiting_second_ctrl_c() {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(Instant::now());
            }
            return;
        }

        let on_submit = self.controller.form().is_submit_focused();
        let active = self.controller.form().active_field();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.controller.form_mut().next_field(),
            KeyCode::BackTab => self.controller.form_mut().prev_field(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Enter => match active {
                Some(field) if field.is_multiline() => {
                    self.controller.push_char(field, '\n');
                }
                // Enter in a single-line input submits the form
                _ => self.submit(),
            },
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = active {
                    self.controller.push_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = active {
                    self.controller.pop_char(field);
                }
            }
            _ => {}
        }
    }

    /// Start a submission; the send runs on a background task
    pub fn submit(&mut self) {
        let Some(send) = self.controller.submit() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            if tx.send(send.await).is_err() {
                tracing::debug!("Delivery finished after the form closed");
            }
        });

        self.pending = Some(rx);
        self.spinner = Spinner::new();
    }

    /// Hand a finished delivery back to the controller
    pub fn poll_delivery(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.controller.complete_submit(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                // The send task died without reporting back
                tracing::error!("Delivery task ended without a result");
                self.pending = None;
                self.controller.complete_submit(Err(DeliveryError::Unknown));
            }
        }
    }
}
