//! Submission controller
//!
//! Owns the required fields, gates submission on field validity and consent,
//! and drives one asynchronous submission at a time:
//! Idle → InFlight → {Succeeded, Failed} → Idle.

use super::error::SubmitRejected;
use super::traits::{SubmissionReceipt, SubmissionTransport};
use crate::config::SignupConfig;
use crate::state::{
    ErrorDisplay, Field, FieldName, FormSnapshot, FormSurface, Notification, NotificationKind,
    NotificationTray,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Blocking notice shown when the terms checkbox is not ticked
pub const CONSENT_MESSAGE: &str = "Please agree to the Terms & Conditions";

pub const SUCCESS_MESSAGE: &str = "Account created successfully!";

/// Shown when the transport task dies without returning a result
const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// The attempt currently running on the transport
struct InFlight {
    task: JoinHandle<anyhow::Result<SubmissionReceipt>>,
    /// Submit label before it was replaced by the busy label
    original_label: String,
}

/// Current state plus every state the latest attempt passed through
#[derive(Debug, Default)]
struct StateTrail {
    current: SubmissionState,
    attempt: Vec<SubmissionState>,
}

impl StateTrail {
    fn transition(&mut self, to: SubmissionState) {
        tracing::debug!(from = ?self.current, to = ?to, "Submission state change");
        if to == SubmissionState::InFlight {
            self.attempt = vec![self.current];
        }
        self.attempt.push(to);
        self.current = to;
    }
}

/// Restores the submit control and returns to Idle when dropped,
/// whatever path the resolution takes.
struct SettleGuard<'a, S: FormSurface> {
    surface: &'a mut S,
    state: &'a mut StateTrail,
    original_label: String,
}

impl<S: FormSurface> Drop for SettleGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_submit_enabled(true);
        self.surface.set_submit_label(&self.original_label);
        self.state.transition(SubmissionState::Idle);
    }
}

pub struct SubmissionController<S, T: ?Sized> {
    surface: S,
    transport: Arc<T>,
    fields: Vec<Field>,
    state: StateTrail,
    in_flight: Option<InFlight>,
    notifications: NotificationTray,
    busy_label: String,
}

impl<S, T> SubmissionController<S, T>
where
    S: FormSurface,
    T: SubmissionTransport + ?Sized + 'static,
{
    /// Scan the surface for required fields and take ownership of both
    /// collaborators.
    pub fn new(surface: S, transport: Arc<T>, config: &SignupConfig) -> Self {
        let fields = surface
            .required_fields()
            .into_iter()
            .map(|(name, kind)| Field::new(name, kind, surface.field_value(name)))
            .collect();

        Self {
            surface,
            transport,
            fields,
            state: StateTrail::default(),
            in_flight: None,
            notifications: NotificationTray::new(Duration::from_millis(config.notification_ms)),
            busy_label: config.busy_label.clone(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for input the controller does not interpret
    /// (typing, focus, checkbox). Report value changes through
    /// [`Self::on_input`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> SubmissionState {
        self.state.current
    }

    /// States the latest attempt went through, starting from the Idle it
    /// left. Empty before the first attempt.
    pub fn attempt_trail(&self) -> &[SubmissionState] {
        &self.state.attempt
    }

    /// How the latest attempt ended, once it has settled
    pub fn last_outcome(&self) -> Option<SubmissionState> {
        self.attempt_trail()
            .iter()
            .rev()
            .find(|s| matches!(s, SubmissionState::Succeeded | SubmissionState::Failed))
            .copied()
    }

    #[allow(dead_code)]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[allow(dead_code)]
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.live()
    }

    /// The value of a field changed: clear any stale error right away
    pub fn on_input(&mut self, name: FieldName) {
        let value = self.surface.field_value(name);
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            return;
        };
        let display = field.on_input(value);
        tracing::trace!(field = ?name, valid = field.is_valid, "Field input");
        apply_display(&mut self.surface, name, display);
    }

    /// The field lost focus: run full validation and show the result.
    /// Returns the verdict; fields the controller does not track are valid.
    pub fn on_blur(&mut self, name: FieldName) -> bool {
        let value = self.surface.field_value(name);
        let Some(field) = self.fields.iter_mut().find(|f| f.name == name) else {
            return true;
        };
        let display = field.revalidate(value);
        let is_valid = field.is_valid;
        tracing::debug!(field = ?name, valid = is_valid, "Field validated");
        apply_display(&mut self.surface, name, display);
        is_valid
    }

    /// The user asked to submit.
    ///
    /// Validates every required field (surfacing inline errors), then checks
    /// consent. When both pass, disables the submit control and starts the
    /// transport call in the background; use [`Self::resolve`] or
    /// [`Self::poll_submission`] to finish it. Must be called within a tokio
    /// runtime.
    pub fn submit_intent(&mut self) -> Result<(), SubmitRejected> {
        if self.state.current != SubmissionState::Idle {
            tracing::debug!("Submit ignored while {:?}", self.state.current);
            return Err(SubmitRejected::InFlight);
        }

        let names: Vec<FieldName> = self.fields.iter().map(|f| f.name).collect();
        let invalid: Vec<FieldName> = names
            .into_iter()
            .filter(|&name| !self.on_blur(name))
            .collect();

        if !self.surface.terms_accepted() {
            tracing::info!("Submit blocked: terms not accepted");
            self.surface.alert(CONSENT_MESSAGE);
            return Err(SubmitRejected::ConsentMissing);
        }

        if !invalid.is_empty() {
            tracing::info!(?invalid, "Submit blocked: invalid fields");
            return Err(SubmitRejected::FieldsInvalid(invalid));
        }

        let snapshot = self.snapshot();
        self.begin(snapshot);
        Ok(())
    }

    fn snapshot(&self) -> FormSnapshot {
        let value = |name: FieldName| {
            self.fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.clone())
                .unwrap_or_default()
        };
        FormSnapshot {
            first_name: value(FieldName::FirstName),
            last_name: value(FieldName::LastName),
            email: value(FieldName::Email),
            password: value(FieldName::Password),
            terms_accepted: self.surface.terms_accepted(),
        }
    }

    fn begin(&mut self, snapshot: FormSnapshot) {
        let original_label = self.surface.submit_label();
        self.surface.set_submit_enabled(false);
        self.surface.set_submit_label(&self.busy_label);
        self.state.transition(SubmissionState::InFlight);

        tracing::info!(email = %snapshot.email, "Submitting registration");
        let transport = Arc::clone(&self.transport);
        let task = tokio::spawn(async move { transport.submit(snapshot).await });

        self.in_flight = Some(InFlight {
            task,
            original_label,
        });
    }

    /// Whether the running transport call has finished and can be resolved
    /// without waiting
    pub fn is_ready_to_resolve(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|f| f.task.is_finished())
    }

    /// Wait for the running transport call, present its outcome and settle.
    ///
    /// Returns the terminal state the attempt reached (Succeeded or Failed);
    /// the controller itself is Idle again on return. Returns `None` when
    /// nothing is in flight.
    pub async fn resolve(&mut self) -> Option<SubmissionState> {
        let in_flight = self.in_flight.as_mut()?;
        let joined = (&mut in_flight.task).await;
        let InFlight { original_label, .. } = self.in_flight.take()?;

        let mut settle = SettleGuard {
            surface: &mut self.surface,
            state: &mut self.state,
            original_label,
        };

        let (terminal, kind, message) = match joined {
            Ok(Ok(receipt)) => {
                tracing::info!("Registration succeeded: {}", receipt.message);
                (
                    SubmissionState::Succeeded,
                    NotificationKind::Success,
                    SUCCESS_MESSAGE.to_string(),
                )
            }
            Ok(Err(err)) => {
                tracing::warn!("Registration failed: {err}");
                (
                    SubmissionState::Failed,
                    NotificationKind::Error,
                    err.to_string(),
                )
            }
            Err(err) => {
                tracing::warn!("Registration task aborted: {err}");
                (
                    SubmissionState::Failed,
                    NotificationKind::Error,
                    UNEXPECTED_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        settle.state.transition(terminal);
        let notification = Notification::new(kind, message, Instant::now());
        settle.surface.show_notification(&notification);
        self.notifications.push(notification);

        Some(terminal)
    }

    /// Resolve the running attempt if it has already finished.
    /// Never waits on the transport.
    pub async fn poll_submission(&mut self) -> Option<SubmissionState> {
        if self.is_ready_to_resolve() {
            self.resolve().await
        } else {
            None
        }
    }

    /// Submit-intent followed by waiting for the outcome
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> Result<SubmissionState, SubmitRejected> {
        self.submit_intent()?;
        Ok(self.resolve().await.unwrap_or(SubmissionState::Idle))
    }

    /// Remove notifications whose display time has elapsed, in any state
    pub fn expire_notifications(&mut self, now: Instant) {
        for n in self.notifications.expire(now) {
            tracing::trace!(id = %n.id, created_at = %n.created_at, "Notification expired");
            self.surface.remove_notification(n.id);
        }
    }
}

fn apply_display<S: FormSurface>(surface: &mut S, name: FieldName, display: ErrorDisplay) {
    match display {
        ErrorDisplay::Unchanged => {}
        ErrorDisplay::Show(message) => surface.show_field_error(name, &message),
        ErrorDisplay::Clear => surface.clear_field_error(name),
    }
}
