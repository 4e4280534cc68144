//! Contact form relay: payload formatting and the submit button state machine.
//!
//! There is no backend. A submission waits a simulated delay, reports
//! success, then hands a pre-filled WhatsApp link to the page.
//!
//! ```text
//! Idle --submit--> Pending --DelayElapsed--> Sent --ResetDue--> Idle
//!   \                 \                        (LinkDue opens the link)
//!    \--bad fields-->  \--fail--> Failed --ResetDue--> Idle
//! ```

use crate::constants::*;
use crate::error::{FolioError, Result};

/// Form fields captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub budget: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from a field lookup keyed by form control name.
    /// A blank budget counts as absent.
    pub fn from_fields<F>(field: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| field(name).ok_or(FolioError::MissingField(name));
        Ok(Self {
            name: required("name")?,
            email: required("email")?,
            project_type: required("project-type")?,
            budget: field("budget").filter(|b| !b.trim().is_empty()),
            message: required("message")?,
        })
    }

    pub fn budget_or_default(&self) -> &str {
        self.budget.as_deref().unwrap_or(BUDGET_FALLBACK)
    }

    pub fn format_message(&self) -> String {
        format!(
            "*New Project Inquiry*\n\n\
             *Name:* {}\n\
             *Email:* {}\n\
             *Project Type:* {}\n\
             *Budget:* {}\n\n\
             *Message:*\n{}",
            self.name,
            self.email,
            self.project_type,
            self.budget_or_default(),
            self.message
        )
    }

    pub fn whatsapp_url(&self, number: &str) -> String {
        format!(
            "{}{}?text={}",
            WHATSAPP_BASE_URL,
            number,
            urlencoding::encode(&self.format_message())
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayState {
    Idle,
    Pending,
    Sent,
    Failed,
}

impl RelayState {
    fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

/// Timer expiries fed back into the relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayEvent {
    DelayElapsed,
    LinkDue,
    ResetDue,
}

impl RelayEvent {
    fn name(self) -> &'static str {
        match self {
            Self::DelayElapsed => "delay-elapsed",
            Self::LinkDue => "link-due",
            Self::ResetDue => "reset-due",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitLabel {
    Sending,
    Sent,
    Error,
}

impl SubmitLabel {
    pub fn text(self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
            Self::Error => "Error! Try Again",
        }
    }
}

/// Side effects the page must perform, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayEffect {
    DisableSubmit,
    ShowLabel(SubmitLabel),
    Schedule { event: RelayEvent, after_ms: u32 },
    OpenLink(String),
    ResetForm,
    RestoreSubmit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayTimings {
    pub submit_delay_ms: u32,
    pub link_open_delay_ms: u32,
    pub reset_delay_ms: u32,
}

impl Default for RelayTimings {
    fn default() -> Self {
        Self {
            submit_delay_ms: SUBMIT_SIMULATED_DELAY_MS,
            link_open_delay_ms: LINK_OPEN_DELAY_MS,
            reset_delay_ms: SUBMIT_RESET_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContactRelay {
    state: RelayState,
    timings: RelayTimings,
    number: String,
    pending_url: Option<String>,
}

impl Default for ContactRelay {
    fn default() -> Self {
        Self::new(CONTACT_WHATSAPP_NUMBER, RelayTimings::default())
    }
}

impl ContactRelay {
    pub fn new(number: impl Into<String>, timings: RelayTimings) -> Self {
        Self {
            state: RelayState::Idle,
            timings,
            number: number.into(),
            pending_url: None,
        }
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    /// Start a submission. Rejected while a previous one is still running.
    /// Invalid fields move straight to the error state.
    pub fn submit(&mut self, fields: Result<ContactSubmission>) -> Result<Vec<RelayEffect>> {
        if self.state != RelayState::Idle {
            return Err(FolioError::RelayBusy);
        }
        match fields {
            Ok(submission) => {
                self.pending_url = Some(submission.whatsapp_url(&self.number));
                self.transition(RelayState::Pending);
                Ok(vec![
                    RelayEffect::DisableSubmit,
                    RelayEffect::ShowLabel(SubmitLabel::Sending),
                    RelayEffect::Schedule {
                        event: RelayEvent::DelayElapsed,
                        after_ms: self.timings.submit_delay_ms,
                    },
                ])
            }
            Err(e) => {
                log::warn!("[contact] submission rejected: {e}");
                self.transition(RelayState::Failed);
                Ok(vec![
                    RelayEffect::DisableSubmit,
                    RelayEffect::ShowLabel(SubmitLabel::Error),
                    self.schedule_reset(),
                ])
            }
        }
    }

    /// Abort an in-flight submission into the error state. Valid while
    /// sending and after the sent label is up, before the form resets.
    pub fn fail(&mut self) -> Result<Vec<RelayEffect>> {
        if !matches!(self.state, RelayState::Pending | RelayState::Sent) {
            return Err(FolioError::InvalidTransition {
                state: self.state.name(),
                event: "fail",
            });
        }
        self.pending_url = None;
        self.transition(RelayState::Failed);
        Ok(vec![
            RelayEffect::ShowLabel(SubmitLabel::Error),
            self.schedule_reset(),
        ])
    }

    pub fn advance(&mut self, event: RelayEvent) -> Result<Vec<RelayEffect>> {
        match (self.state, event) {
            (RelayState::Pending, RelayEvent::DelayElapsed) => {
                self.transition(RelayState::Sent);
                Ok(vec![
                    RelayEffect::ShowLabel(SubmitLabel::Sent),
                    RelayEffect::Schedule {
                        event: RelayEvent::LinkDue,
                        after_ms: self.timings.link_open_delay_ms,
                    },
                    self.schedule_reset(),
                ])
            }
            (RelayState::Sent, RelayEvent::LinkDue) => Ok(self
                .pending_url
                .take()
                .map(RelayEffect::OpenLink)
                .into_iter()
                .collect()),
            (RelayState::Sent, RelayEvent::ResetDue) => {
                self.pending_url = None;
                self.transition(RelayState::Idle);
                Ok(vec![RelayEffect::ResetForm, RelayEffect::RestoreSubmit])
            }
            (RelayState::Failed, RelayEvent::ResetDue) => {
                self.transition(RelayState::Idle);
                Ok(vec![RelayEffect::RestoreSubmit])
            }
            (state, event) => Err(FolioError::InvalidTransition {
                state: state.name(),
                event: event.name(),
            }),
        }
    }

    fn schedule_reset(&self) -> RelayEffect {
        RelayEffect::Schedule {
            event: RelayEvent::ResetDue,
            after_ms: self.timings.reset_delay_ms,
        }
    }

    fn transition(&mut self, next: RelayState) {
        log::debug!("[contact] {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
