//! Contact form validation and per-session form state.
//!
//! The form is a local demo: a submission is checked for field presence and
//! answered with an acknowledgment. Nothing is sent or stored.
//!
//! # State Machine
//!
//! ```text
//!            edit               submit (all fields filled)
//! Empty ──────────► Editing ─────────────────────────────► SubmittedOk
//!                    ▲   │                                      │
//!                    │   └──────────► SubmittedError            │
//!                    │    submit (any field blank)  │           │
//!                    └──────────────────────────────┴───────────┘
//!                                     edit
//! ```

use serde::Serialize;

/// Shown when every field was filled in.
pub const ACKNOWLEDGMENT: &str = "Message received! (This demo doesn't send emails — please reach out via email directly.)";

/// Shown when any field was left blank. Deliberately does not say which one.
pub const FILL_ALL_FIELDS: &str = "Please fill all fields before sending.";

/// Result of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactOutcome {
    Acknowledged { message: String },
    Rejected { message: String },
}

impl ContactOutcome {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Acknowledged { message } | Self::Rejected { message } => message,
        }
    }
}

/// Checks that all three fields are non-blank.
///
/// Pure: the outcome depends only on the inputs and there are no side effects.
pub fn submit_contact_form(name: &str, email: &str, message: &str) -> ContactOutcome {
    let filled = [name, email, message]
        .iter()
        .all(|field| !field.trim().is_empty());

    if filled {
        ContactOutcome::Acknowledged {
            message: ACKNOWLEDGMENT.to_string(),
        }
    } else {
        ContactOutcome::Rejected {
            message: FILL_ALL_FIELDS.to_string(),
        }
    }
}

/// Lifecycle position of a [`ContactFormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Empty,
    Editing,
    SubmittedOk,
    SubmittedError,
}

/// Ephemeral contact form owned by a single session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    name: String,
    email: String,
    message: String,
    status: FormStatus,
    outcome: Option<ContactOutcome>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form as if the user had typed the three values.
    ///
    /// Status is `Editing`, or `Empty` when every value is empty.
    pub fn with_fields(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut form = Self::new();
        let (name, email, message) = (name.into(), email.into(), message.into());
        if !(name.is_empty() && email.is_empty() && message.is_empty()) {
            form.set_name(name);
            form.set_email(email);
            form.set_message(message);
        }
        form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.touch();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.touch();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
        self.touch();
    }

    /// Validates the current fields and records the outcome.
    pub fn submit(&mut self) -> &ContactOutcome {
        let outcome = submit_contact_form(&self.name, &self.email, &self.message);
        self.status = if outcome.is_acknowledged() {
            FormStatus::SubmittedOk
        } else {
            FormStatus::SubmittedError
        };
        self.outcome.insert(outcome)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Outcome of the latest submit, cleared by any later edit.
    pub fn outcome(&self) -> Option<&ContactOutcome> {
        self.outcome.as_ref()
    }

    /// True only between a submit action and the next edit.
    pub fn is_submitted(&self) -> bool {
        matches!(
            self.status,
            FormStatus::SubmittedOk | FormStatus::SubmittedError
        )
    }

    fn touch(&mut self) {
        self.status = FormStatus::Editing;
        self.outcome = None;
    }
}
