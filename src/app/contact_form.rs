use crate::domain::model::{ContactInquiry, ContactSubmission};
use crate::domain::ports::ContentApi;
use crate::utils::error::{handle_api_error, ApiError, Result};
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const SUCCESS_TITLE: &str = "Message Sent! 🎉";
pub const SUCCESS_DESCRIPTION: &str =
    "I'll get back to you within 24 hours to discuss your project.";
pub const FAILURE_TITLE: &str = "Error Sending Message";

/// Raw form fields. An empty string means the visitor left the field blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub channel: String,
    pub subscribers: String,
    pub service: String,
    pub project: String,
    pub budget: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn to_submission(&self) -> Result<ContactSubmission> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("service", &self.service),
            ("message", &self.message),
        ];
        for (field, value) in required {
            validate_non_empty_string(field, value)?;
        }

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            channel: blank_to_none(&self.channel),
            subscribers: blank_to_none(&self.subscribers),
            service: self.service.clone(),
            project: blank_to_none(&self.project),
            budget: blank_to_none(&self.budget),
            message: self.message.clone(),
        })
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Toast content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Notice {
    fn sent() -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
            destructive: false,
        }
    }

    fn failed(error: &ApiError) -> Self {
        Self {
            title: FAILURE_TITLE.to_string(),
            description: handle_api_error(error),
            destructive: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted by the backend; the form has been cleared.
    Sent {
        inquiry: ContactInquiry,
        notice: Notice,
    },
    /// The backend call failed; the form keeps what the visitor typed.
    Failed { notice: Notice },
    /// A required field is blank; nothing was sent.
    Invalid { field: String, message: String },
    /// Another submission from this form has not finished yet.
    AlreadySubmitting,
}

/// Clears the in-flight flag however the submission ends.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One contact form instance: its fields plus the flag that keeps submissions from overlapping.
#[derive(Debug, Default)]
pub struct ContactForm {
    input: Mutex<ContactFormInput>,
    in_flight: AtomicBool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: ContactFormInput) -> Self {
        Self {
            input: Mutex::new(input),
            in_flight: AtomicBool::new(false),
        }
    }

    fn lock_input(&self) -> MutexGuard<'_, ContactFormInput> {
        self.input.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn input(&self) -> ContactFormInput {
        self.lock_input().clone()
    }

    /// Fields are read-only while a submission is in flight; returns whether the edit applied.
    pub fn edit(&self, change: impl FnOnce(&mut ContactFormInput)) -> bool {
        if self.is_submitting() {
            return false;
        }
        change(&mut self.lock_input());
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit<A: ContentApi + ?Sized>(&self, api: &A) -> SubmitOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("Ignoring submit while another is in flight");
            return SubmitOutcome::AlreadySubmitting;
        };

        let submission = match self.input().to_submission() {
            Ok(submission) => submission,
            Err(ApiError::Validation { field, message }) => {
                return SubmitOutcome::Invalid { field, message };
            }
            Err(e) => return SubmitOutcome::Failed { notice: Notice::failed(&e) },
        };

        match api.submit_contact_form(&submission).await {
            Ok(inquiry) => {
                *self.lock_input() = ContactFormInput::default();
                SubmitOutcome::Sent {
                    inquiry,
                    notice: Notice::sent(),
                }
            }
            Err(e) => SubmitOutcome::Failed {
                notice: Notice::failed(&e),
            },
        }
    }
}
