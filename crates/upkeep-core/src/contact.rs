//! Single-step contact form.
//!
//! Submitting waits for a short artificial delay, then acknowledges the
//! message and clears the form. Nothing is delivered anywhere.

use std::time::Duration;

use log::{debug, info};
use serde::Serialize;

use crate::{
    error::{BookingError, Result},
    models::{Acknowledgment, ContactMessage},
};

pub const CONTACT_TITLE: &str = "Message Sent!";
pub const CONTACT_DESCRIPTION: &str = "Thank you for reaching out. We'll respond within 24 hours.";

/// Delay before a contact message is acknowledged.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Acknowledgment returned by [`ContactForm::submit`] and
/// [`PendingContact::deliver`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactAcknowledgment {
    pub notice: Acknowledgment,
    /// The message as it was submitted
    pub message: ContactMessage,
}

/// Contact form state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    message: ContactMessage,
    delay: Duration,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            message: ContactMessage::default(),
            delay,
        }
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces the form contents.
    pub fn fill(&mut self, message: ContactMessage) {
        self.message = message;
    }

    /// Validates the form and takes its message out, leaving the form empty.
    ///
    /// The returned [`PendingContact`] owns everything needed to finish the
    /// submission, so callers holding the form behind a lock can release it
    /// before waiting out the delay.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` naming the blank fields when the
    /// name, email or message is empty. The form is left untouched.
    pub fn take_pending(&mut self) -> Result<PendingContact> {
        let missing = self.message.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::invalid_input(missing.join(", "))
                .with_reason("Please fill in all required fields"));
        }

        Ok(PendingContact {
            message: std::mem::take(&mut self.message),
            delay: self.delay,
        })
    }

    /// Submits the current message.
    ///
    /// # Errors
    ///
    /// Same as [`ContactForm::take_pending`].
    pub async fn submit(&mut self) -> Result<ContactAcknowledgment> {
        Ok(self.take_pending()?.deliver().await)
    }
}

/// A validated contact message waiting for its acknowledgment delay.
#[derive(Debug, Clone)]
pub struct PendingContact {
    message: ContactMessage,
    delay: Duration,
}

impl PendingContact {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    /// Waits out the delay and acknowledges the message.
    pub async fn deliver(self) -> ContactAcknowledgment {
        debug!("Sending contact message after {:?}", self.delay);
        tokio::time::sleep(self.delay).await;

        info!("Contact message received from '{}'", self.message.email.trim());

        ContactAcknowledgment {
            notice: Acknowledgment::new(CONTACT_TITLE, CONTACT_DESCRIPTION),
            message: self.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
