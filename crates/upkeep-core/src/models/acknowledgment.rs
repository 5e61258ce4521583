//! User-facing acknowledgment shown after a form is submitted.

use serde::{Deserialize, Serialize};

/// A toast-style notification: a short title and one sentence of detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub description: String,
}

impl Acknowledgment {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
