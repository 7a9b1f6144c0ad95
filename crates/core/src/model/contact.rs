use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContactFormError {
    #[error("❌ Please fill in all required fields")]
    MissingFields(Vec<ContactField>),
}

impl ContactFormError {
    #[must_use]
    pub fn missing(&self) -> &[ContactField] {
        match self {
            ContactFormError::MissingFields(fields) => fields,
        }
    }
}

//
// ─── FORM ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

/// Closed list of subjects offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContactSubject {
    #[default]
    General,
    Job,
    Research,
    Academic,
    Networking,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 6] = [
        ContactSubject::General,
        ContactSubject::Job,
        ContactSubject::Research,
        ContactSubject::Academic,
        ContactSubject::Networking,
        ContactSubject::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Job => "Biotech Job Opportunity",
            ContactSubject::Research => "Research Collaboration",
            ContactSubject::Academic => "Academic Discussion",
            ContactSubject::Networking => "Biotech Networking",
            ContactSubject::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        ContactSubject::ALL
            .into_iter()
            .find(|subject| subject.label() == label)
    }
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactDraft {
    /// Check required fields; whitespace-only input counts as empty.
    ///
    /// Email is checked for presence only.
    ///
    /// # Errors
    ///
    /// Returns `ContactFormError::MissingFields` listing every blank required field.
    pub fn validate(self, sent_at: DateTime<Utc>) -> Result<ContactMessage, ContactFormError> {
        let missing: Vec<ContactField> = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactFormError::MissingFields(missing));
        }

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject,
            message: self.message.trim().to_string(),
            sent_at,
        })
    }
}

/// A validated submission. Nothing is delivered; the app only acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl ContactMessage {
    #[must_use]
    pub fn confirmation(&self) -> String {
        "🎉 Message sent successfully!".to_string()
    }

    /// Label/value rows shown under "Message Details".
    #[must_use]
    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Subject", self.subject.label().to_string()),
            ("Message", self.message.clone()),
        ]
    }
}

//
// ─── CHANNELS ─────────────────────────────────────────────────────────────────
//

/// External contact buttons. Activating one only shows a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    LinkedIn,
    ResearchGate,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 3] = [
        ContactChannel::Email,
        ContactChannel::LinkedIn,
        ContactChannel::ResearchGate,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactChannel::Email => "📧 Email",
            ContactChannel::LinkedIn => "💼 LinkedIn",
            ContactChannel::ResearchGate => "📚 ResearchGate",
        }
    }

    #[must_use]
    pub fn confirmation(self) -> &'static str {
        match self {
            ContactChannel::Email => "✉️ Email client opened!",
            ContactChannel::LinkedIn => "🔗 LinkedIn opened in new tab!",
            ContactChannel::ResearchGate => "🔗 ResearchGate opened in new tab!",
        }
    }

    /// Message for the profile buttons on the Home page.
    #[must_use]
    pub fn opening_message(self) -> &'static str {
        match self {
            ContactChannel::Email => "Opening email client...",
            ContactChannel::LinkedIn => "Opening LinkedIn profile...",
            ContactChannel::ResearchGate => "Opening ResearchGate profile...",
        }
    }
}
