use portfolio_core::model::Metric;

use crate::error::PortfolioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Info,
    Error,
}

/// Transient feedback produced by one event, shown until the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
    /// Play the celebration effect.
    pub celebrate: bool,
    /// Optional label/value rows under the message.
    pub details: Vec<Metric>,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Success,
            text: text.into(),
            celebrate: false,
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Info,
            ..Self::success(text)
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Error,
            ..Self::success(text)
        }
    }

    #[must_use]
    pub fn celebrating(mut self) -> Self {
        self.celebrate = true;
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<Metric>) -> Self {
        self.details = details;
        self
    }

    /// Visitor-facing rendering of a rejected event.
    #[must_use]
    pub fn from_error(err: &PortfolioError) -> Self {
        Self::error(err.to_string())
    }
}
