use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} value: {raw}")]
pub struct VariantParseError {
    pub kind: &'static str,
    pub raw: String,
}

/// How the section menu is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavStyle {
    /// One button per section in a sidebar.
    #[default]
    Sidebar,
    /// A single selector listing every section.
    Dropdown,
}

impl NavStyle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NavStyle::Sidebar => "sidebar",
            NavStyle::Dropdown => "dropdown",
        }
    }
}

impl FromStr for NavStyle {
    type Err = VariantParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sidebar" | "buttons" => Ok(NavStyle::Sidebar),
            "dropdown" | "select" => Ok(NavStyle::Dropdown),
            _ => Err(VariantParseError {
                kind: "nav",
                raw: raw.to_string(),
            }),
        }
    }
}

/// How proficiency and animation charts are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartBackend {
    /// Plain progress bars.
    #[default]
    Native,
    /// Scalable vector bar chart with axis labels.
    Svg,
}

impl ChartBackend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChartBackend::Native => "native",
            ChartBackend::Svg => "svg",
        }
    }
}

impl FromStr for ChartBackend {
    type Err = VariantParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(ChartBackend::Native),
            "svg" | "chart" => Ok(ChartBackend::Svg),
            _ => Err(VariantParseError {
                kind: "charts",
                raw: raw.to_string(),
            }),
        }
    }
}

/// Presentation strategy shared by every session of a running app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Variant {
    pub nav: NavStyle,
    pub charts: ChartBackend,
}

/// Cosmetic page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Nature,
    Lab,
    Genomic,
    Research,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Nature, Theme::Lab, Theme::Genomic, Theme::Research];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Nature => "🌿 Nature Mode",
            Theme::Lab => "🔬 Lab Mode",
            Theme::Genomic => "🧬 Genomic Mode",
            Theme::Research => "🧫 Research Mode",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Nature => "theme-nature",
            Theme::Lab => "theme-lab",
            Theme::Genomic => "theme-genomic",
            Theme::Research => "theme-research",
        }
    }
}

/// Feedback rating on a closed one-to-five star scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    #[default]
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    #[must_use]
    pub fn stars(self) -> &'static str {
        match self {
            Rating::One => "⭐",
            Rating::Two => "⭐⭐",
            Rating::Three => "⭐⭐⭐",
            Rating::Four => "⭐⭐⭐⭐",
            Rating::Five => "⭐⭐⭐⭐⭐",
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rating::ALL.into_iter().find(|rating| rating.value() == value)
    }
}
