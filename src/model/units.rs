//! Unit tags and alignment keywords carried by a grid configuration.
//!
//! Unit tags are kept as the editor offers them. Stored blobs may carry a tag
//! outside the offered set; it survives as `Literal` and renders verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sizing tag for column and row tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrackUnit {
    Fr,
    Px,
    Percent,
    Auto,
    Literal(String),
}

impl TrackUnit {
    /// Tags offered for both track axes.
    pub const OFFERED: [TrackUnit; 4] = [
        TrackUnit::Fr,
        TrackUnit::Px,
        TrackUnit::Percent,
        TrackUnit::Auto,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Fr => "fr",
            Self::Px => "px",
            Self::Percent => "%",
            Self::Auto => "auto",
            Self::Literal(raw) => raw,
        }
    }
}

impl From<String> for TrackUnit {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "fr" => Self::Fr,
            "px" => Self::Px,
            "%" => Self::Percent,
            "auto" => Self::Auto,
            _ => Self::Literal(raw),
        }
    }
}

impl From<&str> for TrackUnit {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<TrackUnit> for String {
    fn from(unit: TrackUnit) -> Self {
        match unit {
            TrackUnit::Literal(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for TrackUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit appended to the gap length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GapUnit {
    Px,
    Percent,
    Rem,
    Em,
    Literal(String),
}

impl GapUnit {
    pub const OFFERED: [GapUnit; 4] = [GapUnit::Px, GapUnit::Percent, GapUnit::Rem, GapUnit::Em];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Literal(raw) => raw,
        }
    }
}

impl From<String> for GapUnit {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "px" => Self::Px,
            "%" => Self::Percent,
            "rem" => Self::Rem,
            "em" => Self::Em,
            _ => Self::Literal(raw),
        }
    }
}

impl From<&str> for GapUnit {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<GapUnit> for String {
    fn from(unit: GapUnit) -> Self {
        match unit {
            GapUnit::Literal(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for GapUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `justify-items` / `align-items` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemAlignment {
    Start,
    End,
    Center,
    #[default]
    Stretch,
}

impl ItemAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Stretch => "stretch",
        }
    }
}

impl fmt::Display for ItemAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `justify-content` / `align-content` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentAlignment {
    #[default]
    Start,
    End,
    Center,
    Stretch,
    SpaceAround,
    SpaceBetween,
    SpaceEvenly,
}

impl ContentAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Stretch => "stretch",
            Self::SpaceAround => "space-around",
            Self::SpaceBetween => "space-between",
            Self::SpaceEvenly => "space-evenly",
        }
    }
}

impl fmt::Display for ContentAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
