use crate::error::{PulseError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The fixed tag vocabulary for extracted items.
///
/// Other components (persistence, detail views) depend on the exact wire
/// strings, so renames here are breaking changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Today,
    #[serde(rename = "to-do")]
    Todo,
    Meeting,
    Important,
    Yesterday,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Today => write!(f, "today"),
            Tag::Todo => write!(f, "to-do"),
            Tag::Meeting => write!(f, "meeting"),
            Tag::Important => write!(f, "important"),
            Tag::Yesterday => write!(f, "yesterday"),
        }
    }
}

impl FromStr for Tag {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Tag::Today),
            "to-do" | "todo" => Ok(Tag::Todo),
            "meeting" => Ok(Tag::Meeting),
            "important" => Ok(Tag::Important),
            "yesterday" => Ok(Tag::Yesterday),
            _ => Err(PulseError::Parse(format!("Invalid tag: {}", s))),
        }
    }
}

/// Due timeframe for a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DueType {
    #[default]
    Today,
    ThisWeek,
}

impl fmt::Display for DueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueType::Today => write!(f, "today"),
            DueType::ThisWeek => write!(f, "this_week"),
        }
    }
}

impl FromStr for DueType {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "today" => Ok(DueType::Today),
            "this_week" | "this-week" => Ok(DueType::ThisWeek),
            _ => Err(PulseError::Parse(format!("Invalid due type: {}", s))),
        }
    }
}

/// Five-point mood scale, very negative to very positive.
///
/// Serialized as the emoji itself; the UI and feedback store treat the five
/// emoji as the canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mood {
    #[serde(rename = "😣")]
    VeryNegative,
    #[serde(rename = "😕")]
    Negative,
    #[default]
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "🙂")]
    Positive,
    #[serde(rename = "😄")]
    VeryPositive,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::VeryNegative => "😣",
            Mood::Negative => "😕",
            Mood::Neutral => "😐",
            Mood::Positive => "🙂",
            Mood::VeryPositive => "😄",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.emoji())
    }
}

impl FromStr for Mood {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "😣" => Ok(Mood::VeryNegative),
            "😕" => Ok(Mood::Negative),
            "😐" => Ok(Mood::Neutral),
            "🙂" => Ok(Mood::Positive),
            "😄" => Ok(Mood::VeryPositive),
            _ => Err(PulseError::Parse(format!("Invalid mood emoji: {}", s))),
        }
    }
}
