use super::types::{DueType, Mood, Tag};
use serde::{Deserialize, Serialize};

/// A short structured fact extracted from a check-in note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationItem {
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
}

/// An observation the extractor judged to be a promise or plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitmentItem {
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub due_type: DueType,
}

/// Single per-note sentiment rating plus a short justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodAssessment {
    pub emoji: Mood,
    pub note: String,
}

/// A stated dependency: one person waiting on another.
///
/// Names are raw text as written in the note. Resolving them against the
/// member roster is the host's job (containment matching), not ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockerRelation {
    pub blocker_name: String,
    pub blocked_name: String,
    pub reason: String,
}

/// The bundle both extraction paths produce.
///
/// Field names (including `ai_notes` for observations) are the wire contract
/// the persistence collaborators and the LLM prompt share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionBundle {
    #[serde(rename = "ai_notes")]
    pub observations: Vec<ObservationItem>,

    #[serde(default)]
    pub commitments: Vec<CommitmentItem>,

    #[serde(default)]
    pub blockers: Vec<BlockerRelation>,

    pub mood: MoodAssessment,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One check-in entry: one member, one week, one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinNote {
    pub member_name: String,
    pub week_id: String,
    pub day_number: u8,
    pub content: String,
}

impl CheckinNote {
    pub fn new(member_name: String, week_id: String, day_number: u8, content: String) -> Self {
        Self {
            member_name,
            week_id,
            day_number,
            content,
        }
    }
}
