mod bundle;
mod types;

pub use bundle::{
    BlockerRelation, CheckinNote, CommitmentItem, ExtractionBundle, MoodAssessment,
    ObservationItem,
};
pub use types::{DueType, Mood, Tag};
