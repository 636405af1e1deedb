//! Host-boundary input validation.
//!
//! Notes below the minimum length are rejected here, before extraction ever
//! runs; the extractor itself accepts any non-empty input.

use crate::error::{PulseError, Result};

/// Minimum trimmed note length for analysis.
pub const MIN_NOTE_LENGTH: usize = 10;

/// Maximum note length, to bound extraction work.
pub const MAX_NOTE_LENGTH: usize = 50_000;

/// Valid check-in day numbers (Monday through Friday).
pub const DAY_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

pub fn validate_note(content: &str) -> Result<()> {
    let trimmed_len = content.trim().chars().count();
    if trimmed_len < MIN_NOTE_LENGTH {
        return Err(PulseError::NoteTooShort(trimmed_len, MIN_NOTE_LENGTH));
    }
    if content.chars().count() > MAX_NOTE_LENGTH {
        return Err(PulseError::Validation(format!(
            "Note exceeds maximum length of {} characters",
            MAX_NOTE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_member_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PulseError::Validation(
            "Member name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_day_number(day: u8) -> Result<()> {
    if !DAY_RANGE.contains(&day) {
        return Err(PulseError::Validation(format!(
            "Day number must be between 1 and 5, got {}",
            day
        )));
    }
    Ok(())
}
