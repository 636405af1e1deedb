//! Identity resolution: reconcile a local member name to a tracker user.
//!
//! Fuzzy matching over normalized strings. "No match" is a normal outcome;
//! callers proceed without tracker linkage rather than treating it as an
//! error.

use crate::tracker::TrackerUser;

/// Minimum overall score for a match to count. Below this the candidate is
/// discarded (fewer than two part-matches is noise).
const SCORE_FLOOR: usize = 2;

/// Lower-case, transliterate Turkish letters to ASCII, strip everything
/// outside `[a-z0-9 ]`, collapse whitespace runs, trim.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let mapped = match c {
            'ı' | 'İ' => 'i',
            'ğ' | 'Ğ' => 'g',
            'ü' | 'Ü' => 'u',
            'ş' | 'Ş' => 's',
            'ö' | 'Ö' => 'o',
            'ç' | 'Ç' => 'c',
            _ => c,
        };
        for lower in mapped.to_lowercase() {
            if lower.is_ascii_alphanumeric() {
                out.push(lower);
            } else {
                out.push(' ');
            }
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The three searchable strings for one candidate: display name, login
/// name, and the email local-part with `.`/`_` treated as spaces.
fn candidate_fields(user: &TrackerUser) -> [String; 3] {
    let email_local = user
        .email
        .as_deref()
        .unwrap_or("")
        .split('@')
        .next()
        .unwrap_or("")
        .replace(['.', '_'], " ");
    [
        normalize(&user.display_name),
        normalize(&user.name),
        normalize(&email_local),
    ]
}

/// Part-overlap score of the local name's tokens against one candidate
/// field. Tokens shorter than two characters are skipped on the local side
/// only; the prefix bonus deliberately has no length guard on either token
/// (kept for compatibility with existing match outcomes).
fn part_overlap_score(member_parts: &[&str], candidate: &str) -> usize {
    let candidate_parts: Vec<&str> = candidate.split(' ').collect();
    let mut score = 0;
    for part in member_parts {
        if part.chars().count() < 2 {
            continue;
        }
        if candidate.contains(part) {
            score += 1;
        }
        for cp in &candidate_parts {
            if cp == part {
                score += 2;
            }
            if cp.starts_with(part) || part.starts_with(cp) {
                score += 1;
            }
        }
    }
    score
}

/// Find the best-matching active tracker user for a local display name.
///
/// An exact normalized full-string match on any field short-circuits and
/// wins outright. Otherwise the highest part-overlap score wins, ties going
/// to the earlier candidate, and anything under the floor is no match.
pub fn find_user<'a>(member_name: &str, users: &'a [TrackerUser]) -> Option<&'a TrackerUser> {
    let normalized_member = normalize(member_name);
    if normalized_member.is_empty() {
        return None;
    }
    let member_parts: Vec<&str> = normalized_member.split(' ').collect();

    let mut best: Option<&TrackerUser> = None;
    let mut best_score = 0;

    for user in users {
        if !user.active {
            continue;
        }

        let mut score = 0;
        for candidate in candidate_fields(user) {
            if candidate.is_empty() {
                continue;
            }
            if candidate == normalized_member {
                return Some(user);
            }
            score = score.max(part_overlap_score(&member_parts, &candidate));
        }

        if score > best_score {
            best_score = score;
            best = Some(user);
        }
    }

    if best_score >= SCORE_FLOOR {
        best
    } else {
        None
    }
}
