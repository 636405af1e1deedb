//! Rule-based extraction used when the LLM path is unavailable.
//!
//! Pure function of (note text, subject name, lexicon): no clock, no
//! randomness, no shared state. Two calls with identical input produce
//! identical output.

use crate::lexicon::Lexicon;
use crate::model::{
    BlockerRelation, CommitmentItem, DueType, ExtractionBundle, Mood, MoodAssessment,
    ObservationItem, Tag,
};
use regex::Regex;
use std::sync::OnceLock;

/// Sentence fragments at or below this many characters are discarded.
const MIN_FRAGMENT_CHARS: usize = 5;

/// Maximum number of whitespace tokens in a derived title.
const TITLE_TOKENS: usize = 7;

/// Emitted list caps. More candidates are truncated, never an error.
const MAX_OBSERVATIONS: usize = 6;
const MAX_COMMITMENTS: usize = 4;

const SUMMARY_TOO_SHORT: &str = "Not çok kısa, detaylı analiz yapılamadı.";

/// Matches a capitalized word (Turkish uppercase letters included), the
/// proper-noun heuristic for candidate person names.
fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-ZÇĞİÖŞÜ][a-zçğıöşü]+").unwrap())
}

/// Extract a structured bundle from a check-in note without any network call.
///
/// Accepts arbitrarily short non-empty input; minimum-length enforcement is
/// the caller's responsibility.
pub fn extract(content: &str, member_name: &str, lex: &Lexicon) -> ExtractionBundle {
    let sentences: Vec<&str> = content
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_FRAGMENT_CHARS)
        .collect();

    let mut observations = Vec::new();
    let mut commitments = Vec::new();
    let mut blockers = Vec::new();

    for sentence in &sentences {
        let lower = sentence.to_lowercase();

        let mut tags = Vec::new();
        if Lexicon::matches(&lower, &lex.today) {
            tags.push(Tag::Today);
        }
        if Lexicon::matches(&lower, &lex.todo) || Lexicon::matches(&lower, &lex.tomorrow) {
            tags.push(Tag::Todo);
        }
        if Lexicon::matches(&lower, &lex.important) {
            tags.push(Tag::Important);
        }
        if Lexicon::matches(&lower, &lex.meeting) {
            tags.push(Tag::Meeting);
        }
        if tags.is_empty() {
            tags.push(Tag::Today);
        }

        let title = derive_title(sentence);

        observations.push(ObservationItem {
            title: title.clone(),
            description: sentence.to_string(),
            tags,
        });

        let is_tomorrow = Lexicon::matches(&lower, &lex.tomorrow);
        if Lexicon::matches(&lower, &lex.commitment) || is_tomorrow {
            commitments.push(CommitmentItem {
                title,
                description: sentence.to_string(),
                tags: vec![if is_tomorrow { Tag::Todo } else { Tag::Today }],
                due_type: if is_tomorrow {
                    DueType::ThisWeek
                } else {
                    DueType::Today
                },
            });
        }

        if Lexicon::matches(&lower, &lex.blocker) {
            if let Some(blocker_name) = first_other_name(sentence, member_name, lex) {
                blockers.push(BlockerRelation {
                    blocker_name,
                    blocked_name: first_name_token(member_name),
                    reason: sentence.to_string(),
                });
            }
        }
    }

    observations.truncate(MAX_OBSERVATIONS);
    commitments.truncate(MAX_COMMITMENTS);

    let summary = if observations.is_empty() {
        SUMMARY_TOO_SHORT.to_string()
    } else {
        let mut s = observations
            .iter()
            .take(2)
            .map(|o| o.description.as_str())
            .collect::<Vec<_>>()
            .join(". ");
        s.push('.');
        s
    };

    ExtractionBundle {
        observations,
        commitments,
        blockers,
        mood: assess_mood(content, lex),
        summary: Some(summary),
    }
}

/// First `TITLE_TOKENS` whitespace tokens of the sentence, with an ellipsis
/// marker when truncated.
fn derive_title(sentence: &str) -> String {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let mut title = words
        .iter()
        .take(TITLE_TOKENS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > TITLE_TOKENS {
        title.push_str("...");
    }
    title
}

/// First capitalized token in the sentence that is neither part of the
/// subject's own name nor a configured keyword (keywords like "Yarın" or
/// "Toplantı" capitalize at sentence starts and are not person names).
fn first_other_name(sentence: &str, member_name: &str, lex: &Lexicon) -> Option<String> {
    let member_lower = member_name.to_lowercase();
    name_pattern()
        .find_iter(sentence)
        .map(|m| m.as_str())
        .find(|token| {
            let token_lower = token.to_lowercase();
            !member_lower.contains(&token_lower)
                && !token_lower.contains(&member_lower)
                && !is_keyword(&token_lower, lex)
        })
        .map(str::to_string)
}

fn is_keyword(word: &str, lex: &Lexicon) -> bool {
    [
        &lex.today,
        &lex.todo,
        &lex.tomorrow,
        &lex.important,
        &lex.meeting,
        &lex.blocker,
        &lex.commitment,
    ]
    .iter()
    .any(|list| list.iter().any(|w| w == word))
}

fn first_name_token(member_name: &str) -> String {
    member_name
        .split_whitespace()
        .next()
        .unwrap_or(member_name)
        .to_string()
}

/// Whole-note mood detection, independent of the per-sentence loop.
///
/// Each configured affect word counts once if present anywhere in the note,
/// regardless of repetition.
fn assess_mood(content: &str, lex: &Lexicon) -> MoodAssessment {
    let lower = content.to_lowercase();
    let positive = Lexicon::count_matches(&lower, &lex.positive);
    let negative = Lexicon::count_matches(&lower, &lex.negative);

    let (emoji, note) = if positive > negative + 1 {
        (Mood::VeryPositive, "Çok pozitif görünüyor.")
    } else if positive > negative {
        (Mood::Positive, "Genel olarak olumlu.")
    } else if negative > positive + 1 {
        (Mood::VeryNegative, "Zorluklar yaşıyor.")
    } else if negative > positive {
        (Mood::Negative, "Bazı sorunlar mevcut.")
    } else {
        (Mood::Neutral, "Normal bir gün.")
    };

    MoodAssessment {
        emoji,
        note: note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::default()
    }

    #[test]
    fn test_sentence_split_discards_short_fragments() {
        let bundle = extract("Ok. Sprint planning toplantısı verimli geçti bugün.", "Ali", &lex());
        assert_eq!(bundle.observations.len(), 1);
        assert!(bundle.observations[0].description.contains("Sprint"));
    }

    #[test]
    fn test_every_observation_has_a_tag_from_the_vocabulary() {
        let note = "Rapor teslim edildi ve inceleme sürüyor. Deployment pipeline kırmızı.";
        let bundle = extract(note, "Ali Veli", &lex());
        assert!(!bundle.observations.is_empty());
        for obs in &bundle.observations {
            assert!(!obs.tags.is_empty());
        }
    }

    #[test]
    fn test_untagged_sentence_defaults_to_today() {
        let bundle = extract("Dokümantasyon gözden geçirildi", "Ali", &lex());
        assert_eq!(bundle.observations[0].tags, vec![Tag::Today]);
    }

    #[test]
    fn test_multiple_tags_on_one_sentence() {
        let bundle = extract(
            "Bugün kritik bir toplantı vardı ve sorun çözüldü",
            "Ali",
            &lex(),
        );
        let tags = &bundle.observations[0].tags;
        assert!(tags.contains(&Tag::Today));
        assert!(tags.contains(&Tag::Important));
        assert!(tags.contains(&Tag::Meeting));
    }

    #[test]
    fn test_title_truncation_with_ellipsis() {
        let bundle = extract(
            "Bugün uzun bir cümle yazıyorum çünkü başlık kesme davranışını kontrol ediyorum",
            "Ali",
            &lex(),
        );
        let title = &bundle.observations[0].title;
        assert!(title.ends_with("..."));
        assert_eq!(title.trim_end_matches("...").split_whitespace().count(), 7);
    }

    #[test]
    fn test_short_sentence_title_has_no_ellipsis() {
        let bundle = extract("Bugün rapor bitti", "Ali", &lex());
        assert_eq!(bundle.observations[0].title, "Bugün rapor bitti");
    }

    #[test]
    fn test_commitment_with_tomorrow_is_due_this_week() {
        let bundle = extract("Yarın rapor üzerinde çalışmaya devam edecek", "Ali", &lex());
        assert_eq!(bundle.commitments.len(), 1);
        assert_eq!(bundle.commitments[0].due_type, DueType::ThisWeek);
        assert_eq!(bundle.commitments[0].tags, vec![Tag::Todo]);
    }

    #[test]
    fn test_commitment_without_tomorrow_is_due_today() {
        let bundle = extract("API entegrasyonunu bugün tamamlayacak", "Ali", &lex());
        assert_eq!(bundle.commitments.len(), 1);
        assert_eq!(bundle.commitments[0].due_type, DueType::Today);
        assert_eq!(bundle.commitments[0].tags, vec![Tag::Today]);
    }

    #[test]
    fn test_blocker_extraction_turkish() {
        let note = "Bugün release branch'i hazırladım. Yarın Yunus'tan API fix bekliyorum.";
        let bundle = extract(note, "Furkan Yılmaz", &lex());

        assert!(bundle
            .observations
            .iter()
            .any(|o| o.tags.contains(&Tag::Today)));

        assert_eq!(bundle.blockers.len(), 1);
        assert!(bundle.blockers[0].blocker_name.contains("Yunus"));
        assert_eq!(bundle.blockers[0].blocked_name, "Furkan");
        assert!(bundle.blockers[0].reason.contains("bekliyorum"));
    }

    #[test]
    fn test_blocker_excludes_subject_own_name() {
        let note = "Furkan tasarım onayı bekliyor";
        let bundle = extract(note, "Furkan Yılmaz", &lex());
        assert!(bundle.blockers.is_empty());
    }

    #[test]
    fn test_blocker_keyword_without_names_emits_nothing() {
        let bundle = extract("deployment onayı bekleniyor hala", "Ali", &lex());
        assert!(bundle.blockers.is_empty());
    }

    #[test]
    fn test_at_most_one_blocker_per_sentence() {
        let note = "Merve ve Yunus'tan gelecek incelemeyi bekliyor";
        let bundle = extract(note, "Ali Kaya", &lex());
        assert_eq!(bundle.blockers.len(), 1);
        assert_eq!(bundle.blockers[0].blocker_name, "Merve");
    }

    #[test]
    fn test_observation_and_commitment_caps() {
        let note = "Bugün rapor bitti. Bugün test bitti. Bugün review bitti. \
                    Yarın rapor yazacak. Yarın test yazacak. Yarın review yapacak. \
                    Yarın deploy yapacak. Yarın demo yapacak. Bugün sync bitti.";
        let bundle = extract(note, "Ali", &lex());
        assert_eq!(bundle.observations.len(), 6);
        assert_eq!(bundle.commitments.len(), 4);
    }

    #[test]
    fn test_mood_three_positive_zero_negative_is_most_positive() {
        let bundle = extract(
            "Her şey çok iyi gitti, güzel ve verimli bir gündü",
            "Ali",
            &lex(),
        );
        assert_eq!(bundle.mood.emoji, Mood::VeryPositive);
    }

    #[test]
    fn test_mood_equal_counts_is_neutral() {
        let bundle = extract("Gün iyi başladı ama sonu zor geçti", "Ali", &lex());
        assert_eq!(bundle.mood.emoji, Mood::Neutral);
    }

    #[test]
    fn test_mood_single_negative_margin_is_mildly_negative() {
        let bundle = extract("Deploy sırasında zor anlar yaşandı", "Ali", &lex());
        assert_eq!(bundle.mood.emoji, Mood::Negative);
    }

    #[test]
    fn test_mood_repeated_word_counts_once() {
        // "iyi" three times is still one positive word: not enough for 😄
        let bundle = extract("iyi iyi iyi bir gündü", "Ali", &lex());
        assert_eq!(bundle.mood.emoji, Mood::Positive);
    }

    #[test]
    fn test_summary_joins_first_two_descriptions() {
        let note = "Bugün rapor bitti. Yarın teste başlayacak.";
        let bundle = extract(note, "Ali", &lex());
        let summary = bundle.summary.unwrap();
        assert!(summary.contains("Bugün rapor bitti"));
        assert!(summary.contains("Yarın teste başlayacak"));
    }

    #[test]
    fn test_summary_for_empty_observations() {
        let bundle = extract("kısa", "Ali", &lex());
        assert!(bundle.observations.is_empty());
        assert_eq!(bundle.summary.as_deref(), Some(SUMMARY_TOO_SHORT));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let note = "Bugün release branch'i hazırladım. Yarın Yunus'tan API fix bekliyorum.";
        let a = extract(note, "Furkan Yılmaz", &lex());
        let b = extract(note, "Furkan Yılmaz", &lex());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_accepts_arbitrarily_short_nonempty_input() {
        let bundle = extract("a", "Ali", &lex());
        assert!(bundle.observations.is_empty());
        assert_eq!(bundle.mood.emoji, Mood::Neutral);
    }

    #[test]
    fn test_injected_smaller_lexicon() {
        let mut lex = Lexicon::default();
        lex.meeting = vec!["retro".to_string()];
        let bundle = extract("Retro oturumu uzun sürdü bugün", "Ali", &lex);
        assert!(bundle.observations[0].tags.contains(&Tag::Meeting));
    }
}
