//! Keyword tables driving the rule-based extraction path.
//!
//! The tables are immutable process-wide configuration: build one [`Lexicon`]
//! at startup and pass it to the extractor. Tests substitute smaller tables.
//! Check-in notes are written in Turkish or English, so both forms appear.

/// Fixed keyword tables for sentence classification and mood detection.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Completed-tense / "happening now" words, mapped to the `today` tag.
    pub today: Vec<String>,
    /// Future-tense / planning words, mapped to the `to-do` tag.
    pub todo: Vec<String>,
    /// Next-day words; push a commitment's due window to `this_week`.
    pub tomorrow: Vec<String>,
    /// Urgency words, mapped to the `important` tag.
    pub important: Vec<String>,
    /// Meeting-related words, mapped to the `meeting` tag.
    pub meeting: Vec<String>,
    /// Words signalling one person is waiting on another.
    pub blocker: Vec<String>,
    /// Words signalling a promise or plan.
    pub commitment: Vec<String>,
    /// Positive-affect words for mood detection.
    pub positive: Vec<String>,
    /// Negative-affect words for mood detection.
    pub negative: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            today: words(&[
                "bugün", "today", "şu an", "şimdi", "tamamlandı", "bitti", "düzeldi", "halletti",
                "yaptı", "çalıştı", "finished", "completed",
            ]),
            todo: words(&[
                "yapacak",
                "başlayacak",
                "planlıyor",
                "yapması gerek",
                "tamamlanacak",
                "bitecek",
                "üzerinde çalışacak",
                "bakacak",
                "will start",
                "plans to",
            ]),
            tomorrow: words(&["yarın", "tomorrow", "sonraki gün"]),
            important: words(&[
                "önemli", "kritik", "acil", "blocker", "engel", "problem", "sorun", "urgent",
                "critical",
            ]),
            meeting: words(&[
                "toplantı", "meeting", "görüşme", "sprint", "daily", "standup",
            ]),
            blocker: words(&[
                "bekliyor",
                "beklemek zorunda",
                "geciktir",
                "blokluyor",
                "engelliyor",
                "bekleniyor",
                "yavaşlat",
                "tıkandı",
                "waiting on",
                "blocked by",
                "delayed",
            ]),
            commitment: words(&[
                "yapacak",
                "başlayacak",
                "tamamlayacak",
                "bitecek",
                "planlıyor",
                "hedefliyor",
                "söz verdi",
                "taahhüt",
                "promised",
                "will finish",
            ]),
            positive: words(&[
                "iyi", "güzel", "süper", "harika", "motivasyon", "yüksek", "mutlu", "başarılı",
                "verimli", "ilerledi",
            ]),
            negative: words(&[
                "kötü", "zor", "stres", "düşük", "mutsuz", "sıkıntı", "problem", "sorun", "gecik",
                "tıkandı",
            ]),
        }
    }
}

impl Lexicon {
    /// True when `text` (already lower-cased) contains any word from `list`.
    pub fn matches(text: &str, list: &[String]) -> bool {
        list.iter().any(|w| text.contains(w.as_str()))
    }

    /// Count how many words from `list` appear in `text` (already
    /// lower-cased). Each configured word counts at most once, regardless of
    /// how often it repeats in the text.
    pub fn count_matches(text: &str, list: &[String]) -> usize {
        list.iter().filter(|w| text.contains(w.as_str())).count()
    }
}
