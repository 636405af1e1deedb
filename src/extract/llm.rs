//! Primary extraction path: a single call to the Anthropic messages endpoint.
//!
//! One attempt per invocation, bounded by a request timeout. Every failure
//! mode here (transport, status, shape) is recoverable by the caller via the
//! rule-based fallback, so the error type stays internal to this module tree.

use crate::config::AiSettings;
use crate::model::ExtractionBundle;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

const SYSTEM_PROMPT: &str = r#"Sen bir takım liderinin haftalık check-in aracı için AI asistanısın.
Sana bir takım üyesiyle yapılan check-in görüşme notları verilecek. Bu notları analiz edip yapılandırılmış veri üreteceksin.

KURALLAR:
- SADECE notta yazanları analiz et. Hiçbir bilgiyi uydurma.
- Notta olmayan bir şeyi ekleme.
- Notun dilinde yanıtla (Türkçe not ise Türkçe, İngilizce ise İngilizce).
- JSON formatında yanıt ver, markdown fence kullanma.

ÇIKTI FORMATI:
{
  "ai_notes": [
    {"title": "Kısa başlık (max 8 kelime)", "description": "1-2 cümlelik açıklama", "tags": ["today"|"to-do"|"meeting"|"important"|"yesterday"]}
  ],
  "commitments": [
    {"title": "Taahhüt başlığı", "description": "Ne yapacağına dair açıklama", "tags": ["today"|"to-do"|"important"], "due_type": "today"|"this_week"}
  ],
  "blockers": [
    {"blocker_name": "Engelleyen kişinin adı", "blocked_name": "Engellenen kişinin adı", "reason": "Neden engelleniyor"}
  ],
  "mood": {"emoji": "😐"|"🙂"|"😄"|"😕"|"😣", "note": "Kısa mood açıklaması"},
  "summary": "Genel 1-2 cümlelik özet"
}

NOT:
- ai_notes: Nottan çıkarılan her anlamlı bilgi maddesi.
- commitments: Kişinin söz verdiği, yapacağını belirttiği şeyler. Yoksa boş array.
- blockers: SADECE notta açıkça birisinin bir başkasını engellediği/beklediği yazıyorsa ekle. Yoksa boş array.
- mood: Notun genel tonundan çıkar.
- summary: Tüm notun 1-2 cümlelik özeti."#;

/// Any way the primary path can fail. Never surfaced to callers of the
/// extractor; it only selects the fallback.
#[derive(Error, Debug)]
pub(crate) enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response had no text content")]
    EmptyResponse,

    #[error("response did not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<UserMessage>,
}

#[derive(Serialize)]
struct UserMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub(crate) struct LlmClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl LlmClient {
    pub(crate) fn new(api_key: String, settings: &AiSettings) -> Result<Self, UpstreamError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }

    /// Single completion attempt, strictly decoded into the bundle shape.
    pub(crate) fn extract(
        &self,
        content: &str,
        member_name: &str,
    ) -> Result<ExtractionBundle, UpstreamError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: SYSTEM_PROMPT,
            messages: vec![UserMessage {
                role: "user",
                content: format!("Takım üyesi: {}\n\nCheck-in notu:\n{}", member_name, content),
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json()?;
        let text = parsed
            .content
            .first()
            .map(|block| block.text.as_str())
            .filter(|t| !t.is_empty())
            .ok_or(UpstreamError::EmptyResponse)?;

        debug!(bytes = text.len(), "decoding model response");
        decode_bundle(text)
    }
}

/// Decode the model's text as the typed bundle. Markdown fences, extra
/// prose, unknown tags or any other shape mismatch all fail here and send
/// the caller to the fallback path.
pub(crate) fn decode_bundle(text: &str) -> Result<ExtractionBundle, UpstreamError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DueType, Mood, Tag};

    const VALID_RESPONSE: &str = r#"{
        "ai_notes": [
            {"title": "Release hazır", "description": "Release branch'i bugün hazırlandı.", "tags": ["today"]}
        ],
        "commitments": [
            {"title": "API fix", "description": "Yarın API fix gelecek.", "tags": ["to-do"], "due_type": "this_week"}
        ],
        "blockers": [
            {"blocker_name": "Yunus", "blocked_name": "Furkan", "reason": "API fix bekleniyor."}
        ],
        "mood": {"emoji": "🙂", "note": "Genel olarak olumlu."},
        "summary": "Release hazır, API fix bekleniyor."
    }"#;

    #[test]
    fn test_decode_valid_response() {
        let bundle = decode_bundle(VALID_RESPONSE).unwrap();
        assert_eq!(bundle.observations.len(), 1);
        assert_eq!(bundle.observations[0].tags, vec![Tag::Today]);
        assert_eq!(bundle.commitments[0].due_type, DueType::ThisWeek);
        assert_eq!(bundle.blockers[0].blocker_name, "Yunus");
        assert_eq!(bundle.mood.emoji, Mood::Positive);
        assert!(bundle.summary.is_some());
    }

    #[test]
    fn test_decode_rejects_markdown_fences() {
        let fenced = format!("```json\n{}\n```", VALID_RESPONSE);
        assert!(decode_bundle(&fenced).is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        let json = r#"{
            "ai_notes": [{"title": "t", "description": "d", "tags": ["urgent"]}],
            "mood": {"emoji": "😐", "note": "n"}
        }"#;
        assert!(decode_bundle(json).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_mood_emoji() {
        let json = r#"{
            "ai_notes": [],
            "mood": {"emoji": "😎", "note": "n"}
        }"#;
        assert!(decode_bundle(json).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_mood() {
        let json = r#"{"ai_notes": []}"#;
        assert!(decode_bundle(json).is_err());
    }

    #[test]
    fn test_decode_tolerates_missing_optional_lists() {
        let json = r#"{
            "ai_notes": [{"title": "t", "description": "d", "tags": ["meeting"]}],
            "mood": {"emoji": "😄", "note": "n"}
        }"#;
        let bundle = decode_bundle(json).unwrap();
        assert!(bundle.commitments.is_empty());
        assert!(bundle.blockers.is_empty());
    }
}
