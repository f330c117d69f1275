use anyhow::{anyhow, Result};
use async_trait::async_trait;
use slide_chatgpt::{ChatCompletionRequest, ChatCompletionResponse};
use slide_common::{GenerationRequest, PPTX_MIME_TYPE};
use slide_core::{generate_deck_with, ModelClient, SlideError};
use slide_pptx::{read_outline, SlideOutline};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every request with the same completion text.
struct ScriptedClient {
    reply: String,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn chat(&self, _request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-test",
            "model": "mixtral-8x7b-32768",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": self.reply},
                "finish_reason": "stop"
            }]
        }))?)
    }
}

struct Unauthorized;

#[async_trait]
impl ModelClient for Unauthorized {
    async fn chat(&self, _request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        Err(anyhow!(
            "chat completions http 401 Unauthorized: {{\"error\":{{\"message\":\"Invalid API Key\",\"type\":\"invalid_request_error\",\"code\":\"invalid_api_key\"}}}}"
        ))
    }
}

const SOLAR: &str = r#"{"title":"Solar Energy","slides":[{"title":"Intro","content":["A","B","C"]},{"title":"Tech","content":["D"]},{"title":"Conclusion","content":["E","F"]}]}"#;

fn outline(title: &str, body: &[&str]) -> SlideOutline {
    SlideOutline {
        title: Some(title.to_string()),
        body: body.iter().map(|s| s.to_string()).collect(),
    }
}

#[tokio::test]
async fn solar_energy_end_to_end() {
    let client = ScriptedClient::new(SOLAR);
    let request = GenerationRequest::new("Solar Energy", 3, 2).unwrap();

    let file = generate_deck_with(&client, "mixtral-8x7b-32768", &request)
        .await
        .unwrap();

    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    assert_eq!(file.file_name, "solar_energy.pptx");
    assert_eq!(file.mime_type, PPTX_MIME_TYPE);

    let slides = read_outline(&file.bytes).unwrap();
    assert_eq!(
        slides,
        vec![
            outline("Solar Energy", &[]),
            outline("Intro", &["A", "B"]),
            outline("Tech", &["D"]),
            outline("Conclusion", &["E", "F"]),
        ]
    );
}

#[tokio::test]
async fn deck_has_one_title_plus_requested_slides() {
    for count in 1..=6 {
        let slides: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "title": format!("Slide {i}"),
                    "content": ["one", "two", "three", "four", "five", "six", "seven"]
                })
            })
            .collect();
        let reply = serde_json::json!({"title": "Deck", "slides": slides}).to_string();
        let client = ScriptedClient::new(&reply);

        for points in [1, 3, 6] {
            let request = GenerationRequest::new("Deck", count, points).unwrap();
            let file = generate_deck_with(&client, "m", &request).await.unwrap();
            let outline = read_outline(&file.bytes).unwrap();

            assert_eq!(outline.len(), count + 1);
            assert!(outline[0].body.is_empty());
            for slide in &outline[1..] {
                assert_eq!(slide.body.len(), points);
            }
        }
    }
}

#[tokio::test]
async fn non_json_reply_is_reported_with_raw_text() {
    let raw = "I'm sorry, I can only answer in prose.";
    let client = ScriptedClient::new(raw);
    let request = GenerationRequest::new("Solar Energy", 3, 2).unwrap();

    let err = generate_deck_with(&client, "m", &request)
        .await
        .unwrap_err();
    assert!(matches!(err, SlideError::InvalidResponseFormat { .. }));
    assert!(err.to_string().contains(raw));
}

#[tokio::test]
async fn missing_keys_are_invalid_content() {
    let request = GenerationRequest::new("Solar Energy", 1, 2).unwrap();
    for reply in [
        r#"{"slides":[{"title":"A","content":["x"]}]}"#,
        r#"{"title":"Solar Energy"}"#,
    ] {
        let client = ScriptedClient::new(reply);
        let err = generate_deck_with(&client, "m", &request)
            .await
            .unwrap_err();
        assert!(
            matches!(err, SlideError::InvalidContentFormat { .. }),
            "{reply} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn slide_count_mismatch_is_fatal() {
    let client = ScriptedClient::new(SOLAR);
    for requested in [2, 4] {
        let request = GenerationRequest::new("Solar Energy", requested, 2).unwrap();
        let err = generate_deck_with(&client, "m", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, SlideError::Validation { actual: 3, .. }));
    }
}

#[tokio::test]
async fn rejected_key_surfaces_provider_message() {
    let request = GenerationRequest::new("Solar Energy", 3, 2).unwrap();
    let err = generate_deck_with(&Unauthorized, "m", &request)
        .await
        .unwrap_err();
    assert!(matches!(err, SlideError::Transport(_)));
    assert!(err.to_string().contains("Invalid API Key"));
    assert!(err.is_authentication());
}
