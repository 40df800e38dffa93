use std::time::Duration;

use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::error::SourceError;
use crate::sentence::RawSentence;

use super::SentenceRepository;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const TIMEOUT: Duration = Duration::from_secs(60);
const TEMPERATURE: f32 = 0.8;

const SYSTEM_PROMPT: &str = "あなたはタイピング練習用の文章を生成するアシスタントです。指定された形式のJSONのみを出力してください。";

const USER_PROMPT: &str = r#"タイピング練習用の日本語の短文を10個生成してください。

条件:
- 各文は10〜25文字程度
- 日常的で自然な日本語
- 句読点・記号・数字・長音符「ー」は使わない
- ひらがな読みが正確に対応する文（漢字にはふりがなが一意に決まるものを使用）
- 固有名詞は避ける
- 以下の JSON 形式で出力:

[
  { "japanese": "今日はいい天気です", "reading": "きょうはいいてんきです" },
  { "japanese": "桜の花が咲いた", "reading": "さくらのはながさいた" }
]

JSON のみを出力し、それ以外のテキストは含めないでください。"#;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// チャット補完 API でお題を生成する
#[derive(Debug, Clone)]
pub struct ApiSentenceRepository {
    api_key: String,
    endpoint: String,
    model: String,
}

impl ApiSentenceRepository {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_body(&self) -> ChatCompletionRequest<'_> {
        ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: USER_PROMPT,
                },
            ],
            temperature: TEMPERATURE,
        }
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// API を呼び、アシスタントの応答本文を返す
    fn call_chat_completion(&self) -> Result<String, SourceError> {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();

        log::info!("お題を生成しています ({})", self.model);
        let mut response = agent
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("Authorization", self.authorization())
            .send_json(&self.request_body())
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if let Some(err) = status_error(status) {
            log::warn!("API がエラーを返しました: {status}");
            return Err(err);
        }

        let body: ChatCompletionResponse = response
            .body_mut()
            .read_json()
            .map_err(|_| SourceError::InvalidResponse)?;
        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(SourceError::InvalidResponse)
    }
}

impl SentenceRepository for ApiSentenceRepository {
    fn sentences(&self) -> Result<Vec<RawSentence>, SourceError> {
        let content = self.call_chat_completion()?;
        parse_sentences(&content)
    }
}

/// HTTP ステータスをエラーに対応づける（成功なら None）
fn status_error(status: u16) -> Option<SourceError> {
    match status {
        200..=299 => None,
        401 => Some(SourceError::InvalidApiKey),
        429 => Some(SourceError::RateLimited),
        other => Some(SourceError::Http(other)),
    }
}

/// 応答本文を `{japanese, reading}` の配列として読む
///
/// モデルが ```json で囲んで返すことがあるので、囲みは外してから読む。
fn parse_sentences(content: &str) -> Result<Vec<RawSentence>, SourceError> {
    let trimmed = strip_code_fence(content.trim());
    let sentences: Vec<RawSentence> =
        serde_json::from_str(trimmed).map_err(|_| SourceError::InvalidResponse)?;
    if sentences.is_empty() {
        return Err(SourceError::InvalidResponse);
    }
    Ok(sentences)
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // 言語名（"json" など）の行を飛ばす
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
