//! Gemini generateContent API 客户端
//!
//! 薄封装：拼请求、发请求、取出文本。不做重试，超时与传输错误
//! 统一作为生成服务错误上抛。

use base64::Engine;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{QuizGenError, Result};

/// 随提示词一并发送的文件附件
#[derive(Debug, Clone)]
pub struct Attachment {
    pub data: Vec<u8>,
    pub mime_type: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// 从全局配置构建客户端
    pub fn from_config() -> Result<Self> {
        let config = AppConfig::get();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.generator.request_timeout))
            .build()
            .map_err(|e| {
                QuizGenError::generation_service(format!("failed to build http client: {e}"))
            })?;

        Ok(Self {
            http,
            endpoint: config.generator.endpoint.clone(),
            model: config.generator.model.clone(),
            api_key: config.generator.api_key.clone(),
        })
    }

    /// 调用 generateContent，返回模型输出的纯文本
    pub async fn generate_content(
        &self,
        prompt: &str,
        attachment: Option<&Attachment>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let mut parts = vec![json!({ "text": prompt })];
        if let Some(file) = attachment {
            parts.push(json!({
                "inline_data": {
                    "mime_type": file.mime_type,
                    "data": base64::engine::general_purpose::STANDARD.encode(&file.data),
                }
            }));
        }

        let body = json!({ "contents": [{ "parts": parts }] });

        debug!("Sending generateContent request to model {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| QuizGenError::generation_service(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(QuizGenError::generation_service(format!(
                "generation API returned {status}: {}",
                truncate(&detail, 200)
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| QuizGenError::generation_service(format!("invalid response body: {e}")))?;

        extract_text(&payload).ok_or_else(|| {
            QuizGenError::generation_service("generation API returned no text candidates")
        })
    }
}

/// 取出第一个 candidate 中所有文本 part 并拼接
fn extract_text(payload: &Value) -> Option<String> {
    let parts = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

pub(crate) fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let payload = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "[{\"question_text\":" },
                        { "text": " \"...\"}]" }
                    ]
                }
            }]
        });
        assert_eq!(
            extract_text(&payload).unwrap(),
            "[{\"question_text\": \"...\"}]"
        );
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        assert!(extract_text(&serde_json::json!({})).is_none());
        assert!(extract_text(&serde_json::json!({ "candidates": [] })).is_none());
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("ab", 3), "ab");
        // 多字节字符不能截在一半
        assert_eq!(truncate("数学测试", 2), "数学");
    }
}
