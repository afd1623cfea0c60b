//! HTTP translation providers.
//!
//! Each provider wraps one public endpoint. Response parsing is separated
//! from transport so it can be tested against canned payloads.

use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;

use super::{TranslateError, TranslationProvider, TranslationRequest};

const MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";
const LIBRETRANSLATE_URL: &str = "https://libretranslate.de/translate";
const GOOGLE_GTX_URL: &str = "https://translate.googleapis.com/translate_a/single";

fn agent(timeout: Duration) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    config.into()
}

fn http_err(e: impl std::fmt::Display) -> TranslateError {
    TranslateError::Http(e.to_string())
}

// --- MyMemory ---

/// `GET /get?q=...&langpair=src|tgt`; JSON envelope with a status field.
pub struct MyMemory;

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

pub(super) fn parse_mymemory(json: &str) -> Result<String, TranslateError> {
    let resp: MyMemoryResponse =
        serde_json::from_str(json).map_err(|e| TranslateError::Parse(e.to_string()))?;
    if resp.response_status != 200 {
        return Err(TranslateError::Provider(format!(
            "MyMemory status {}",
            resp.response_status
        )));
    }
    resp.response_data
        .and_then(|d| d.translated_text)
        .ok_or_else(|| TranslateError::Parse("missing translatedText".to_string()))
}

impl TranslationProvider for MyMemory {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    fn translate(
        &self,
        req: &TranslationRequest,
        timeout: Duration,
    ) -> Result<String, TranslateError> {
        let langpair = format!("{}|{}", req.source_lang, req.target_lang);
        let body = agent(timeout)
            .get(MYMEMORY_URL)
            .query("q", &req.text)
            .query("langpair", &langpair)
            .call()
            .map_err(http_err)?
            .into_body()
            .read_to_string()
            .map_err(http_err)?;
        parse_mymemory(&body)
    }
}

// --- LibreTranslate ---

/// `POST /translate` with a JSON body; public demo instance.
pub struct LibreTranslate;

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

pub(super) fn parse_libretranslate(json: &str) -> Result<String, TranslateError> {
    let resp: LibreResponse =
        serde_json::from_str(json).map_err(|e| TranslateError::Parse(e.to_string()))?;
    if let Some(err) = resp.error {
        return Err(TranslateError::Provider(err));
    }
    resp.translated_text
        .ok_or_else(|| TranslateError::Parse("missing translatedText".to_string()))
}

impl TranslationProvider for LibreTranslate {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    fn translate(
        &self,
        req: &TranslationRequest,
        timeout: Duration,
    ) -> Result<String, TranslateError> {
        let payload = serde_json::json!({
            "q": req.text,
            "source": req.source_lang,
            "target": req.target_lang,
            "format": "text",
        })
        .to_string();
        let body = agent(timeout)
            .post(LIBRETRANSLATE_URL)
            .header("Content-Type", "application/json")
            .send(payload.as_str())
            .map_err(http_err)?
            .into_body()
            .read_to_string()
            .map_err(http_err)?;
        parse_libretranslate(&body)
    }
}

// --- Google gtx ---

/// Unofficial `translate_a/single` endpoint. The response is a nested
/// array; segment texts live at `[0][i][0]`.
pub struct GoogleGtx;

pub(super) fn parse_google_gtx(json: &str) -> Result<String, TranslateError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| TranslateError::Parse(e.to_string()))?;
    let segments = value
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::Parse("unexpected response shape".to_string()))?;
    let joined: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(|s| s.as_str()))
        .collect();
    Ok(joined)
}

impl TranslationProvider for GoogleGtx {
    fn name(&self) -> &'static str {
        "google"
    }

    fn translate(
        &self,
        req: &TranslationRequest,
        timeout: Duration,
    ) -> Result<String, TranslateError> {
        let body = agent(timeout)
            .get(GOOGLE_GTX_URL)
            .query("client", "gtx")
            .query("sl", &req.source_lang)
            .query("tl", &req.target_lang)
            .query("dt", "t")
            .query("q", &req.text)
            .call()
            .map_err(http_err)?
            .into_body()
            .read_to_string()
            .map_err(http_err)?;
        parse_google_gtx(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mymemory_ok() {
        let json = r#"{
            "responseStatus": 200,
            "responseData": {"translatedText": "hello"}
        }"#;
        assert_eq!(parse_mymemory(json).unwrap(), "hello");
    }

    #[test]
    fn test_parse_mymemory_bad_status() {
        let json = r#"{"responseStatus": 403, "responseData": null}"#;
        let err = parse_mymemory(json).unwrap_err();
        assert!(matches!(err, TranslateError::Provider(_)));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_parse_mymemory_missing_text() {
        let json = r#"{"responseStatus": 200, "responseData": {}}"#;
        assert!(matches!(
            parse_mymemory(json).unwrap_err(),
            TranslateError::Parse(_)
        ));
    }

    #[test]
    fn test_parse_libretranslate_ok() {
        let json = r#"{"translatedText": "नमस्ते"}"#;
        assert_eq!(parse_libretranslate(json).unwrap(), "नमस्ते");
    }

    #[test]
    fn test_parse_libretranslate_error_field() {
        let json = r#"{"error": "Slowdown: too many requests"}"#;
        let err = parse_libretranslate(json).unwrap_err();
        assert!(err.to_string().contains("Slowdown"));
    }

    #[test]
    fn test_parse_google_gtx_joins_segments() {
        let json = r#"[[["Hello, ", "హలో, ", null], ["world", "ప్రపంచం", null]], null, "te"]"#;
        assert_eq!(parse_google_gtx(json).unwrap(), "Hello, world");
    }

    #[test]
    fn test_parse_google_gtx_bad_shape() {
        assert!(matches!(
            parse_google_gtx(r#"{"not": "an array"}"#).unwrap_err(),
            TranslateError::Parse(_)
        ));
        assert!(matches!(
            parse_google_gtx("not json").unwrap_err(),
            TranslateError::Parse(_)
        ));
    }
}
