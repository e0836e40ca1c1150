//! Catalogue metadata summary, fetched once for the pipeline view.
//!
//! The JSON document is precomputed at index build time and served as a
//! static asset. It is display-only: a failed fetch leaves the dependent
//! labels in their loading state and nothing retries.

use serde::Deserialize;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetadata {
    pub code: String,
    pub key: String,
    pub name: String,
    pub version: String,
    pub document_type: String,
    pub section_count: u64,
    pub table_count: u64,
    pub file_size: u64,
    #[serde(rename = "fileSizeMB")]
    pub file_size_mb: f64,
    #[serde(default)]
    pub top_keywords: Vec<String>,
    #[serde(default)]
    pub level_counts: HashMap<String, u64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSummary {
    pub codes: Vec<CodeMetadata>,
    pub total_sections: u64,
    pub total_tables: u64,
    pub total_size: u64,
    #[serde(rename = "totalSizeMB")]
    pub total_size_mb: f64,
}

const SUMMARY_URL: &str = "/visualizer/metadata-summary.json";

/// Fetches the summary document. Any failure (network, status, decode)
/// yields `None` after a console debug note; the caller renders a
/// placeholder instead.
pub async fn fetch_summary() -> Option<MetadataSummary> {
    match try_fetch_summary().await {
        Ok(summary) => Some(summary),
        Err(reason) => {
            web_sys::console::debug_1(&JsValue::from_str(&format!(
                "metadata summary unavailable: {reason}"
            )));
            None
        }
    }
}

async fn try_fetch_summary() -> Result<MetadataSummary, String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_str(SUMMARY_URL))
        .await
        .map_err(|_| "network error")?;
    let response: web_sys::Response =
        response.dyn_into().map_err(|_| "fetch returned a non-Response")?;
    if !response.ok() {
        return Err(format!("status {}", response.status()));
    }
    let body = JsFuture::from(response.text().map_err(|_| "unreadable body")?)
        .await
        .map_err(|_| "unreadable body")?;
    let body = body.as_string().ok_or("body is not text")?;
    decode_summary(&body)
}

fn decode_summary(body: &str) -> Result<MetadataSummary, String> {
    serde_json::from_str(body).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{decode_summary, MetadataSummary};

    #[test]
    fn malformed_body_yields_a_reportable_reason() {
        let reason = decode_summary("{\"codes\": [").unwrap_err();
        assert!(!reason.is_empty());
        assert!(decode_summary("").is_err());
    }

    #[test]
    fn decodes_the_published_summary_shape() {
        let json = r#"{
            "codes": [
                {
                    "code": "NBC",
                    "key": "nbc2025",
                    "name": "National Building Code",
                    "version": "2025",
                    "documentType": "code",
                    "sectionCount": 4213,
                    "tableCount": 310,
                    "fileSize": 18350080,
                    "fileSizeMB": 17.5,
                    "topKeywords": ["fire", "egress"],
                    "levelCounts": {"article": 3120, "sentence": 1093}
                }
            ],
            "totalSections": 25707,
            "totalTables": 1842,
            "totalSize": 196083712,
            "totalSizeMB": 187.0
        }"#;
        let summary: MetadataSummary = serde_json::from_str(json).expect("decode");
        assert_eq!(summary.total_sections, 25707);
        assert_eq!(summary.codes.len(), 1);
        assert_eq!(summary.codes[0].section_count, 4213);
        assert_eq!(summary.codes[0].level_counts["article"], 3120);
    }

    #[test]
    fn optional_arrays_default_when_absent() {
        let json = r#"{
            "codes": [
                {
                    "code": "OBC",
                    "key": "obc",
                    "name": "Ontario Building Code",
                    "version": "2024",
                    "documentType": "code",
                    "sectionCount": 3925,
                    "tableCount": 204,
                    "fileSize": 1024,
                    "fileSizeMB": 0.001
                }
            ],
            "totalSections": 3925,
            "totalTables": 204,
            "totalSize": 1024,
            "totalSizeMB": 0.001
        }"#;
        let summary: MetadataSummary = serde_json::from_str(json).expect("decode");
        assert!(summary.codes[0].top_keywords.is_empty());
        assert!(summary.codes[0].level_counts.is_empty());
    }
}
