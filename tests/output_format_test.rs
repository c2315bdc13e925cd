//! Tests for the serialized output shape.
//!
//! Downstream consumers (report generator, badge renderer, API responses)
//! depend on these field names, so they are pinned here.

use std::path::PathBuf;

use serde_json::Value;

use aiready::config::ScoringConfig;
use aiready::page;
use aiready::recommendations::generate_recommendations;
use aiready::report::{JsonReport, PageReport};
use aiready::scoring::{score_page, score_page_v2, EngineKind};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn messy_page() -> page::PageData {
    page::load_pages(testdata_path().join("messy.json"))
        .expect("fixture should parse")
        .remove(0)
}

#[test]
fn test_result_field_names() {
    let value = serde_json::to_value(score_page(&messy_page())).unwrap();
    let obj = value.as_object().unwrap();

    for field in [
        "overallScore",
        "letterGrade",
        "technicalScore",
        "contentScore",
        "aiReadinessScore",
        "performanceScore",
        "platformScores",
        "issues",
    ] {
        assert!(obj.contains_key(field), "missing field {}", field);
    }
    assert!(!obj.contains_key("dimensionScores"));
    assert_eq!(value["letterGrade"], "D");
    assert_eq!(value["overallScore"], 60);
}

#[test]
fn test_v2_result_adds_dimensions() {
    let value = serde_json::to_value(score_page_v2(&messy_page())).unwrap();
    assert!(value["overallScore"].is_i64());
    let dims = value["dimensionScores"].as_object().unwrap();
    let keys: Vec<&str> = dims.keys().map(String::as_str).collect();
    for key in [
        "llms_txt",
        "robots_crawlability",
        "sitemap",
        "schema_markup",
        "meta_tags",
        "bot_access",
        "content_citeability",
    ] {
        assert!(keys.contains(&key), "missing dimension {}", key);
    }
    assert_eq!(dims["meta_tags"], 3);
}

#[test]
fn test_issue_shape() {
    let result = serde_json::to_value(score_page(&messy_page())).unwrap();
    let issues = result["issues"].as_array().unwrap();

    let llms = issues
        .iter()
        .find(|i| i["code"] == "MISSING_LLMS_TXT")
        .expect("MISSING_LLMS_TXT should be reported");
    assert_eq!(llms["severity"], "critical");
    assert_eq!(llms["category"], "ai_readiness");
    assert!(llms["message"].is_string());
    assert!(llms["recommendation"].is_string());
    // No context data for this rule, so the key is omitted.
    assert!(llms.get("data").is_none());

    let alt = issues
        .iter()
        .find(|i| i["code"] == "MISSING_ALT_TEXT")
        .expect("MISSING_ALT_TEXT should be reported");
    assert_eq!(alt["data"]["imagesWithoutAlt"], 4);

    let title = issues.iter().find(|i| i["code"] == "MISSING_TITLE").unwrap();
    assert_eq!(title["data"]["titleLength"], 5);
}

#[test]
fn test_platform_score_shape() {
    let result = serde_json::to_value(score_page(&messy_page())).unwrap();
    let platforms = result["platformScores"].as_array().unwrap();
    assert_eq!(platforms.len(), 7);

    let names: Vec<&str> = platforms
        .iter()
        .map(|p| p["platform"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["chatgpt", "claude", "perplexity", "gemini", "copilot", "grok", "meta_ai"]
    );
    for p in platforms {
        assert!(p["score"].is_i64());
        assert!(p["grade"].is_string());
        assert_eq!(p["tips"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn test_recommendation_shape() {
    let result = score_page(&messy_page());
    let recs = generate_recommendations(&result.issues, result.overall_score, 10);
    assert_eq!(recs.len(), 10);

    let value = serde_json::to_value(&recs[0]).unwrap();
    for field in [
        "code",
        "title",
        "description",
        "priority",
        "effort",
        "impact",
        "estimatedImprovement",
        "affectedPlatforms",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(value["priority"], "high");
}

#[test]
fn test_json_report_round_trips() {
    let config = ScoringConfig {
        engine: EngineKind::Legacy,
        min_score: 70,
        ..Default::default()
    };
    let engine = config.engine();
    let pages = page::load_pages(testdata_path().join("batch.json")).unwrap();
    let reports: Vec<PageReport> = pages
        .iter()
        .map(|p| PageReport::build(p, &engine, &config))
        .collect();

    let report = JsonReport::new(config.engine, config.min_score, reports);
    let json = serde_json::to_string_pretty(&report).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["engine"], "legacy");
    assert_eq!(value["minScore"], 70);
    assert_eq!(value["passed"], false);
    let passed: Vec<bool> = value["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["passed"].as_bool().unwrap())
        .collect();
    assert_eq!(passed, vec![true, true, false, false]);

    let parsed: JsonReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.pages.len(), 4);
    assert_eq!(parsed.pages[1].result.base().overall_score, 82);
}
