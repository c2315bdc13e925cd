//! Input snapshot of one crawled page.
//!
//! `PageData` is produced by the crawler. Top-level and `siteContext` keys are
//! camelCase; the `extracted` block keeps the extractor's snake_case keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub url: String,
    pub status_code: u16,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub content_hash: Option<String>,
    #[serde(default)]
    pub extracted: ExtractedData,
    #[serde(default)]
    pub lighthouse: Option<LighthouseScores>,
    #[serde(default)]
    pub llm_scores: Option<LlmScores>,
    #[serde(default)]
    pub redirect_chain: Option<Vec<RedirectHop>>,
    #[serde(default)]
    pub site_context: Option<SiteContext>,
}

/// Signals pulled out of the page HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default)]
    pub h1: Vec<String>,
    #[serde(default)]
    pub h2: Vec<String>,
    #[serde(default)]
    pub h3: Vec<String>,
    #[serde(default)]
    pub h4: Vec<String>,
    #[serde(default)]
    pub h5: Vec<String>,
    #[serde(default)]
    pub h6: Vec<String>,
    #[serde(default)]
    pub schema_types: Vec<String>,
    /// Raw JSON-LD objects.
    #[serde(default)]
    pub structured_data: Vec<Value>,
    #[serde(default)]
    pub internal_links: u32,
    #[serde(default)]
    pub external_links: u32,
    #[serde(default)]
    pub images_without_alt: u32,
    #[serde(default)]
    pub has_robots_meta: bool,
    #[serde(default)]
    pub robots_directives: Vec<String>,
    #[serde(default)]
    pub og_tags: BTreeMap<String, String>,
    #[serde(default)]
    pub readability: Option<Readability>,
    #[serde(default)]
    pub pdf_links: Vec<String>,
    #[serde(default)]
    pub cors_mixed_content: u32,
    #[serde(default)]
    pub cors_unsafe_blank_links: u32,
    /// Visible body text, when the crawler kept it.
    #[serde(default)]
    pub body_text: Option<String>,
}

impl ExtractedData {
    /// Heading lists from H1 to H6.
    pub fn headings(&self) -> [&[String]; 6] {
        [&self.h1, &self.h2, &self.h3, &self.h4, &self.h5, &self.h6]
    }

    /// Every heading text in document-level order (H1s first).
    pub fn all_headings(&self) -> impl Iterator<Item = &str> {
        self.headings()
            .into_iter()
            .flat_map(|level| level.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    #[serde(default)]
    pub flesch_score: Option<f64>,
    #[serde(default)]
    pub avg_sentence_length: Option<f64>,
    #[serde(default)]
    pub sentence_length_variance: Option<f64>,
    /// Visible text bytes divided by HTML bytes (0-1).
    #[serde(default)]
    pub text_html_ratio: Option<f64>,
}

/// Lighthouse category scores, each 0-1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LighthouseScores {
    pub performance: f64,
    pub seo: f64,
    pub accessibility: f64,
    pub best_practices: f64,
}

/// Content-quality dimensions rated by an LLM, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LlmScores {
    pub clarity: f64,
    pub authority: f64,
    pub comprehensiveness: f64,
    pub structure: f64,
    pub citation_worthiness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectHop {
    pub url: String,
    pub status_code: u16,
}

/// Cross-page signals gathered during the site crawl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContext {
    #[serde(default)]
    pub has_llms_txt: bool,
    #[serde(default)]
    pub ai_crawlers_blocked: Vec<String>,
    #[serde(default)]
    pub has_sitemap: bool,
    #[serde(default)]
    pub sitemap_analysis: Option<SitemapAnalysis>,
    /// Content hash -> first URL seen with that hash.
    #[serde(default)]
    pub content_hashes: BTreeMap<String, String>,
    #[serde(default)]
    pub response_time_ms: Option<u64>,
    #[serde(default)]
    pub page_size_bytes: Option<u64>,
    #[serde(default)]
    pub llms_txt_content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapAnalysis {
    pub is_valid: bool,
    #[serde(default)]
    pub url_count: u32,
    #[serde(default)]
    pub stale_url_count: u32,
    #[serde(default)]
    pub discovered_page_count: u32,
}

/// Pages accepted by `load_pages`: a single object or an array.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageInput {
    Many(Vec<PageData>),
    One(Box<PageData>),
}

/// Parse one page or a list of pages from JSON text.
pub fn parse_pages(json: &str) -> Result<Vec<PageData>> {
    let input: PageInput = serde_json::from_str(json)?;
    Ok(match input {
        PageInput::Many(pages) => pages,
        PageInput::One(page) => vec![*page],
    })
}

/// Load pages from a JSON file.
pub fn load_pages<P: AsRef<Path>>(path: P) -> Result<Vec<PageData>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_pages(&content)
}
