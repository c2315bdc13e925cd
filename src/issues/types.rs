//! Core types for scoring issues.

use serde::{Deserialize, Serialize};

/// Severity levels for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank: critical issues come first.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// The legacy pillar an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Content,
    AiReadiness,
    Performance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Technical,
        Category::Content,
        Category::AiReadiness,
        Category::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Content => "content",
            Category::AiReadiness => "ai_readiness",
            Category::Performance => "performance",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical SEO",
            Category::Content => "Content Quality",
            Category::AiReadiness => "AI Readiness",
            Category::Performance => "Performance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much work a fix takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        }
    }
}

/// Every issue code the engine can emit.
///
/// The set is closed: scorers can only reference codes listed here, and the
/// built-in registry is tested to cover all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    // Technical
    MissingTitle,
    MissingMetaDesc,
    MissingH1,
    MultipleH1,
    HeadingHierarchy,
    HttpStatus,
    NoindexSet,
    MissingCanonical,
    MissingAltText,
    MissingOgTags,
    SlowResponse,
    MissingSitemap,
    SitemapInvalidFormat,
    SitemapStaleUrls,
    SitemapLowCoverage,
    RedirectChain,
    MixedContent,
    UnsafeBlankLinks,
    // Content
    ThinContent,
    ContentDepth,
    ContentClarity,
    ContentAuthority,
    DuplicateContent,
    NoInternalLinks,
    ExcessiveLinks,
    MissingFaqStructure,
    PoorReadability,
    LowTextHtmlRatio,
    AiAssistantSpeak,
    UniformSentenceLength,
    // AI readiness
    MissingLlmsTxt,
    LlmsTxtQuality,
    LlmsTxtIncomplete,
    AiCrawlerBlocked,
    NoStructuredData,
    IncompleteSchema,
    InvalidSchema,
    CitationWorthiness,
    NoDirectAnswers,
    MissingEntityMarkup,
    NoSummarySection,
    PoorQuestionCoverage,
    PdfOnlyContent,
    LowEeatScore,
    // Performance
    LhPerfLow,
    LhSeoLow,
    LhA11yLow,
    LhBpLow,
    LargePageSize,
}

impl IssueCode {
    pub const ALL: [IssueCode; 49] = [
        IssueCode::MissingTitle,
        IssueCode::MissingMetaDesc,
        IssueCode::MissingH1,
        IssueCode::MultipleH1,
        IssueCode::HeadingHierarchy,
        IssueCode::HttpStatus,
        IssueCode::NoindexSet,
        IssueCode::MissingCanonical,
        IssueCode::MissingAltText,
        IssueCode::MissingOgTags,
        IssueCode::SlowResponse,
        IssueCode::MissingSitemap,
        IssueCode::SitemapInvalidFormat,
        IssueCode::SitemapStaleUrls,
        IssueCode::SitemapLowCoverage,
        IssueCode::RedirectChain,
        IssueCode::MixedContent,
        IssueCode::UnsafeBlankLinks,
        IssueCode::ThinContent,
        IssueCode::ContentDepth,
        IssueCode::ContentClarity,
        IssueCode::ContentAuthority,
        IssueCode::DuplicateContent,
        IssueCode::NoInternalLinks,
        IssueCode::ExcessiveLinks,
        IssueCode::MissingFaqStructure,
        IssueCode::PoorReadability,
        IssueCode::LowTextHtmlRatio,
        IssueCode::AiAssistantSpeak,
        IssueCode::UniformSentenceLength,
        IssueCode::MissingLlmsTxt,
        IssueCode::LlmsTxtQuality,
        IssueCode::LlmsTxtIncomplete,
        IssueCode::AiCrawlerBlocked,
        IssueCode::NoStructuredData,
        IssueCode::IncompleteSchema,
        IssueCode::InvalidSchema,
        IssueCode::CitationWorthiness,
        IssueCode::NoDirectAnswers,
        IssueCode::MissingEntityMarkup,
        IssueCode::NoSummarySection,
        IssueCode::PoorQuestionCoverage,
        IssueCode::PdfOnlyContent,
        IssueCode::LowEeatScore,
        IssueCode::LhPerfLow,
        IssueCode::LhSeoLow,
        IssueCode::LhA11yLow,
        IssueCode::LhBpLow,
        IssueCode::LargePageSize,
    ];

    /// Codes only the dimension engine emits.
    pub const V2_ONLY: [IssueCode; 2] = [IssueCode::LlmsTxtQuality, IssueCode::LlmsTxtIncomplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::MissingTitle => "MISSING_TITLE",
            IssueCode::MissingMetaDesc => "MISSING_META_DESC",
            IssueCode::MissingH1 => "MISSING_H1",
            IssueCode::MultipleH1 => "MULTIPLE_H1",
            IssueCode::HeadingHierarchy => "HEADING_HIERARCHY",
            IssueCode::HttpStatus => "HTTP_STATUS",
            IssueCode::NoindexSet => "NOINDEX_SET",
            IssueCode::MissingCanonical => "MISSING_CANONICAL",
            IssueCode::MissingAltText => "MISSING_ALT_TEXT",
            IssueCode::MissingOgTags => "MISSING_OG_TAGS",
            IssueCode::SlowResponse => "SLOW_RESPONSE",
            IssueCode::MissingSitemap => "MISSING_SITEMAP",
            IssueCode::SitemapInvalidFormat => "SITEMAP_INVALID_FORMAT",
            IssueCode::SitemapStaleUrls => "SITEMAP_STALE_URLS",
            IssueCode::SitemapLowCoverage => "SITEMAP_LOW_COVERAGE",
            IssueCode::RedirectChain => "REDIRECT_CHAIN",
            IssueCode::MixedContent => "MIXED_CONTENT",
            IssueCode::UnsafeBlankLinks => "UNSAFE_BLANK_LINKS",
            IssueCode::ThinContent => "THIN_CONTENT",
            IssueCode::ContentDepth => "CONTENT_DEPTH",
            IssueCode::ContentClarity => "CONTENT_CLARITY",
            IssueCode::ContentAuthority => "CONTENT_AUTHORITY",
            IssueCode::DuplicateContent => "DUPLICATE_CONTENT",
            IssueCode::NoInternalLinks => "NO_INTERNAL_LINKS",
            IssueCode::ExcessiveLinks => "EXCESSIVE_LINKS",
            IssueCode::MissingFaqStructure => "MISSING_FAQ_STRUCTURE",
            IssueCode::PoorReadability => "POOR_READABILITY",
            IssueCode::LowTextHtmlRatio => "LOW_TEXT_HTML_RATIO",
            IssueCode::AiAssistantSpeak => "AI_ASSISTANT_SPEAK",
            IssueCode::UniformSentenceLength => "UNIFORM_SENTENCE_LENGTH",
            IssueCode::MissingLlmsTxt => "MISSING_LLMS_TXT",
            IssueCode::LlmsTxtQuality => "LLMS_TXT_QUALITY",
            IssueCode::LlmsTxtIncomplete => "LLMS_TXT_INCOMPLETE",
            IssueCode::AiCrawlerBlocked => "AI_CRAWLER_BLOCKED",
            IssueCode::NoStructuredData => "NO_STRUCTURED_DATA",
            IssueCode::IncompleteSchema => "INCOMPLETE_SCHEMA",
            IssueCode::InvalidSchema => "INVALID_SCHEMA",
            IssueCode::CitationWorthiness => "CITATION_WORTHINESS",
            IssueCode::NoDirectAnswers => "NO_DIRECT_ANSWERS",
            IssueCode::MissingEntityMarkup => "MISSING_ENTITY_MARKUP",
            IssueCode::NoSummarySection => "NO_SUMMARY_SECTION",
            IssueCode::PoorQuestionCoverage => "POOR_QUESTION_COVERAGE",
            IssueCode::PdfOnlyContent => "PDF_ONLY_CONTENT",
            IssueCode::LowEeatScore => "LOW_EEAT_SCORE",
            IssueCode::LhPerfLow => "LH_PERF_LOW",
            IssueCode::LhSeoLow => "LH_SEO_LOW",
            IssueCode::LhA11yLow => "LH_A11Y_LOW",
            IssueCode::LhBpLow => "LH_BP_LOW",
            IssueCode::LargePageSize => "LARGE_PAGE_SIZE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        IssueCode::ALL.iter().copied().find(|code| code.as_str() == s)
    }

    /// Title-cased form of the code, e.g. `MISSING_META_DESC` -> "Missing Meta Desc".
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation found on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    pub recommendation: String,
    /// Context for the UI, e.g. `{"titleLength": 0}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Issue {
    /// Whether this issue blocks the page outright.
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// Stable sort by severity rank; equal-severity issues keep emission order.
pub fn sort_by_severity(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| issue.severity.rank());
}
