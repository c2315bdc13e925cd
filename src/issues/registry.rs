//! Issue definition registry.
//!
//! Maps every issue code to its category, severity, user-facing text,
//! default score impact and fix effort. Scorers never build an `Issue`
//! directly; they go through `ScoreState::deduct`, which reads from here.

use std::collections::HashMap;

use phf::phf_map;

use super::types::{Category, Effort, IssueCode, Severity};

/// Static description of one issue code.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDefinition {
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    pub recommendation: &'static str,
    /// Default deduction (zero or negative).
    pub score_impact: i32,
    pub effort: Effort,
    pub implementation_snippet: Option<&'static str>,
}

/// Read-only source of issue definitions.
///
/// A lookup miss is not an error: the engine treats unknown codes as no-ops so
/// that an older registry can be paired with a newer engine.
pub trait IssueRegistry: Send + Sync {
    fn lookup(&self, code: IssueCode) -> Option<&IssueDefinition>;
}

/// The registry compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl IssueRegistry for BuiltinRegistry {
    fn lookup(&self, code: IssueCode) -> Option<&IssueDefinition> {
        ISSUE_DEFINITIONS.get(code.as_str())
    }
}

impl IssueRegistry for HashMap<IssueCode, IssueDefinition> {
    fn lookup(&self, code: IssueCode) -> Option<&IssueDefinition> {
        self.get(&code)
    }
}

/// Shared instance of the built-in registry.
pub static BUILTIN: BuiltinRegistry = BuiltinRegistry;

/// Look up a code in the built-in registry.
pub fn definition(code: IssueCode) -> Option<&'static IssueDefinition> {
    ISSUE_DEFINITIONS.get(code.as_str())
}

static ISSUE_DEFINITIONS: phf::Map<&'static str, IssueDefinition> = phf_map! {
    // ---------------------------------------------------------------- technical
    "MISSING_TITLE" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Critical,
        message: "Page title is missing or outside the 30-60 character range",
        recommendation: "Add a unique, descriptive <title> between 30 and 60 characters that states the page topic.",
        score_impact: -15,
        effort: Effort::Low,
        implementation_snippet: Some("<title>Primary Topic - Brand Name</title>"),
    },
    "MISSING_META_DESC" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Meta description is missing or outside the 120-160 character range",
        recommendation: "Write a meta description of 120-160 characters that summarizes the page in plain language.",
        score_impact: -10,
        effort: Effort::Low,
        implementation_snippet: Some("<meta name=\"description\" content=\"...\">"),
    },
    "MISSING_H1" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Page has no H1 heading",
        recommendation: "Add exactly one H1 heading that names the main topic of the page.",
        score_impact: -8,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "MULTIPLE_H1" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Page has more than one H1 heading",
        recommendation: "Keep a single H1 and demote the other top-level headings to H2.",
        score_impact: -5,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "HEADING_HIERARCHY" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Info,
        message: "Heading levels are skipped",
        recommendation: "Nest headings sequentially (H1 > H2 > H3) so parsers can recover the outline.",
        score_impact: -3,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "HTTP_STATUS" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Critical,
        message: "Page returned an HTTP error status",
        recommendation: "Fix the server response so the page returns 200, or redirect it to a working URL.",
        score_impact: -25,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "NOINDEX_SET" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Critical,
        message: "Robots meta tag blocks indexing (noindex)",
        recommendation: "Remove the noindex directive if this page should appear in search and AI answers.",
        score_impact: -20,
        effort: Effort::Low,
        implementation_snippet: Some("<meta name=\"robots\" content=\"index, follow\">"),
    },
    "MISSING_CANONICAL" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "No canonical URL is declared",
        recommendation: "Add a rel=canonical link pointing at the preferred URL of this page.",
        score_impact: -8,
        effort: Effort::Low,
        implementation_snippet: Some("<link rel=\"canonical\" href=\"https://example.com/page\">"),
    },
    "MISSING_ALT_TEXT" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Images are missing alt text",
        recommendation: "Describe every meaningful image with alt text; use alt=\"\" for decorative images.",
        score_impact: -3,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "MISSING_OG_TAGS" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Info,
        message: "Open Graph tags are incomplete",
        recommendation: "Add og:title, og:description and og:image so previews and AI citations render well.",
        score_impact: -5,
        effort: Effort::Low,
        implementation_snippet: Some("<meta property=\"og:title\" content=\"...\">"),
    },
    "SLOW_RESPONSE" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Server response time exceeds 2 seconds",
        recommendation: "Reduce time to first byte with caching, a CDN or faster backend queries.",
        score_impact: -10,
        effort: Effort::High,
        implementation_snippet: None,
    },
    "MISSING_SITEMAP" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "No XML sitemap was found",
        recommendation: "Publish a sitemap.xml and reference it from robots.txt.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: Some("Sitemap: https://example.com/sitemap.xml"),
    },
    "SITEMAP_INVALID_FORMAT" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Sitemap could not be parsed as valid XML",
        recommendation: "Validate the sitemap against the sitemaps.org schema and fix malformed entries.",
        score_impact: -8,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "SITEMAP_STALE_URLS" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Info,
        message: "Most sitemap URLs have stale lastmod dates",
        recommendation: "Keep lastmod accurate so crawlers revisit pages that changed.",
        score_impact: -3,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "SITEMAP_LOW_COVERAGE" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Info,
        message: "Sitemap lists fewer than half of the discovered pages",
        recommendation: "Generate the sitemap from your routes or CMS so every indexable page is listed.",
        score_impact: -3,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "REDIRECT_CHAIN" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Page is reached through a chain of three or more redirects",
        recommendation: "Point links and redirects straight at the final URL.",
        score_impact: -8,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "MIXED_CONTENT" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Warning,
        message: "Page loads insecure (http) resources over https",
        recommendation: "Serve every script, stylesheet and image over https.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "UNSAFE_BLANK_LINKS" => IssueDefinition {
        category: Category::Technical,
        severity: Severity::Info,
        message: "Links open new tabs without rel=\"noopener\"",
        recommendation: "Add rel=\"noopener noreferrer\" to links that use target=\"_blank\".",
        score_impact: -2,
        effort: Effort::Low,
        implementation_snippet: Some("<a href=\"...\" target=\"_blank\" rel=\"noopener noreferrer\">"),
    },
    // ------------------------------------------------------------------ content
    "THIN_CONTENT" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Page has too little text to be cited",
        recommendation: "Expand the page to at least 500 words of substantive, original content.",
        score_impact: -15,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "CONTENT_DEPTH" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Content does not cover the topic in depth",
        recommendation: "Cover the subtopics and follow-up questions a reader would have.",
        score_impact: -10,
        effort: Effort::High,
        implementation_snippet: None,
    },
    "CONTENT_CLARITY" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Content is hard to follow",
        recommendation: "Use short paragraphs, descriptive subheadings and plain language.",
        score_impact: -10,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "CONTENT_AUTHORITY" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Content lacks authority signals",
        recommendation: "Cite sources, name the author and show credentials or first-hand data.",
        score_impact: -10,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "DUPLICATE_CONTENT" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Page content duplicates another URL on the site",
        recommendation: "Consolidate duplicates or point them at one canonical URL.",
        score_impact: -15,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "NO_INTERNAL_LINKS" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Page has fewer than two internal links",
        recommendation: "Link to related pages on your site so crawlers can discover context.",
        score_impact: -8,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "EXCESSIVE_LINKS" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Info,
        message: "External links outnumber internal links more than three to one",
        recommendation: "Balance outbound links with links to your own supporting content.",
        score_impact: -3,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "MISSING_FAQ_STRUCTURE" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Info,
        message: "Question headings are not marked up as FAQ",
        recommendation: "Wrap question-and-answer sections in FAQPage structured data.",
        score_impact: -5,
        effort: Effort::Low,
        implementation_snippet: Some("{\"@context\":\"https://schema.org\",\"@type\":\"FAQPage\",\"mainEntity\":[]}"),
    },
    "POOR_READABILITY" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Text is difficult to read",
        recommendation: "Shorten sentences and replace jargon to reach a Flesch reading ease of 50 or more.",
        score_impact: -10,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "LOW_TEXT_HTML_RATIO" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Info,
        message: "Visible text is under 10% of the HTML payload",
        recommendation: "Trim markup and inline scripts, or add more readable text.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "AI_ASSISTANT_SPEAK" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Warning,
        message: "Text relies on generic AI-assistant phrasing",
        recommendation: "Rewrite boilerplate transitions with specific, first-hand statements.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "UNIFORM_SENTENCE_LENGTH" => IssueDefinition {
        category: Category::Content,
        severity: Severity::Info,
        message: "Sentence lengths are unusually uniform",
        recommendation: "Vary sentence length and structure so the text reads naturally.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    // ------------------------------------------------------------- ai readiness
    "MISSING_LLMS_TXT" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Critical,
        message: "Site has no llms.txt file",
        recommendation: "Publish /llms.txt describing the site and linking its most important pages.",
        score_impact: -20,
        effort: Effort::Low,
        implementation_snippet: Some("# Site Name\n> One-line description\n\n## Docs\n- [Guide](https://example.com/guide)"),
    },
    "LLMS_TXT_QUALITY" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "llms.txt is missing several required elements",
        recommendation: "Give llms.txt an H1 title, a > summary line, ## sections and markdown links.",
        score_impact: -15,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "LLMS_TXT_INCOMPLETE" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Info,
        message: "llms.txt is missing one required element",
        recommendation: "Add the missing llms.txt element so assistants can parse the file fully.",
        score_impact: -5,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "AI_CRAWLER_BLOCKED" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Critical,
        message: "robots.txt blocks one or more AI crawlers",
        recommendation: "Allow GPTBot, ClaudeBot, PerplexityBot and similar agents in robots.txt.",
        score_impact: -25,
        effort: Effort::Low,
        implementation_snippet: Some("User-agent: GPTBot\nAllow: /"),
    },
    "NO_STRUCTURED_DATA" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Page has no structured data",
        recommendation: "Add JSON-LD describing the page (WebPage, Article, Product or Organization).",
        score_impact: -15,
        effort: Effort::Medium,
        implementation_snippet: Some("<script type=\"application/ld+json\">{\"@context\":\"https://schema.org\",\"@type\":\"WebPage\"}</script>"),
    },
    "INCOMPLETE_SCHEMA" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Structured data is missing required properties",
        recommendation: "Fill in the required properties for each schema.org type you declare.",
        score_impact: -8,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "INVALID_SCHEMA" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Structured data object has no @type",
        recommendation: "Give every JSON-LD object an @type from schema.org.",
        score_impact: -8,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "CITATION_WORTHINESS" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Content is unlikely to be cited by AI assistants",
        recommendation: "Add concrete facts, statistics and quotable definitions.",
        score_impact: -10,
        effort: Effort::High,
        implementation_snippet: None,
    },
    "NO_DIRECT_ANSWERS" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Question headings are not followed by direct answers",
        recommendation: "Answer each question heading in its first sentence, then elaborate.",
        score_impact: -10,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "MISSING_ENTITY_MARKUP" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Info,
        message: "Structured data names no entity (Person, Organization, Product, Place, Event)",
        recommendation: "Declare who or what the page is about with entity markup.",
        score_impact: -5,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "NO_SUMMARY_SECTION" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Info,
        message: "Long page has no summary section",
        recommendation: "Add a Summary or Key Takeaways section that condenses the page.",
        score_impact: -5,
        effort: Effort::Low,
        implementation_snippet: None,
    },
    "POOR_QUESTION_COVERAGE" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Content structure answers few likely user questions",
        recommendation: "Organize content around the questions users ask about this topic.",
        score_impact: -10,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "PDF_ONLY_CONTENT" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Info,
        message: "Most of the content is locked in linked PDFs",
        recommendation: "Publish the key PDF content as HTML on the page itself.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "LOW_EEAT_SCORE" => IssueDefinition {
        category: Category::AiReadiness,
        severity: Severity::Warning,
        message: "Headings show no experience, expertise or data signals",
        recommendation: "Surface first-hand experience, original data or research in the main headings.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    // -------------------------------------------------------------- performance
    "LH_PERF_LOW" => IssueDefinition {
        category: Category::Performance,
        severity: Severity::Warning,
        message: "Lighthouse performance score is low",
        recommendation: "Optimize images, defer non-critical scripts and reduce main-thread work.",
        score_impact: -20,
        effort: Effort::High,
        implementation_snippet: None,
    },
    "LH_SEO_LOW" => IssueDefinition {
        category: Category::Performance,
        severity: Severity::Warning,
        message: "Lighthouse SEO score is below 80",
        recommendation: "Resolve the failing Lighthouse SEO audits.",
        score_impact: -15,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "LH_A11Y_LOW" => IssueDefinition {
        category: Category::Performance,
        severity: Severity::Info,
        message: "Lighthouse accessibility score is below 70",
        recommendation: "Fix contrast, labels and landmark issues reported by Lighthouse.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "LH_BP_LOW" => IssueDefinition {
        category: Category::Performance,
        severity: Severity::Info,
        message: "Lighthouse best-practices score is below 80",
        recommendation: "Address console errors, deprecated APIs and insecure requests.",
        score_impact: -5,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
    "LARGE_PAGE_SIZE" => IssueDefinition {
        category: Category::Performance,
        severity: Severity::Warning,
        message: "Page weighs more than 3 MB",
        recommendation: "Compress assets and lazy-load below-the-fold media.",
        score_impact: -10,
        effort: Effort::Medium,
        implementation_snippet: None,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_registered() {
        for code in IssueCode::ALL {
            assert!(
                definition(code).is_some(),
                "{} has no registry entry",
                code
            );
        }
        assert_eq!(ISSUE_DEFINITIONS.len(), IssueCode::ALL.len());
    }

    #[test]
    fn test_registry_keys_are_known_codes() {
        for key in ISSUE_DEFINITIONS.keys() {
            assert!(IssueCode::parse(key).is_some(), "unknown registry key {}", key);
        }
    }

    #[test]
    fn test_impacts_are_deductions() {
        for code in IssueCode::ALL {
            let def = definition(code).unwrap();
            assert!(def.score_impact <= 0, "{} has a positive impact", code);
            assert!(!def.message.is_empty());
            assert!(!def.recommendation.is_empty());
        }
    }

    #[test]
    fn test_http_status_is_critical() {
        let def = BUILTIN.lookup(IssueCode::HttpStatus).unwrap();
        assert_eq!(def.severity, Severity::Critical);
        assert_eq!(def.score_impact, -25);
    }

    #[test]
    fn test_map_registry_lookup() {
        let mut custom: HashMap<IssueCode, IssueDefinition> = HashMap::new();
        custom.insert(
            IssueCode::MissingTitle,
            definition(IssueCode::MissingTitle).unwrap().clone(),
        );
        assert!(custom.lookup(IssueCode::MissingTitle).is_some());
        assert!(custom.lookup(IssueCode::MissingH1).is_none());
    }
}
