//! Rule thresholds and fixed penalties.

pub const TITLE_MIN_LEN: usize = 30;
pub const TITLE_MAX_LEN: usize = 60;
pub const META_DESC_MIN_LEN: usize = 120;
pub const META_DESC_MAX_LEN: usize = 160;

pub const HTTP_ERROR_STATUS: u16 = 400;

pub const ALT_TEXT_PENALTY_PER_IMAGE: i32 = 3;
pub const ALT_TEXT_MAX_PENALTY: i32 = 15;

pub const SLOW_RESPONSE_MS: u64 = 2_000;
pub const LARGE_PAGE_BYTES: u64 = 3 * 1024 * 1024;
pub const REDIRECT_CHAIN_MIN_HOPS: usize = 3;

pub const SITEMAP_STALE_RATIO: f64 = 0.5;
pub const SITEMAP_MIN_COVERAGE: f64 = 0.5;

/// Word counts below this are thin.
pub const THIN_CONTENT_WORDS: u32 = 200;
/// Word counts below this are short.
pub const SHORT_CONTENT_WORDS: u32 = 500;
pub const THIN_CONTENT_PENALTY: i32 = -15;
pub const SHORT_CONTENT_PENALTY: i32 = -8;

/// LLM dimension scores map to a 0-20 penalty.
pub const LLM_SCORE_PENALTY_FACTOR: f64 = 0.2;
pub const QUESTION_COVERAGE_MIN: f64 = 50.0;

pub const MIN_INTERNAL_LINKS: u32 = 2;
pub const EXTERNAL_LINK_RATIO: u32 = 3;

pub const DIRECT_ANSWER_MIN_WORDS: u32 = 200;
pub const SUMMARY_MIN_WORDS: u32 = 500;
pub const EEAT_MIN_WORDS: u32 = 500;
pub const PDF_ONLY_MAX_WORDS: u32 = 200;

pub const FLESCH_VERY_HARD: f64 = 30.0;
pub const FLESCH_HARD: f64 = 50.0;
pub const FLESCH_VERY_HARD_PENALTY: i32 = -10;
pub const FLESCH_HARD_PENALTY: i32 = -5;
pub const MIN_TEXT_HTML_RATIO: f64 = 0.10;
pub const AI_SPEAK_MIN_HITS: usize = 3;
pub const UNIFORM_SENTENCE_MIN_WORDS: u32 = 300;
pub const UNIFORM_SENTENCE_MAX_VARIANCE: f64 = 10.0;
pub const UNIFORM_SENTENCE_MIN_SENTENCES: usize = 5;

pub const LH_PERF_POOR: f64 = 0.5;
pub const LH_PERF_FAIR: f64 = 0.8;
pub const LH_PERF_POOR_PENALTY: i32 = -20;
pub const LH_PERF_FAIR_PENALTY: i32 = -10;
pub const LH_SEO_MIN: f64 = 0.8;
pub const LH_A11Y_MIN: f64 = 0.7;
pub const LH_BP_MIN: f64 = 0.8;

