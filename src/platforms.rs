//! Per-platform score projections.
//!
//! Each AI assistant weighs the four pillars differently. A projection is a
//! fixed re-weighting of the pillar scores plus a few static tips.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::issues::Category;
use crate::scoring::engine::LetterGrade;
use crate::scoring::weights::weighted_score;
use crate::scoring::PillarScores;

/// Weights at or above this make a platform sensitive to a category.
pub const AFFECTED_WEIGHT_MIN: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Chatgpt,
    Claude,
    Perplexity,
    Gemini,
    Copilot,
    Grok,
    MetaAi,
}

/// Pillar weights for one platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformWeights {
    pub technical: f64,
    pub content: f64,
    pub ai_readiness: f64,
    pub performance: f64,
}

const fn weights(technical: f64, content: f64, ai_readiness: f64, performance: f64) -> PlatformWeights {
    PlatformWeights {
        technical,
        content,
        ai_readiness,
        performance,
    }
}

impl PlatformWeights {
    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::Technical => self.technical,
            Category::Content => self.content,
            Category::AiReadiness => self.ai_readiness,
            Category::Performance => self.performance,
        }
    }
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Chatgpt,
        Platform::Claude,
        Platform::Perplexity,
        Platform::Gemini,
        Platform::Copilot,
        Platform::Grok,
        Platform::MetaAi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "chatgpt",
            Platform::Claude => "claude",
            Platform::Perplexity => "perplexity",
            Platform::Gemini => "gemini",
            Platform::Copilot => "copilot",
            Platform::Grok => "grok",
            Platform::MetaAi => "meta_ai",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "ChatGPT",
            Platform::Claude => "Claude",
            Platform::Perplexity => "Perplexity",
            Platform::Gemini => "Gemini",
            Platform::Copilot => "Copilot",
            Platform::Grok => "Grok",
            Platform::MetaAi => "Meta AI",
        }
    }

    pub fn weights(&self) -> PlatformWeights {
        match self {
            Platform::Chatgpt => weights(0.20, 0.35, 0.35, 0.10),
            Platform::Claude => weights(0.15, 0.40, 0.35, 0.10),
            Platform::Perplexity => weights(0.25, 0.30, 0.30, 0.15),
            Platform::Gemini => weights(0.30, 0.25, 0.30, 0.15),
            Platform::Copilot => weights(0.30, 0.25, 0.30, 0.15),
            Platform::Grok => weights(0.20, 0.30, 0.30, 0.20),
            Platform::MetaAi => weights(0.20, 0.35, 0.30, 0.15),
        }
    }

    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            Platform::Chatgpt => &[
                "Allow GPTBot and OAI-SearchBot in robots.txt",
                "Lead sections with a direct, quotable answer",
                "Keep facts and figures current; stale pages are cited less",
            ],
            Platform::Claude => &[
                "Allow ClaudeBot and Claude-User in robots.txt",
                "Publish an llms.txt that links your key documentation",
                "Favor thorough, well-sourced long-form content",
            ],
            Platform::Perplexity => &[
                "Allow PerplexityBot in robots.txt",
                "Cite primary sources with outbound links",
                "Keep pages fast; answers are fetched in real time",
            ],
            Platform::Gemini => &[
                "Allow Google-Extended in robots.txt",
                "Mark up entities with schema.org structured data",
                "Meet Core Web Vitals and keep metadata complete",
            ],
            Platform::Copilot => &[
                "Verify the site in Bing Webmaster Tools",
                "Submit an up-to-date XML sitemap",
                "Use descriptive titles and meta descriptions",
            ],
            Platform::Grok => &[
                "Keep content timely and clearly dated",
                "Link pages from active social profiles",
                "Serve pages quickly to real-time fetchers",
            ],
            Platform::MetaAi => &[
                "Allow Meta-ExternalAgent in robots.txt",
                "Provide complete Open Graph tags",
                "Write in plain, conversational language",
            ],
        }
    }

    /// Project pillar scores onto this platform.
    pub fn project(&self, pillars: &PillarScores) -> i32 {
        let w = self.weights();
        weighted_score(&[
            (w.technical, pillars.technical),
            (w.content, pillars.content),
            (w.ai_readiness, pillars.ai_readiness),
            (w.performance, pillars.performance),
        ])
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One platform's projected score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformScore {
    pub platform: Platform,
    pub score: i32,
    pub grade: LetterGrade,
    pub tips: Vec<String>,
}

/// Project pillar scores onto every platform.
pub fn project_platforms(pillars: &PillarScores) -> Vec<PlatformScore> {
    Platform::ALL
        .iter()
        .map(|platform| {
            let score = platform.project(pillars);
            PlatformScore {
                platform: *platform,
                score,
                grade: LetterGrade::from_score(score),
                tips: platform.tips().iter().map(|t| t.to_string()).collect(),
            }
        })
        .collect()
}

/// Platforms that weight `category` heavily.
pub fn affected_platforms(category: Category) -> Vec<Platform> {
    Platform::ALL
        .iter()
        .copied()
        .filter(|p| p.weights().for_category(category) >= AFFECTED_WEIGHT_MIN)
        .collect()
}
