//! Seven-dimension scorers for the v2 engine.
//!
//! Each dimension is a rule list built from the pillar rule bodies in
//! [`crate::scoring::factors`], plus the llms.txt quality rule only this
//! model has. Deductions are rescaled per dimension so that an issue moves
//! the overall score by about the same amount in both engines: a pillar
//! deduction of `n` points costs `n * pillar weight` overall, so inside a
//! dimension it becomes `n * pillar weight / dimension weight`, discounted by
//! [`IMPACT_FACTOR`]. A missing llms.txt therefore empties its dimension while
//! a missing title costs about 2.5 times its pillar amount in meta tags.

pub mod bot_access;
pub mod citeability;
pub mod llms_txt;
pub mod meta_tags;
pub mod robots;
pub mod schema;
pub mod sitemap;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::issues::IssueRegistry;
use crate::page::PageData;

use super::factors::{run_scaled, Rule};
use super::state::{DeductionScale, DimensionResult};
use super::weights::{
    weighted_score, DimensionWeights, DEFAULT_DIMENSION_WEIGHTS, DEFAULT_PILLAR_WEIGHTS,
};

/// Share of its pillar-model impact a deduction carries here. Pillar scores
/// floor at zero and absorb overflow, dimension scores mostly do not; below
/// 1.0 the two engines stay within [`PARITY_TOLERANCE`] of each other.
pub const IMPACT_FACTOR: f64 = 0.92;

/// Largest overall-score difference allowed between the two engines.
pub const PARITY_TOLERANCE: i32 = 15;

/// A scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    LlmsTxt,
    RobotsCrawlability,
    Sitemap,
    SchemaMarkup,
    MetaTags,
    BotAccess,
    ContentCiteability,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::LlmsTxt,
        Dimension::RobotsCrawlability,
        Dimension::Sitemap,
        Dimension::SchemaMarkup,
        Dimension::MetaTags,
        Dimension::BotAccess,
        Dimension::ContentCiteability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::LlmsTxt => "llms_txt",
            Dimension::RobotsCrawlability => "robots_crawlability",
            Dimension::Sitemap => "sitemap",
            Dimension::SchemaMarkup => "schema_markup",
            Dimension::MetaTags => "meta_tags",
            Dimension::BotAccess => "bot_access",
            Dimension::ContentCiteability => "content_citeability",
        }
    }

    /// Human-readable name for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::LlmsTxt => "llms.txt",
            Dimension::RobotsCrawlability => "Robots & Crawlability",
            Dimension::Sitemap => "Sitemap",
            Dimension::SchemaMarkup => "Schema Markup",
            Dimension::MetaTags => "Meta Tags",
            Dimension::BotAccess => "AI Bot Access",
            Dimension::ContentCiteability => "Content Citeability",
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Dimension::LlmsTxt => llms_txt::RULES,
            Dimension::RobotsCrawlability => robots::RULES,
            Dimension::Sitemap => sitemap::RULES,
            Dimension::SchemaMarkup => schema::RULES,
            Dimension::MetaTags => meta_tags::RULES,
            Dimension::BotAccess => bot_access::RULES,
            Dimension::ContentCiteability => citeability::RULES,
        }
    }

    pub fn weight(&self, weights: &DimensionWeights) -> f64 {
        match self {
            Dimension::LlmsTxt => weights.llms_txt,
            Dimension::RobotsCrawlability => weights.robots_crawlability,
            Dimension::Sitemap => weights.sitemap,
            Dimension::SchemaMarkup => weights.schema_markup,
            Dimension::MetaTags => weights.meta_tags,
            Dimension::BotAccess => weights.bot_access,
            Dimension::ContentCiteability => weights.content_citeability,
        }
    }

    /// Multipliers converting pillar-sized deductions to this dimension,
    /// derived from the default weight sets so dimension scores do not move
    /// with caller-supplied weights.
    pub fn deduction_scale(&self) -> DeductionScale {
        let pillars = DEFAULT_PILLAR_WEIGHTS.normalized();
        let share = IMPACT_FACTOR / self.weight(&DEFAULT_DIMENSION_WEIGHTS.normalized());
        DeductionScale {
            technical: pillars.technical * share,
            content: pillars.content * share,
            ai_readiness: pillars.ai_readiness * share,
            performance: pillars.performance * share,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score one dimension.
pub fn score_dimension(
    dimension: Dimension,
    page: &PageData,
    registry: &dyn IssueRegistry,
) -> DimensionResult {
    run_scaled(
        dimension.rules(),
        page,
        registry,
        dimension.deduction_scale(),
    )
}

/// Per-dimension scores, keyed by dimension identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub llms_txt: i32,
    pub robots_crawlability: i32,
    pub sitemap: i32,
    pub schema_markup: i32,
    pub meta_tags: i32,
    pub bot_access: i32,
    pub content_citeability: i32,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> i32 {
        match dimension {
            Dimension::LlmsTxt => self.llms_txt,
            Dimension::RobotsCrawlability => self.robots_crawlability,
            Dimension::Sitemap => self.sitemap,
            Dimension::SchemaMarkup => self.schema_markup,
            Dimension::MetaTags => self.meta_tags,
            Dimension::BotAccess => self.bot_access,
            Dimension::ContentCiteability => self.content_citeability,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: i32) {
        let slot = match dimension {
            Dimension::LlmsTxt => &mut self.llms_txt,
            Dimension::RobotsCrawlability => &mut self.robots_crawlability,
            Dimension::Sitemap => &mut self.sitemap,
            Dimension::SchemaMarkup => &mut self.schema_markup,
            Dimension::MetaTags => &mut self.meta_tags,
            Dimension::BotAccess => &mut self.bot_access,
            Dimension::ContentCiteability => &mut self.content_citeability,
        };
        *slot = score;
    }

    /// Weighted overall score.
    pub fn combine(&self, weights: &DimensionWeights) -> i32 {
        let w = weights.normalized();
        let parts: Vec<(f64, i32)> = Dimension::ALL
            .iter()
            .map(|d| (d.weight(&w), self.get(*d)))
            .collect();
        weighted_score(&parts)
    }
}

/// The four pillar scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PillarScores {
    pub technical: i32,
    pub content: i32,
    pub ai_readiness: i32,
    pub performance: i32,
}

/// Derive pillar scores from dimension scores so v2 results can feed the
/// platform projector and legacy consumers.
pub fn dimensions_to_legacy_scores(scores: &DimensionScores) -> PillarScores {
    PillarScores {
        technical: weighted_score(&[
            (0.4, scores.meta_tags),
            (0.4, scores.robots_crawlability),
            (0.2, scores.sitemap),
        ]),
        content: weighted_score(&[(1.0, scores.content_citeability)]),
        ai_readiness: weighted_score(&[
            (0.30, scores.llms_txt),
            (0.30, scores.bot_access),
            (0.25, scores.schema_markup),
            (0.15, scores.content_citeability),
        ]),
        performance: weighted_score(&[(1.0, scores.robots_crawlability)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::BUILTIN;
    use crate::scoring::factors::fixtures::clean_page;
    use crate::scoring::weights::PillarWeights;

    fn full() -> DimensionScores {
        let mut scores = DimensionScores::default();
        for d in Dimension::ALL {
            scores.set(d, 100);
        }
        scores
    }

    #[test]
    fn test_clean_page_scores_full_everywhere() {
        let page = clean_page();
        for d in Dimension::ALL {
            let result = score_dimension(d, &page, &BUILTIN);
            assert_eq!(result.score, 100, "{} scored {}", d, result.score);
            assert!(result.issues.is_empty(), "{} raised {:?}", d, result.issues);
        }
    }

    #[test]
    fn test_combine_default_weights() {
        assert_eq!(full().combine(&DEFAULT_DIMENSION_WEIGHTS), 100);

        let mut scores = full();
        scores.llms_txt = 0;
        scores.bot_access = 50;
        scores.schema_markup = 40;
        // 0 + 17 + 3 + 2.4 + 9 + 4 + 52
        assert_eq!(scores.combine(&DEFAULT_DIMENSION_WEIGHTS), 87);
    }

    #[test]
    fn test_deduction_scale_tracks_overall_impact() {
        let llms = Dimension::LlmsTxt.deduction_scale();
        assert!((llms.ai_readiness - 0.30 * IMPACT_FACTOR / 0.05).abs() < 1e-9);

        // A deduction moves the overall score by the same amount whichever
        // dimension carries it.
        let dims = DEFAULT_DIMENSION_WEIGHTS.normalized();
        let pillars: PillarWeights = DEFAULT_PILLAR_WEIGHTS.normalized();
        for d in Dimension::ALL {
            let overall = d.deduction_scale().technical * d.weight(&dims);
            assert!(
                (overall - pillars.technical * IMPACT_FACTOR).abs() < 1e-9,
                "{} moves overall by {}",
                d,
                overall
            );
        }
    }

    #[test]
    fn test_adapter() {
        assert_eq!(
            dimensions_to_legacy_scores(&full()),
            PillarScores {
                technical: 100,
                content: 100,
                ai_readiness: 100,
                performance: 100,
            }
        );

        let scores = DimensionScores {
            llms_txt: 0,
            robots_crawlability: 70,
            sitemap: 100,
            schema_markup: 40,
            meta_tags: 62,
            bot_access: 100,
            content_citeability: 49,
        };
        let pillars = dimensions_to_legacy_scores(&scores);
        // .4*62 + .4*70 + .2*100 = 72.8
        assert_eq!(pillars.technical, 73);
        assert_eq!(pillars.content, 49);
        // 0 + 30 + 10 + 7.35 = 47.35
        assert_eq!(pillars.ai_readiness, 47);
        assert_eq!(pillars.performance, 70);
    }

    #[test]
    fn test_dimension_names_serialize() {
        let json = serde_json::to_value(Dimension::ContentCiteability).unwrap();
        assert_eq!(json, "content_citeability");
        for d in Dimension::ALL {
            assert_eq!(serde_json::to_value(d).unwrap(), d.as_str());
        }
    }
}
