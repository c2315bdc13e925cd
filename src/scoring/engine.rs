//! Engine aggregators.
//!
//! The legacy engine runs the four pillar scorers; the v2 engine runs the
//! seven dimension scorers and adapts them back to pillar scores. Both
//! short-circuit on error pages and finish with the same merge, sort and
//! platform projection steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::issues::{sort_by_severity, Category, Issue, IssueCode, IssueRegistry, BUILTIN};
use crate::page::PageData;
use crate::platforms::{project_platforms, PlatformScore};

use super::dimensions::{
    dimensions_to_legacy_scores, score_dimension, Dimension, DimensionScores, PillarScores,
};
use super::factors::score_factor;
use super::state::ScoreState;
use super::thresholds::HTTP_ERROR_STATUS;
use super::weights::{DimensionWeights, PillarWeights};

/// Letter grade cutoffs (minimum overall score).
pub mod grades {
    pub const A_MIN: i32 = 90;
    pub const B_MIN: i32 = 80;
    pub const C_MIN: i32 = 70;
    pub const D_MIN: i32 = 60;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= grades::A_MIN => LetterGrade::A,
            s if s >= grades::B_MIN => LetterGrade::B,
            s if s >= grades::C_MIN => LetterGrade::C,
            s if s >= grades::D_MIN => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which scoring model to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Legacy,
    #[default]
    V2,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Legacy => "legacy",
            EngineKind::V2 => "v2",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(EngineKind::Legacy),
            "v2" => Ok(EngineKind::V2),
            _ => Err(format!("unknown engine: {} (expected legacy or v2)", s)),
        }
    }
}

/// Result of the legacy engine, and the base of the v2 result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub overall_score: i32,
    pub letter_grade: LetterGrade,
    pub technical_score: i32,
    pub content_score: i32,
    pub ai_readiness_score: i32,
    pub performance_score: i32,
    pub platform_scores: Vec<PlatformScore>,
    pub issues: Vec<Issue>,
}

impl ScoringResult {
    fn assemble(overall: i32, pillars: PillarScores, mut issues: Vec<Issue>) -> Self {
        sort_by_severity(&mut issues);
        Self {
            overall_score: overall,
            letter_grade: LetterGrade::from_score(overall),
            technical_score: pillars.technical,
            content_score: pillars.content,
            ai_readiness_score: pillars.ai_readiness,
            performance_score: pillars.performance,
            platform_scores: project_platforms(&pillars),
            issues,
        }
    }

    pub fn pillar_scores(&self) -> PillarScores {
        PillarScores {
            technical: self.technical_score,
            content: self.content_score,
            ai_readiness: self.ai_readiness_score,
            performance: self.performance_score,
        }
    }

    pub fn category_score(&self, category: Category) -> i32 {
        match category {
            Category::Technical => self.technical_score,
            Category::Content => self.content_score,
            Category::AiReadiness => self.ai_readiness_score,
            Category::Performance => self.performance_score,
        }
    }

    pub fn critical_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_critical()).count()
    }
}

/// Result of the v2 engine: the legacy shape plus per-dimension scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResultV2 {
    #[serde(flatten)]
    pub base: ScoringResult,
    pub dimension_scores: DimensionScores,
}

/// Either engine's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngineOutput {
    V2(ScoringResultV2),
    Legacy(ScoringResult),
}

impl EngineOutput {
    pub fn base(&self) -> &ScoringResult {
        match self {
            EngineOutput::Legacy(result) => result,
            EngineOutput::V2(result) => &result.base,
        }
    }

    pub fn dimension_scores(&self) -> Option<&DimensionScores> {
        match self {
            EngineOutput::Legacy(_) => None,
            EngineOutput::V2(result) => Some(&result.dimension_scores),
        }
    }
}

/// Scores pages against an issue registry.
///
/// Engines hold no per-call state and can be shared across threads.
pub struct Engine<'r> {
    registry: &'r dyn IssueRegistry,
    weights: PillarWeights,
    dimension_weights: DimensionWeights,
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine<'static> {
    /// Create an engine over the built-in registry with default weights.
    pub fn new() -> Self {
        Self {
            registry: &BUILTIN,
            weights: PillarWeights::default(),
            dimension_weights: DimensionWeights::default(),
        }
    }
}

impl<'r> Engine<'r> {
    /// Use a different issue registry.
    pub fn with_registry<'a>(self, registry: &'a dyn IssueRegistry) -> Engine<'a> {
        Engine {
            registry,
            weights: self.weights,
            dimension_weights: self.dimension_weights,
        }
    }

    /// Override the legacy pillar weights.
    pub fn weights(mut self, weights: PillarWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Override the v2 dimension weights.
    pub fn dimension_weights(mut self, weights: DimensionWeights) -> Self {
        self.dimension_weights = weights;
        self
    }

    /// Score with the legacy four-pillar model.
    pub fn score(&self, page: &PageData) -> ScoringResult {
        if let Some(result) = self.error_page(page) {
            return result;
        }

        let mut pillars = PillarScores::default();
        let mut issues = Vec::new();
        for category in Category::ALL {
            let factor = score_factor(category, page, self.registry);
            match category {
                Category::Technical => pillars.technical = factor.score,
                Category::Content => pillars.content = factor.score,
                Category::AiReadiness => pillars.ai_readiness = factor.score,
                Category::Performance => pillars.performance = factor.score,
            }
            issues.extend(factor.issues);
        }

        let overall = self.weights.combine(
            pillars.technical,
            pillars.content,
            pillars.ai_readiness,
            pillars.performance,
        );
        tracing::debug!(
            url = %page.url,
            engine = "legacy",
            overall,
            issues = issues.len(),
            "scored page"
        );
        ScoringResult::assemble(overall, pillars, issues)
    }

    /// Score with the seven-dimension model.
    pub fn score_v2(&self, page: &PageData) -> ScoringResultV2 {
        if let Some(base) = self.error_page(page) {
            return ScoringResultV2 {
                base,
                dimension_scores: DimensionScores::default(),
            };
        }

        let mut dimension_scores = DimensionScores::default();
        let mut issues = Vec::new();
        for dimension in Dimension::ALL {
            let result = score_dimension(dimension, page, self.registry);
            dimension_scores.set(dimension, result.score);
            issues.extend(result.issues);
        }

        let overall = dimension_scores.combine(&self.dimension_weights);
        let pillars = dimensions_to_legacy_scores(&dimension_scores);
        tracing::debug!(
            url = %page.url,
            engine = "v2",
            overall,
            issues = issues.len(),
            "scored page"
        );
        ScoringResultV2 {
            base: ScoringResult::assemble(overall, pillars, issues),
            dimension_scores,
        }
    }

    /// Score with the chosen model.
    pub fn score_with(&self, kind: EngineKind, page: &PageData) -> EngineOutput {
        match kind {
            EngineKind::Legacy => EngineOutput::Legacy(self.score(page)),
            EngineKind::V2 => EngineOutput::V2(self.score_v2(page)),
        }
    }

    /// Error pages get zero everywhere and a single status issue.
    fn error_page(&self, page: &PageData) -> Option<ScoringResult> {
        if page.status_code < HTTP_ERROR_STATUS {
            return None;
        }
        tracing::debug!(
            url = %page.url,
            status = page.status_code,
            "error status, skipping scorers"
        );

        let mut state = ScoreState::new(self.registry);
        state.deduct(
            IssueCode::HttpStatus,
            None,
            Some(json!({ "statusCode": page.status_code })),
        );
        Some(ScoringResult::assemble(
            0,
            PillarScores::default(),
            state.finish().issues,
        ))
    }
}

/// Score a page with the legacy engine and the built-in registry.
pub fn score_page(page: &PageData) -> ScoringResult {
    Engine::new().score(page)
}

/// Score a page with the v2 engine and the built-in registry.
pub fn score_page_v2(page: &PageData) -> ScoringResultV2 {
    Engine::new().score_v2(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{IssueDefinition, Severity};
    use crate::scoring::factors::fixtures::clean_page;
    use std::collections::HashMap;

    #[test]
    fn test_letter_grades() {
        assert_eq!(LetterGrade::from_score(100), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(90), LetterGrade::A);
        assert_eq!(LetterGrade::from_score(89), LetterGrade::B);
        assert_eq!(LetterGrade::from_score(80), LetterGrade::B);
        assert_eq!(LetterGrade::from_score(70), LetterGrade::C);
        assert_eq!(LetterGrade::from_score(60), LetterGrade::D);
        assert_eq!(LetterGrade::from_score(59), LetterGrade::F);
        assert_eq!(LetterGrade::from_score(0), LetterGrade::F);
    }

    #[test]
    fn test_engine_kind_parse() {
        assert_eq!("legacy".parse::<EngineKind>().unwrap(), EngineKind::Legacy);
        assert_eq!("V2".parse::<EngineKind>().unwrap(), EngineKind::V2);
        assert!("v3".parse::<EngineKind>().is_err());
        assert_eq!(EngineKind::default(), EngineKind::V2);
    }

    #[test]
    fn test_clean_page_both_engines() {
        let page = clean_page();
        let legacy = score_page(&page);
        assert_eq!(legacy.overall_score, 100);
        assert_eq!(legacy.letter_grade, LetterGrade::A);
        assert!(legacy.issues.is_empty());

        let v2 = score_page_v2(&page);
        assert_eq!(v2.base.overall_score, 100);
        assert_eq!(v2.dimension_scores.content_citeability, 100);
        assert!(v2.base.issues.is_empty());
    }

    #[test]
    fn test_error_status_short_circuits() {
        let mut page = clean_page();
        page.status_code = 404;

        for result in [score_page(&page), score_page_v2(&page).base] {
            assert_eq!(result.overall_score, 0);
            assert_eq!(result.letter_grade, LetterGrade::F);
            assert_eq!(result.pillar_scores(), PillarScores::default());
            assert_eq!(result.issues.len(), 1);
            assert_eq!(result.issues[0].code, IssueCode::HttpStatus);
            assert_eq!(result.issues[0].data, Some(json!({ "statusCode": 404 })));
            assert!(result.platform_scores.iter().all(|p| p.score == 0));
        }
    }

    #[test]
    fn test_issues_sorted_by_severity() {
        let mut page = clean_page();
        page.meta_description = None;
        page.extracted.images_without_alt = 2;
        if let Some(ctx) = page.site_context.as_mut() {
            ctx.has_llms_txt = false;
        }
        let result = score_page(&page);
        let ranks: Vec<u8> = result.issues.iter().map(|i| i.severity.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{:?}", ranks);
        assert_eq!(result.issues[0].code, IssueCode::MissingLlmsTxt);
    }

    #[test]
    fn test_custom_weights() {
        let mut page = clean_page();
        page.extracted.structured_data.clear();
        // ai_readiness drops to 85; weight it alone.
        let engine = Engine::new().weights(PillarWeights {
            technical: 0.0,
            content: 0.0,
            ai_readiness: 1.0,
            performance: 0.0,
        });
        assert_eq!(engine.score(&page).overall_score, 85);
    }

    #[test]
    fn test_custom_registry_drops_unknown_codes() {
        let mut registry: HashMap<IssueCode, IssueDefinition> = HashMap::new();
        registry.insert(
            IssueCode::MissingCanonical,
            IssueDefinition {
                category: Category::Technical,
                severity: Severity::Info,
                message: "no canonical",
                recommendation: "add one",
                score_impact: -1,
                effort: crate::issues::Effort::Low,
                implementation_snippet: None,
            },
        );

        let mut page = clean_page();
        page.canonical_url = None;
        page.meta_description = None;

        let engine = Engine::new().with_registry(&registry);
        let result = engine.score(&page);
        assert_eq!(result.technical_score, 99);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::MissingCanonical);
    }

    #[test]
    fn test_v2_serializes_flat() {
        let value = serde_json::to_value(score_page_v2(&clean_page())).unwrap();
        assert_eq!(value["overallScore"], 100);
        assert_eq!(value["letterGrade"], "A");
        assert_eq!(value["dimensionScores"]["llms_txt"], 100);
        assert!(value.get("base").is_none());
    }
}
