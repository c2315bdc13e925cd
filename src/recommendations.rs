//! Remediation recommendations and strengths.
//!
//! Both are derived from a finished scoring result: recommendations from its
//! issue list, strengths from its pillar scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::issues::{Category, Effort, Issue, IssueCode, IssueRegistry, Severity, BUILTIN};
use crate::platforms::{affected_platforms, Platform};
use crate::scoring::PillarScores;

pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;
pub const DEFAULT_MAX_STRENGTHS: usize = 5;

/// Estimated improvement bounds, in points.
const MIN_IMPROVEMENT: i32 = 3;
const MAX_IMPROVEMENT: i32 = 20;
/// Extra improvement credited to low-scoring pages.
const LOW_SCORE_BONUS: i32 = 2;
const LOW_SCORE_CUTOFF: i32 = 60;

/// Impact used for codes the registry does not know.
const UNKNOWN_IMPACT: i32 = -5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl From<Severity> for Priority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Priority::High,
            Severity::Warning => Priority::Medium,
            Severity::Info => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Band an absolute score impact.
    pub fn from_points(points: i32) -> Self {
        match points.abs() {
            p if p >= 15 => Impact::High,
            p if p >= 8 => Impact::Medium,
            _ => Impact::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub code: IssueCode,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub effort: Effort,
    pub impact: Impact,
    pub estimated_improvement: i32,
    pub affected_platforms: Vec<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_snippet: Option<String>,
}

/// A pillar the page does well on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strength {
    pub category: Category,
    pub title: String,
    pub score: i32,
}

/// Minimum pillar score for a strength.
pub fn strength_threshold(category: Category) -> i32 {
    match category {
        Category::Technical => 85,
        Category::Content => 88,
        Category::AiReadiness => 85,
        Category::Performance => 80,
    }
}

/// Recommendations from the built-in registry.
pub fn generate_recommendations(issues: &[Issue], overall_score: i32, max: usize) -> Vec<Recommendation> {
    generate_recommendations_with_registry(issues, overall_score, max, &BUILTIN)
}

pub fn generate_recommendations_with_registry(
    issues: &[Issue],
    overall_score: i32,
    max: usize,
    registry: &dyn IssueRegistry,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = dedupe_by_code(issues)
        .into_iter()
        .map(|issue| build_recommendation(issue, overall_score, registry))
        .collect();

    recommendations.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.impact.cmp(&b.impact))
            .then(b.estimated_improvement.cmp(&a.estimated_improvement))
    });
    recommendations.truncate(max);
    recommendations
}

/// One issue per code, keeping the most severe. First-seen order is kept.
fn dedupe_by_code(issues: &[Issue]) -> Vec<&Issue> {
    let mut kept: Vec<&Issue> = Vec::new();
    let mut index: HashMap<IssueCode, usize> = HashMap::new();
    for issue in issues {
        match index.get(&issue.code) {
            Some(&i) => {
                if issue.severity.rank() < kept[i].severity.rank() {
                    kept[i] = issue;
                }
            }
            None => {
                index.insert(issue.code, kept.len());
                kept.push(issue);
            }
        }
    }
    kept
}

fn build_recommendation(issue: &Issue, overall_score: i32, registry: &dyn IssueRegistry) -> Recommendation {
    let definition = registry.lookup(issue.code);
    let points = definition.map_or(UNKNOWN_IMPACT, |d| d.score_impact);

    let mut estimated = points.abs().clamp(MIN_IMPROVEMENT, MAX_IMPROVEMENT);
    if overall_score < LOW_SCORE_CUTOFF {
        estimated += LOW_SCORE_BONUS;
    }

    let description = match definition {
        Some(d) => d.recommendation.to_string(),
        None if !issue.recommendation.is_empty() => issue.recommendation.clone(),
        None => format!("Review and resolve {} on this page.", issue.code.title()),
    };

    Recommendation {
        code: issue.code,
        title: issue.code.title(),
        description,
        priority: Priority::from(issue.severity),
        effort: definition.map_or(Effort::Medium, |d| d.effort),
        impact: Impact::from_points(points),
        estimated_improvement: estimated,
        affected_platforms: affected_platforms(issue.category),
        implementation_snippet: definition
            .and_then(|d| d.implementation_snippet)
            .map(str::to_string),
    }
}

/// Pillars that clear their strength threshold with no critical issue.
pub fn generate_strengths(pillars: &PillarScores, issues: &[Issue], max: usize) -> Vec<Strength> {
    let mut strengths: Vec<Strength> = Category::ALL
        .iter()
        .copied()
        .filter_map(|category| {
            let score = match category {
                Category::Technical => pillars.technical,
                Category::Content => pillars.content,
                Category::AiReadiness => pillars.ai_readiness,
                Category::Performance => pillars.performance,
            };
            let blocked = issues
                .iter()
                .any(|i| i.category == category && i.is_critical());
            (score >= strength_threshold(category) && !blocked).then(|| Strength {
                category,
                title: format!("Strong {}", category.label()),
                score,
            })
        })
        .collect();

    strengths.sort_by(|a, b| b.score.cmp(&a.score));
    strengths.truncate(max);
    strengths
}
