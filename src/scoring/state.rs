//! The deduction accumulator shared by every scorer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::issues::{Category, Issue, IssueCode, IssueRegistry};

pub const MAX_SCORE: i32 = 100;

/// Per-category multipliers applied to deduction amounts.
///
/// Pillar scorers use [`DeductionScale::UNIT`]. Dimension scorers convert
/// pillar-sized amounts to their own scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeductionScale {
    pub technical: f64,
    pub content: f64,
    pub ai_readiness: f64,
    pub performance: f64,
}

impl DeductionScale {
    pub const UNIT: DeductionScale = DeductionScale {
        technical: 1.0,
        content: 1.0,
        ai_readiness: 1.0,
        performance: 1.0,
    };

    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::Technical => self.technical,
            Category::Content => self.content,
            Category::AiReadiness => self.ai_readiness,
            Category::Performance => self.performance,
        }
    }
}

impl Default for DeductionScale {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Running score and issues for one scorer invocation.
pub struct ScoreState<'r> {
    pub score: i32,
    pub issues: Vec<Issue>,
    deducted: f64,
    scale: DeductionScale,
    registry: &'r dyn IssueRegistry,
}

impl<'r> ScoreState<'r> {
    pub fn new(registry: &'r dyn IssueRegistry) -> Self {
        Self::scaled(registry, DeductionScale::UNIT)
    }

    pub fn scaled(registry: &'r dyn IssueRegistry, scale: DeductionScale) -> Self {
        Self {
            score: MAX_SCORE,
            issues: Vec::new(),
            deducted: 0.0,
            scale,
            registry,
        }
    }

    /// Apply a deduction for `code`.
    ///
    /// `amount` overrides the registry's default impact (tiered and mapped
    /// penalties pass one). Codes the registry does not know are ignored.
    /// Scaled amounts accumulate unrounded; only the score is rounded.
    pub fn deduct(&mut self, code: IssueCode, amount: Option<i32>, data: Option<Value>) {
        let Some(def) = self.registry.lookup(code) else {
            tracing::trace!(code = code.as_str(), "issue code not in registry, skipping");
            return;
        };

        let amount = amount.unwrap_or(def.score_impact).min(0);
        self.deducted -= f64::from(amount) * self.scale.for_category(def.category);
        let remaining = (f64::from(MAX_SCORE) - self.deducted).round();
        self.score = (remaining as i32).clamp(0, MAX_SCORE);
        self.issues.push(Issue {
            code,
            category: def.category,
            severity: def.severity,
            message: def.message.to_string(),
            recommendation: def.recommendation.to_string(),
            data,
        });
    }

    /// Deduct the registry default for `code`.
    pub fn flag(&mut self, code: IssueCode) {
        self.deduct(code, None, None);
    }

    pub fn finish(self) -> FactorResult {
        FactorResult {
            score: self.score,
            issues: self.issues,
        }
    }
}

/// Output of one pillar or dimension scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    pub score: i32,
    pub issues: Vec<Issue>,
}

/// Dimension scorers return the same shape.
pub type DimensionResult = FactorResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{definition, IssueDefinition, Severity, BUILTIN};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_deduct_default_impact() {
        let mut state = ScoreState::new(&BUILTIN);
        state.flag(IssueCode::MissingTitle);
        assert_eq!(state.score, 85);
        assert_eq!(state.issues.len(), 1);
        assert_eq!(state.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_deduct_explicit_amount_and_data() {
        let mut state = ScoreState::new(&BUILTIN);
        state.deduct(
            IssueCode::ThinContent,
            Some(-8),
            Some(json!({"wordCount": 300})),
        );
        assert_eq!(state.score, 92);
        assert_eq!(state.issues[0].data, Some(json!({"wordCount": 300})));
    }

    #[test]
    fn test_deduct_floors_at_zero() {
        let mut state = ScoreState::new(&BUILTIN);
        for _ in 0..10 {
            state.flag(IssueCode::HttpStatus);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.issues.len(), 10);
    }

    #[test]
    fn test_positive_amount_cannot_raise_score() {
        let mut state = ScoreState::new(&BUILTIN);
        state.deduct(IssueCode::MissingH1, Some(25), None);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_unregistered_code_is_noop() {
        let mut registry: HashMap<IssueCode, IssueDefinition> = HashMap::new();
        registry.insert(
            IssueCode::MissingH1,
            definition(IssueCode::MissingH1).unwrap().clone(),
        );

        let mut state = ScoreState::new(&registry);
        state.deduct(IssueCode::MissingTitle, Some(-50), Some(json!({"titleLength": 0})));
        assert_eq!(state.score, 100);
        assert!(state.issues.is_empty());

        state.flag(IssueCode::MissingH1);
        assert_eq!(state.score, 92);
        assert_eq!(state.issues.len(), 1);
    }

    #[test]
    fn test_scaled_deductions_round_once() {
        let scale = DeductionScale {
            technical: 0.5,
            ..DeductionScale::UNIT
        };
        let mut state = ScoreState::scaled(&BUILTIN, scale);
        // Two 1.5-point deductions land on 97, not 96.
        state.flag(IssueCode::HeadingHierarchy);
        state.flag(IssueCode::HeadingHierarchy);
        assert_eq!(state.score, 97);

        // Content is not scaled.
        state.flag(IssueCode::NoInternalLinks);
        assert_eq!(state.score, 89);
    }

    #[test]
    fn test_scaled_deductions_floor_at_zero() {
        let scale = DeductionScale {
            ai_readiness: 6.0,
            ..DeductionScale::UNIT
        };
        let mut state = ScoreState::scaled(&BUILTIN, scale);
        state.flag(IssueCode::MissingLlmsTxt);
        assert_eq!(state.score, 0);
        assert_eq!(state.issues.len(), 1);
    }
}
