//! Legacy pillar scorers.
//!
//! Each pillar is an ordered list of independent rules. Rules never
//! short-circuit one another; every applicable deduction is applied. The rule
//! functions are public because the dimension scorers compose the same bodies.

pub mod ai_readiness;
pub mod content;
pub mod performance;
pub mod technical;

use crate::issues::{Category, IssueRegistry};
use crate::page::PageData;

use super::state::{DeductionScale, FactorResult, ScoreState};

/// One rule check.
pub type Rule = fn(&mut ScoreState<'_>, &PageData);

/// Run `rules` against a fresh 100-point state.
pub fn run_rules(rules: &[Rule], page: &PageData, registry: &dyn IssueRegistry) -> FactorResult {
    run_scaled(rules, page, registry, DeductionScale::UNIT)
}

/// Run `rules` with every deduction multiplied by its category's scale.
pub fn run_scaled(
    rules: &[Rule],
    page: &PageData,
    registry: &dyn IssueRegistry,
    scale: DeductionScale,
) -> FactorResult {
    let mut state = ScoreState::scaled(registry, scale);
    for rule in rules {
        rule(&mut state, page);
    }
    state.finish()
}

/// Rules that make up a pillar.
pub fn rules_for(category: Category) -> &'static [Rule] {
    match category {
        Category::Technical => technical::RULES,
        Category::Content => content::RULES,
        Category::AiReadiness => ai_readiness::RULES,
        Category::Performance => performance::RULES,
    }
}

/// Score one pillar.
pub fn score_factor(
    category: Category,
    page: &PageData,
    registry: &dyn IssueRegistry,
) -> FactorResult {
    run_rules(rules_for(category), page, registry)
}
