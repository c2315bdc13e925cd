//! Structured data presence, completeness and entity coverage.

use crate::scoring::factors::{ai_readiness, Rule};

pub const RULES: &[Rule] = &[
    ai_readiness::check_structured_data_presence,
    ai_readiness::check_schema_completeness,
    ai_readiness::check_schema_validity,
    ai_readiness::check_entity_markup,
];
