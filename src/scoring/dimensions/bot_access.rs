//! AI crawler access and resources that trip up fetchers.

use crate::scoring::factors::{ai_readiness, technical, Rule};

pub const RULES: &[Rule] = &[
    ai_readiness::check_ai_crawlers,
    technical::check_insecure_resources,
];
