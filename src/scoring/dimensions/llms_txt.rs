//! llms.txt presence and structure.

use serde_json::json;

use crate::issues::IssueCode;
use crate::page::PageData;
use crate::scoring::factors::{ai_readiness, Rule};
use crate::scoring::signals;
use crate::scoring::state::ScoreState;

pub const RULES: &[Rule] = &[ai_readiness::check_llms_txt_presence, check_llms_txt_quality];

/// Grade the file against the expected layout: `# title`, `> description`,
/// `## section` and at least one markdown link.
pub fn check_llms_txt_quality(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(content) = page
        .site_context
        .as_ref()
        .filter(|c| c.has_llms_txt)
        .and_then(|c| c.llms_txt_content.as_deref())
    else {
        return;
    };

    let missing = signals::llms_txt_missing_elements(content);
    let code = match missing.len() {
        0 => return,
        1 => IssueCode::LlmsTxtIncomplete,
        _ => IssueCode::LlmsTxtQuality,
    };
    state.deduct(code, None, Some(json!({ "missingElements": missing })));
}
