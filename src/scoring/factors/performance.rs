//! Performance pillar: Lighthouse audits and page weight.

use serde_json::json;

use crate::issues::IssueCode;
use crate::page::PageData;
use crate::scoring::state::ScoreState;
use crate::scoring::thresholds as t;

use super::Rule;

pub const RULES: &[Rule] = &[check_lighthouse, check_page_size];

pub fn check_lighthouse(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(lh) = page.lighthouse.as_ref() else {
        return;
    };

    let perf_penalty = if lh.performance < t::LH_PERF_POOR {
        Some(t::LH_PERF_POOR_PENALTY)
    } else if lh.performance < t::LH_PERF_FAIR {
        Some(t::LH_PERF_FAIR_PENALTY)
    } else {
        None
    };
    if let Some(penalty) = perf_penalty {
        state.deduct(
            IssueCode::LhPerfLow,
            Some(penalty),
            Some(json!({ "score": lh.performance })),
        );
    }

    for (code, score, min) in [
        (IssueCode::LhSeoLow, lh.seo, t::LH_SEO_MIN),
        (IssueCode::LhA11yLow, lh.accessibility, t::LH_A11Y_MIN),
        (IssueCode::LhBpLow, lh.best_practices, t::LH_BP_MIN),
    ] {
        if score < min {
            state.deduct(code, None, Some(json!({ "score": score })));
        }
    }
}

pub fn check_page_size(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(bytes) = page.site_context.as_ref().and_then(|c| c.page_size_bytes) else {
        return;
    };
    if bytes > t::LARGE_PAGE_BYTES {
        state.deduct(
            IssueCode::LargePageSize,
            None,
            Some(json!({ "pageSizeBytes": bytes })),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::BUILTIN;
    use crate::page::LighthouseScores;
    use crate::scoring::factors::{fixtures::clean_page, run_rules};

    fn codes(page: &PageData) -> (i32, Vec<IssueCode>) {
        let result = run_rules(RULES, page, &BUILTIN);
        (result.score, result.issues.iter().map(|i| i.code).collect())
    }

    fn lighthouse(performance: f64, seo: f64, accessibility: f64, best_practices: f64) -> Option<LighthouseScores> {
        Some(LighthouseScores {
            performance,
            seo,
            accessibility,
            best_practices,
        })
    }

    #[test]
    fn test_perf_tiers() {
        let mut page = clean_page();
        page.lighthouse = lighthouse(0.49, 0.9, 0.9, 0.9);
        assert_eq!(codes(&page), (80, vec![IssueCode::LhPerfLow]));
        page.lighthouse = lighthouse(0.5, 0.9, 0.9, 0.9);
        assert_eq!(codes(&page), (90, vec![IssueCode::LhPerfLow]));
        page.lighthouse = lighthouse(0.8, 0.9, 0.9, 0.9);
        assert_eq!(codes(&page), (100, vec![]));
    }

    #[test]
    fn test_category_floors() {
        let mut page = clean_page();
        page.lighthouse = lighthouse(0.9, 0.79, 0.69, 0.79);
        assert_eq!(
            codes(&page),
            (
                75,
                vec![IssueCode::LhSeoLow, IssueCode::LhA11yLow, IssueCode::LhBpLow]
            )
        );
        page.lighthouse = lighthouse(0.9, 0.8, 0.7, 0.8);
        assert_eq!(codes(&page).0, 100);
    }

    #[test]
    fn test_missing_lighthouse_is_skipped() {
        let mut page = clean_page();
        page.lighthouse = None;
        assert_eq!(codes(&page), (100, vec![]));
    }

    #[test]
    fn test_page_size() {
        let mut page = clean_page();
        if let Some(ctx) = page.site_context.as_mut() {
            ctx.page_size_bytes = Some(3 * 1024 * 1024);
        }
        assert_eq!(codes(&page).0, 100);
        if let Some(ctx) = page.site_context.as_mut() {
            ctx.page_size_bytes = Some(3 * 1024 * 1024 + 1);
        }
        assert_eq!(codes(&page), (90, vec![IssueCode::LargePageSize]));
    }
}
