//! Sitemap presence and health.

use crate::scoring::factors::{technical, Rule};

pub const RULES: &[Rule] = &[
    technical::check_sitemap_presence,
    technical::check_sitemap_quality,
];

#[cfg(test)]
mod tests {
    use crate::issues::{IssueCode, BUILTIN};
    use crate::page::SitemapAnalysis;
    use crate::scoring::dimensions::{score_dimension, Dimension};
    use crate::scoring::factors::fixtures::clean_page;

    #[test]
    fn test_missing_sitemap() {
        let mut page = clean_page();
        if let Some(ctx) = page.site_context.as_mut() {
            ctx.has_sitemap = false;
        }
        let result = score_dimension(Dimension::Sitemap, &page, &BUILTIN);
        // 100 - 5 * 7.67
        assert_eq!(result.score, 62);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::MissingSitemap);
    }

    #[test]
    fn test_unhealthy_sitemap() {
        let mut page = clean_page();
        if let Some(ctx) = page.site_context.as_mut() {
            ctx.sitemap_analysis = Some(SitemapAnalysis {
                is_valid: false,
                url_count: 10,
                stale_url_count: 8,
                discovered_page_count: 40,
            });
        }
        let result = score_dimension(Dimension::Sitemap, &page, &BUILTIN);
        let codes: Vec<IssueCode> = result.issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                IssueCode::SitemapInvalidFormat,
                IssueCode::SitemapStaleUrls,
                IssueCode::SitemapLowCoverage
            ]
        );
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_stale_urls_only() {
        let mut page = clean_page();
        if let Some(ctx) = page.site_context.as_mut() {
            ctx.sitemap_analysis = Some(SitemapAnalysis {
                is_valid: true,
                url_count: 10,
                stale_url_count: 6,
                discovered_page_count: 12,
            });
        }
        // 100 - 3 * 7.67
        assert_eq!(score_dimension(Dimension::Sitemap, &page, &BUILTIN).score, 77);
    }
}
