//! Technical SEO pillar: crawl and metadata hygiene.

use serde_json::json;

use crate::issues::IssueCode;
use crate::page::PageData;
use crate::scoring::state::ScoreState;
use crate::scoring::thresholds as t;

use super::Rule;

pub const RULES: &[Rule] = &[
    check_title,
    check_meta_description,
    check_h1,
    check_heading_hierarchy,
    check_http_status,
    check_noindex,
    check_canonical,
    check_alt_text,
    check_og_tags,
    check_response_time,
    check_sitemap_presence,
    check_sitemap_quality,
    check_redirect_chain,
    check_insecure_resources,
];

/// Open Graph properties every page should carry.
const REQUIRED_OG_TAGS: &[&str] = &["og:title", "og:description", "og:image"];

pub fn check_title(state: &mut ScoreState<'_>, page: &PageData) {
    let len = page.title.as_deref().map(|s| s.chars().count()).unwrap_or(0);
    if page.title.is_none() || !(t::TITLE_MIN_LEN..=t::TITLE_MAX_LEN).contains(&len) {
        state.deduct(IssueCode::MissingTitle, None, Some(json!({ "titleLength": len })));
    }
}

pub fn check_meta_description(state: &mut ScoreState<'_>, page: &PageData) {
    let len = page
        .meta_description
        .as_deref()
        .map(|s| s.chars().count())
        .unwrap_or(0);
    if page.meta_description.is_none()
        || !(t::META_DESC_MIN_LEN..=t::META_DESC_MAX_LEN).contains(&len)
    {
        state.deduct(
            IssueCode::MissingMetaDesc,
            None,
            Some(json!({ "descriptionLength": len })),
        );
    }
}

pub fn check_h1(state: &mut ScoreState<'_>, page: &PageData) {
    match page.extracted.h1.len() {
        0 => state.flag(IssueCode::MissingH1),
        1 => {}
        n => state.deduct(IssueCode::MultipleH1, None, Some(json!({ "h1Count": n }))),
    }
}

/// Flags the first skipped level, e.g. an H4 directly under an H2.
pub fn check_heading_hierarchy(state: &mut ScoreState<'_>, page: &PageData) {
    let present: Vec<usize> = page
        .extracted
        .headings()
        .iter()
        .enumerate()
        .filter(|(_, level)| !level.is_empty())
        .map(|(i, _)| i + 1)
        .collect();

    if let Some(pair) = present.windows(2).find(|pair| pair[1] - pair[0] > 1) {
        state.deduct(
            IssueCode::HeadingHierarchy,
            None,
            Some(json!({ "from": format!("h{}", pair[0]), "to": format!("h{}", pair[1]) })),
        );
    }
}

pub fn check_http_status(state: &mut ScoreState<'_>, page: &PageData) {
    if page.status_code >= t::HTTP_ERROR_STATUS {
        state.deduct(
            IssueCode::HttpStatus,
            None,
            Some(json!({ "statusCode": page.status_code })),
        );
    }
}

pub fn check_noindex(state: &mut ScoreState<'_>, page: &PageData) {
    let noindex = page.extracted.has_robots_meta
        && page
            .extracted
            .robots_directives
            .iter()
            .any(|d| d.to_lowercase().contains("noindex"));
    if noindex {
        state.flag(IssueCode::NoindexSet);
    }
}

pub fn check_canonical(state: &mut ScoreState<'_>, page: &PageData) {
    if page.canonical_url.is_none() {
        state.flag(IssueCode::MissingCanonical);
    }
}

pub fn check_alt_text(state: &mut ScoreState<'_>, page: &PageData) {
    let count = page.extracted.images_without_alt;
    if count > 0 {
        let penalty = (count as i32)
            .saturating_mul(t::ALT_TEXT_PENALTY_PER_IMAGE)
            .min(t::ALT_TEXT_MAX_PENALTY);
        state.deduct(
            IssueCode::MissingAltText,
            Some(-penalty),
            Some(json!({ "imagesWithoutAlt": count })),
        );
    }
}

pub fn check_og_tags(state: &mut ScoreState<'_>, page: &PageData) {
    let missing: Vec<&str> = REQUIRED_OG_TAGS
        .iter()
        .copied()
        .filter(|tag| {
            page.extracted
                .og_tags
                .get(*tag)
                .map_or(true, |v| v.trim().is_empty())
        })
        .collect();
    if !missing.is_empty() {
        state.deduct(IssueCode::MissingOgTags, None, Some(json!({ "missing": missing })));
    }
}

pub fn check_response_time(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(ms) = page.site_context.as_ref().and_then(|c| c.response_time_ms) else {
        return;
    };
    if ms > t::SLOW_RESPONSE_MS {
        state.deduct(
            IssueCode::SlowResponse,
            None,
            Some(json!({ "responseTimeMs": ms })),
        );
    }
}

pub fn check_sitemap_presence(state: &mut ScoreState<'_>, page: &PageData) {
    if page.site_context.as_ref().is_some_and(|c| !c.has_sitemap) {
        state.flag(IssueCode::MissingSitemap);
    }
}

pub fn check_sitemap_quality(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(ctx) = page.site_context.as_ref().filter(|c| c.has_sitemap) else {
        return;
    };
    let Some(sitemap) = ctx.sitemap_analysis.as_ref() else {
        return;
    };

    if !sitemap.is_valid {
        state.flag(IssueCode::SitemapInvalidFormat);
    }

    if sitemap.url_count > 0 {
        let stale_ratio = sitemap.stale_url_count as f64 / sitemap.url_count as f64;
        if stale_ratio > t::SITEMAP_STALE_RATIO {
            state.deduct(
                IssueCode::SitemapStaleUrls,
                None,
                Some(json!({
                    "staleUrlCount": sitemap.stale_url_count,
                    "urlCount": sitemap.url_count,
                })),
            );
        }
    }

    if sitemap.discovered_page_count > 0
        && (sitemap.url_count as f64)
            < sitemap.discovered_page_count as f64 * t::SITEMAP_MIN_COVERAGE
    {
        state.deduct(
            IssueCode::SitemapLowCoverage,
            None,
            Some(json!({
                "urlCount": sitemap.url_count,
                "discoveredPageCount": sitemap.discovered_page_count,
            })),
        );
    }
}

pub fn check_redirect_chain(state: &mut ScoreState<'_>, page: &PageData) {
    let hops = page.redirect_chain.as_ref().map_or(0, Vec::len);
    if hops >= t::REDIRECT_CHAIN_MIN_HOPS {
        state.deduct(IssueCode::RedirectChain, None, Some(json!({ "hops": hops })));
    }
}

pub fn check_insecure_resources(state: &mut ScoreState<'_>, page: &PageData) {
    let extracted = &page.extracted;
    if extracted.cors_mixed_content > 0 {
        state.deduct(
            IssueCode::MixedContent,
            None,
            Some(json!({ "count": extracted.cors_mixed_content })),
        );
    }
    if extracted.cors_unsafe_blank_links > 0 {
        state.deduct(
            IssueCode::UnsafeBlankLinks,
            None,
            Some(json!({ "count": extracted.cors_unsafe_blank_links })),
        );
    }
}
