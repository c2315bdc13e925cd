//! Content pillar: depth, originality, linking and readability.

use serde_json::json;

use crate::issues::IssueCode;
use crate::page::PageData;
use crate::scoring::state::ScoreState;
use crate::scoring::{signals, thresholds as t};

use super::Rule;

pub const RULES: &[Rule] = &[
    check_word_count,
    check_llm_content_scores,
    check_duplicate_content,
    check_internal_links,
    check_link_ratio,
    check_faq_structure,
    check_readability,
    check_text_html_ratio,
    check_ai_assistant_speak,
    check_sentence_uniformity,
];

/// Penalty for an LLM-rated dimension: `round((100 - score) * 0.2)`.
pub fn llm_dimension_penalty(score: f64) -> i32 {
    let gap = 100.0 - score.clamp(0.0, 100.0);
    -((gap * t::LLM_SCORE_PENALTY_FACTOR).round() as i32)
}

pub fn check_word_count(state: &mut ScoreState<'_>, page: &PageData) {
    let penalty = match page.word_count {
        n if n < t::THIN_CONTENT_WORDS => t::THIN_CONTENT_PENALTY,
        n if n < t::SHORT_CONTENT_WORDS => t::SHORT_CONTENT_PENALTY,
        _ => return,
    };
    state.deduct(
        IssueCode::ThinContent,
        Some(penalty),
        Some(json!({ "wordCount": page.word_count })),
    );
}

pub fn check_llm_content_scores(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(llm) = page.llm_scores.as_ref() else {
        return;
    };
    for (code, value) in [
        (IssueCode::ContentDepth, llm.comprehensiveness),
        (IssueCode::ContentClarity, llm.clarity),
        (IssueCode::ContentAuthority, llm.authority),
    ] {
        let penalty = llm_dimension_penalty(value);
        if penalty < 0 {
            state.deduct(code, Some(penalty), Some(json!({ "llmScore": value })));
        }
    }
}

pub fn check_duplicate_content(state: &mut ScoreState<'_>, page: &PageData) {
    let (Some(hash), Some(ctx)) = (page.content_hash.as_ref(), page.site_context.as_ref()) else {
        return;
    };
    if let Some(other) = ctx.content_hashes.get(hash) {
        if *other != page.url {
            state.deduct(
                IssueCode::DuplicateContent,
                None,
                Some(json!({ "duplicateOf": other })),
            );
        }
    }
}

pub fn check_internal_links(state: &mut ScoreState<'_>, page: &PageData) {
    let internal = page.extracted.internal_links;
    if internal < t::MIN_INTERNAL_LINKS {
        state.deduct(
            IssueCode::NoInternalLinks,
            None,
            Some(json!({ "internalLinks": internal })),
        );
    }
}

pub fn check_link_ratio(state: &mut ScoreState<'_>, page: &PageData) {
    let internal = page.extracted.internal_links;
    let external = page.extracted.external_links;
    if internal > 0 && external > internal.saturating_mul(t::EXTERNAL_LINK_RATIO) {
        state.deduct(
            IssueCode::ExcessiveLinks,
            None,
            Some(json!({ "internalLinks": internal, "externalLinks": external })),
        );
    }
}

pub fn check_faq_structure(state: &mut ScoreState<'_>, page: &PageData) {
    if signals::has_question_heading(page) && !signals::has_faq_schema(page) {
        state.flag(IssueCode::MissingFaqStructure);
    }
}

pub fn check_readability(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(flesch) = page
        .extracted
        .readability
        .as_ref()
        .and_then(|r| r.flesch_score)
    else {
        return;
    };
    let penalty = if flesch < t::FLESCH_VERY_HARD {
        t::FLESCH_VERY_HARD_PENALTY
    } else if flesch < t::FLESCH_HARD {
        t::FLESCH_HARD_PENALTY
    } else {
        return;
    };
    state.deduct(
        IssueCode::PoorReadability,
        Some(penalty),
        Some(json!({ "fleschScore": flesch })),
    );
}

pub fn check_text_html_ratio(state: &mut ScoreState<'_>, page: &PageData) {
    let ratio = page
        .extracted
        .readability
        .as_ref()
        .and_then(|r| r.text_html_ratio);
    if let Some(ratio) = ratio.filter(|r| *r < t::MIN_TEXT_HTML_RATIO) {
        state.deduct(
            IssueCode::LowTextHtmlRatio,
            None,
            Some(json!({ "textHtmlRatio": ratio })),
        );
    }
}

pub fn check_ai_assistant_speak(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(text) = page.extracted.body_text.as_deref() else {
        return;
    };
    let hits = signals::ai_speak_hits(text);
    if hits >= t::AI_SPEAK_MIN_HITS {
        state.deduct(
            IssueCode::AiAssistantSpeak,
            None,
            Some(json!({ "occurrences": hits })),
        );
    }
}

/// Body text wins over the crawler's precomputed variance.
pub fn check_sentence_uniformity(state: &mut ScoreState<'_>, page: &PageData) {
    if page.word_count < t::UNIFORM_SENTENCE_MIN_WORDS {
        return;
    }
    let from_text = page
        .extracted
        .body_text
        .as_deref()
        .and_then(|text| signals::sentence_length_variance(text, t::UNIFORM_SENTENCE_MIN_SENTENCES));
    let variance = from_text.or_else(|| {
        page.extracted
            .readability
            .as_ref()
            .and_then(|r| r.sentence_length_variance)
    });
    if let Some(variance) = variance.filter(|v| *v < t::UNIFORM_SENTENCE_MAX_VARIANCE) {
        state.deduct(
            IssueCode::UniformSentenceLength,
            None,
            Some(json!({ "variance": variance })),
        );
    }
}
