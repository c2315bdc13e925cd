//! AI-readiness pillar: whether assistants can reach, parse and cite the page.

use serde_json::json;

use crate::issues::IssueCode;
use crate::page::PageData;
use crate::scoring::state::ScoreState;
use crate::scoring::{signals, thresholds as t};

use super::content::llm_dimension_penalty;
use super::Rule;

pub const RULES: &[Rule] = &[
    check_llms_txt_presence,
    check_ai_crawlers,
    check_structured_data_presence,
    check_schema_completeness,
    check_citation_worthiness,
    check_direct_answers,
    check_entity_markup,
    check_summary_section,
    check_question_coverage,
    check_schema_validity,
    check_pdf_only_content,
    check_eeat_signals,
];

pub fn check_llms_txt_presence(state: &mut ScoreState<'_>, page: &PageData) {
    if page.site_context.as_ref().is_some_and(|c| !c.has_llms_txt) {
        state.flag(IssueCode::MissingLlmsTxt);
    }
}

pub fn check_ai_crawlers(state: &mut ScoreState<'_>, page: &PageData) {
    if let Some(blocked) = blocked_crawlers(page) {
        state.deduct(
            IssueCode::AiCrawlerBlocked,
            None,
            Some(json!({ "blockedCrawlers": blocked })),
        );
    }
}

/// Names of AI crawlers the site blocks, if any.
fn blocked_crawlers(page: &PageData) -> Option<&[String]> {
    page.site_context
        .as_ref()
        .map(|c| c.ai_crawlers_blocked.as_slice())
        .filter(|blocked| !blocked.is_empty())
}

pub fn check_structured_data_presence(state: &mut ScoreState<'_>, page: &PageData) {
    if page.extracted.structured_data.is_empty() {
        state.flag(IssueCode::NoStructuredData);
    }
}

pub fn check_schema_completeness(state: &mut ScoreState<'_>, page: &PageData) {
    if let Some((schema_type, missing)) = signals::first_incomplete_schema(page) {
        state.deduct(
            IssueCode::IncompleteSchema,
            None,
            Some(json!({ "schemaType": schema_type, "missingProperties": missing })),
        );
    }
}

pub fn check_schema_validity(state: &mut ScoreState<'_>, page: &PageData) {
    if signals::has_untyped_schema(page) {
        state.flag(IssueCode::InvalidSchema);
    }
}

pub fn check_citation_worthiness(state: &mut ScoreState<'_>, page: &PageData) {
    let Some(llm) = page.llm_scores.as_ref() else {
        return;
    };
    let penalty = llm_dimension_penalty(llm.citation_worthiness);
    if penalty < 0 {
        state.deduct(
            IssueCode::CitationWorthiness,
            Some(penalty),
            Some(json!({ "llmScore": llm.citation_worthiness })),
        );
    }
}

pub fn check_direct_answers(state: &mut ScoreState<'_>, page: &PageData) {
    if page.word_count >= t::DIRECT_ANSWER_MIN_WORDS
        && signals::has_question_heading(page)
        && !signals::has_faq_schema(page)
    {
        state.flag(IssueCode::NoDirectAnswers);
    }
}

pub fn check_entity_markup(state: &mut ScoreState<'_>, page: &PageData) {
    if !page.extracted.structured_data.is_empty() && !signals::has_entity_type(page) {
        state.flag(IssueCode::MissingEntityMarkup);
    }
}

pub fn check_summary_section(state: &mut ScoreState<'_>, page: &PageData) {
    if page.word_count >= t::SUMMARY_MIN_WORDS && !signals::has_summary_heading(page) {
        state.flag(IssueCode::NoSummarySection);
    }
}

pub fn check_question_coverage(state: &mut ScoreState<'_>, page: &PageData) {
    if let Some(llm) = page.llm_scores.as_ref() {
        if llm.structure < t::QUESTION_COVERAGE_MIN {
            state.deduct(
                IssueCode::PoorQuestionCoverage,
                None,
                Some(json!({ "structureScore": llm.structure })),
            );
        }
    }
}

pub fn check_pdf_only_content(state: &mut ScoreState<'_>, page: &PageData) {
    let pdfs = page.extracted.pdf_links.len();
    if pdfs > 0 && page.word_count < t::PDF_ONLY_MAX_WORDS {
        state.deduct(IssueCode::PdfOnlyContent, None, Some(json!({ "pdfLinks": pdfs })));
    }
}

pub fn check_eeat_signals(state: &mut ScoreState<'_>, page: &PageData) {
    if page.word_count >= t::EEAT_MIN_WORDS && !signals::has_eeat_marker(page) {
        state.flag(IssueCode::LowEeatScore);
    }
}
