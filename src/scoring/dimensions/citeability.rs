//! Whether the page content is worth quoting and easy to quote.

use crate::scoring::factors::{ai_readiness, content, technical, Rule};

pub const RULES: &[Rule] = &[
    technical::check_h1,
    technical::check_heading_hierarchy,
    technical::check_alt_text,
    content::check_word_count,
    content::check_llm_content_scores,
    content::check_duplicate_content,
    content::check_internal_links,
    content::check_link_ratio,
    content::check_faq_structure,
    ai_readiness::check_citation_worthiness,
    ai_readiness::check_direct_answers,
    ai_readiness::check_summary_section,
    ai_readiness::check_question_coverage,
    ai_readiness::check_pdf_only_content,
    content::check_readability,
    content::check_text_html_ratio,
    content::check_ai_assistant_speak,
    content::check_sentence_uniformity,
    ai_readiness::check_eeat_signals,
];

#[cfg(test)]
mod tests {
    use crate::issues::{IssueCode, BUILTIN};
    use crate::scoring::dimensions::{score_dimension, Dimension};
    use crate::scoring::factors::fixtures::clean_page;

    #[test]
    fn test_thin_page_with_questions() {
        let mut page = clean_page();
        page.word_count = 150;
        page.extracted.h1.clear();
        page.extracted.h2 = vec!["What is AI search?".into()];
        page.extracted.images_without_alt = 4;
        page.extracted.internal_links = 1;
        page.extracted.external_links = 5;
        page.llm_scores = None;

        let result = score_dimension(Dimension::ContentCiteability, &page, &BUILTIN);
        let codes: Vec<IssueCode> = result.issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                IssueCode::MissingH1,
                IssueCode::MissingAltText,
                IssueCode::ThinContent,
                IssueCode::NoInternalLinks,
                IssueCode::ExcessiveLinks,
                IssueCode::MissingFaqStructure,
            ]
        );
        // 100 - 20 * 0.44 - 31 * 0.53
        assert_eq!(result.score, 75);
    }
}
