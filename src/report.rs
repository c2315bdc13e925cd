//! Output formatting for scoring results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::issues::{Issue, Severity};
use crate::page::PageData;
use crate::recommendations::{
    generate_recommendations, generate_strengths, Priority, Recommendation, Strength,
};
use crate::scoring::{Dimension, Engine, EngineKind, EngineOutput, LetterGrade};

/// Everything reported for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub url: String,
    pub result: EngineOutput,
    pub recommendations: Vec<Recommendation>,
    pub strengths: Vec<Strength>,
    pub passed: bool,
}

impl PageReport {
    /// Score `page` and derive recommendations, strengths and pass/fail.
    pub fn build(page: &PageData, engine: &Engine<'_>, config: &ScoringConfig) -> Self {
        let result = engine.score_with(config.engine, page);
        let base = result.base();
        let recommendations =
            generate_recommendations(&base.issues, base.overall_score, config.max_recommendations);
        let strengths = generate_strengths(&base.pillar_scores(), &base.issues, config.max_strengths);
        let passed = config.passes(base.overall_score);

        Self {
            url: page.url.clone(),
            result,
            recommendations,
            strengths,
            passed,
        }
    }
}

// =============================================================================
// JSON Format
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub version: String,
    pub engine: EngineKind,
    pub min_score: i32,
    pub passed: bool,
    pub pages: Vec<PageReport>,
}

impl JsonReport {
    pub fn new(engine: EngineKind, min_score: i32, pages: Vec<PageReport>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            engine,
            min_score,
            passed: pages.iter().all(|p| p.passed),
            pages,
        }
    }
}

/// Write results in JSON format.
pub fn write_json(engine: EngineKind, min_score: i32, pages: &[PageReport]) -> anyhow::Result<()> {
    let report = JsonReport::new(engine, min_score, pages.to_vec());
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(source: &str, engine: EngineKind, min_score: i32, pages: &[PageReport]) {
    println!();
    print!("  ");
    print!("{}", "aiready".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Input:  ".dimmed());
    println!("{}", source);
    print!("  {}", "Engine: ".dimmed());
    println!("{}", engine);
    println!();

    for page in pages {
        write_page(page);
    }

    let failed = pages.iter().filter(|p| !p.passed).count();
    print!("  {}", format!("Min score: {}", min_score).dimmed());
    print!("  Pages: {}  ", pages.len());
    if failed == 0 {
        print!("{}", "PASSED".green());
    } else {
        print!("{}", format!("FAILED ({})", failed).red());
    }
    println!();
    println!();
}

fn write_page(page: &PageReport) {
    let base = page.result.base();

    if page.passed {
        print!("  {}", "✓ PASS".green());
    } else {
        print!("  {}", "✗ FAIL".red());
    }
    print!("  {}", page.url.blue());
    println!();

    print!("    Score: ");
    write_colored_score(base.overall_score);
    print!("  Grade: ");
    write_colored_grade(base.letter_grade);
    println!();
    println!();

    println!("    {}", "Pillars:".bold());
    for (label, score) in [
        ("Technical", base.technical_score),
        ("Content", base.content_score),
        ("AI Readiness", base.ai_readiness_score),
        ("Performance", base.performance_score),
    ] {
        print!("      {:<22}", label);
        write_colored_score(score);
        println!();
    }

    if let Some(dimensions) = page.result.dimension_scores() {
        println!("    {}", "Dimensions:".bold());
        for dimension in Dimension::ALL {
            print!("      {:<22}", dimension.label());
            write_colored_score(dimensions.get(dimension));
            println!();
        }
    }

    print!("    {} ", "Platforms:".bold());
    let platforms: Vec<String> = base
        .platform_scores
        .iter()
        .map(|p| format!("{} {}", p.platform.label(), p.score))
        .collect();
    println!("{}", platforms.join(", ").dimmed());
    println!();

    if !base.issues.is_empty() {
        write_issues(&base.issues);
    }

    if !page.recommendations.is_empty() {
        write_recommendations(&page.recommendations);
    }

    if !page.strengths.is_empty() {
        println!("    {}", "Strengths:".bold());
        for strength in &page.strengths {
            println!("      {} {} ({})", "+".green(), strength.title, strength.score);
        }
        println!();
    }
}

fn write_colored_score(s: i32) {
    match s {
        s if s >= 90 => print!("{}", s.to_string().green().bold()),
        s if s >= 80 => print!("{}", s.to_string().green()),
        s if s >= 70 => print!("{}", s.to_string().yellow()),
        s if s >= 60 => print!("{}", s.to_string().yellow().bold()),
        _ => print!("{}", s.to_string().red()),
    }
}

fn write_colored_grade(grade: LetterGrade) {
    let g = grade.as_str();
    match grade {
        LetterGrade::A => print!("{}", g.green().bold()),
        LetterGrade::B => print!("{}", g.green()),
        LetterGrade::C => print!("{}", g.yellow()),
        LetterGrade::D => print!("{}", g.yellow().bold()),
        LetterGrade::F => print!("{}", g.red()),
    }
}

fn write_issues(issues: &[Issue]) {
    println!("    {} ({}):", "Issues".bold(), issues.len());
    for issue in issues {
        write_severity_tag(issue.severity);
        print!("  ");
        print!("{:<26}", issue.code.as_str().dimmed());
        println!("{}", issue.message);
    }
    println!();
}

fn write_severity_tag(severity: Severity) {
    match severity {
        Severity::Critical => print!("      {}", "CRIT".red()),
        Severity::Warning => print!("      {}", "WARN".yellow()),
        Severity::Info => print!("      {}", "INFO".blue()),
    }
}

fn write_recommendations(recommendations: &[Recommendation]) {
    println!("    {}", "Recommendations:".bold());
    for (i, rec) in recommendations.iter().enumerate() {
        let priority = match rec.priority {
            Priority::High => "high".red(),
            Priority::Medium => "medium".yellow(),
            Priority::Low => "low".blue(),
        };
        println!(
            "      {}. {} [{}] {}",
            i + 1,
            rec.title,
            priority,
            format!("+{} pts", rec.estimated_improvement).dimmed()
        );
        println!("         {}", rec.description);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::factors::fixtures::clean_page;

    #[test]
    fn test_page_report_for_clean_page() {
        let config = ScoringConfig::default();
        let report = PageReport::build(&clean_page(), &config.engine(), &config);
        assert!(report.passed);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.strengths.len(), 4);
        assert!(report.result.dimension_scores().is_some());
    }

    #[test]
    fn test_page_report_respects_min_score() {
        let config = ScoringConfig {
            engine: EngineKind::Legacy,
            min_score: 90,
            max_recommendations: 1,
            ..Default::default()
        };
        let mut page = clean_page();
        page.status_code = 500;
        let report = PageReport::build(&page, &config.engine(), &config);
        assert!(!report.passed);
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.strengths.is_empty());
        assert!(report.result.dimension_scores().is_none());
    }

    #[test]
    fn test_json_report_shape() {
        let config = ScoringConfig::default();
        let pages = vec![PageReport::build(&clean_page(), &config.engine(), &config)];
        let report = JsonReport::new(config.engine, config.min_score, pages);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["engine"], "v2");
        assert_eq!(value["passed"], true);
        assert_eq!(value["pages"][0]["url"], "https://example.com/guide");
        assert_eq!(value["pages"][0]["result"]["overallScore"], 100);
        assert!(value["pages"][0]["result"]["dimensionScores"].is_object());
    }
}
