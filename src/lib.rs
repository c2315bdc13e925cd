//! aiready - AI-readiness grading for web pages.
//!
//! Turns the signals a crawler extracts from a page (HTML structure,
//! metadata, Lighthouse audits, LLM-rated content quality, site-wide crawl
//! context) into scores, a letter grade, a ranked issue list, per-platform
//! projections and prioritized recommendations.
//!
//! # Architecture
//!
//! - `issues`: the closed issue taxonomy and the registry that defines it
//! - `page`: the `PageData` input model
//! - `scoring`: rule bodies, the legacy four-pillar and v2 seven-dimension
//!   scorers, and the engine that aggregates them
//! - `platforms`: per-assistant score projections
//! - `recommendations`: remediation recommendations and strengths
//! - `config`: YAML scoring config
//! - `report`: output formatting (pretty, JSON)
//!
//! Scoring is synchronous, pure and infallible. Only loading pages and
//! configs returns errors.

pub mod cli;
pub mod config;
pub mod error;
pub mod issues;
pub mod page;
pub mod platforms;
pub mod recommendations;
pub mod report;
pub mod scoring;

pub use config::ScoringConfig;
pub use error::{AiReadyError, Result};
pub use issues::{Category, Issue, IssueCode, IssueDefinition, IssueRegistry, Severity};
pub use page::PageData;
pub use platforms::{Platform, PlatformScore};
pub use recommendations::{generate_recommendations, generate_strengths, Recommendation, Strength};
pub use scoring::{
    score_page, score_page_v2, Engine, EngineKind, LetterGrade, ScoringResult, ScoringResultV2,
};
