//! Command-line interface for aiready.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::{self, ScoringConfig};
use crate::page;
use crate::report::{self, PageReport};
use crate::scoring::EngineKind;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Grade web pages on how ready they are for AI search and assistants.
///
/// Reads crawler output (one page object or an array of them) and reports
/// scores, issues, per-platform projections and prioritized fixes.
#[derive(Parser)]
#[command(name = "aiready")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score crawled pages
    #[command(visible_alias = "grade")]
    Score(ScoreArgs),
    /// Create a new aiready config from a template
    Init(InitArgs),
}

/// Arguments for the score command.
#[derive(Parser)]
pub struct ScoreArgs {
    /// Page JSON file (single page or array of pages)
    pub input: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scoring engine: legacy or v2
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Minimum passing score (exit non-zero if any page is below)
    #[arg(short, long)]
    pub min_score: Option<i32>,

    /// Maximum recommendations per page
    #[arg(long)]
    pub max_recommendations: Option<usize>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "aiready.yaml")]
    pub output: PathBuf,

    /// Template to use
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,

    /// Replace an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Template used when `--template` is not given.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Available config templates.
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

pub static TEMPLATES: &[Template] = &[
    Template {
        name: "default",
        description: "Seven-dimension engine with default weights, pass at 60",
        content: include_str!("templates/default.yaml"),
    },
    Template {
        name: "strict",
        description: "Heavier crawler and llms.txt weighting, pass at 80",
        content: include_str!("templates/strict.yaml"),
    },
    Template {
        name: "legacy",
        description: "Four-pillar engine with default weights",
        content: include_str!("templates/legacy.yaml"),
    },
];

/// Load the explicit config, a discovered one, or the defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(ScoringConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config::discover(Path::new(".")),
    };
    let config = match &path {
        Some(p) => ScoringConfig::parse_file(p)?,
        None => ScoringConfig::default(),
    };
    Ok((config, path))
}

/// Run the score command.
pub fn run_score(args: &ScoreArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (mut config, config_path) = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // Flags override the file.
    if let Some(engine) = &args.engine {
        match engine.parse::<EngineKind>() {
            Ok(kind) => config.engine = kind,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }
    if let Some(min_score) = args.min_score {
        config.min_score = min_score;
    }
    if let Some(max) = args.max_recommendations {
        config.max_recommendations = max;
    }

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: {}", e);
        return Ok(EXIT_ERROR);
    }

    let pages = match page::load_pages(&args.input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.input.display(), e);
            return Ok(EXIT_ERROR);
        }
    };
    if pages.is_empty() {
        eprintln!("Warning: no pages to score");
        return Ok(EXIT_SUCCESS);
    }

    tracing::debug!(
        pages = pages.len(),
        engine = %config.engine,
        config = ?config_path,
        "scoring pages"
    );

    let engine = config.engine();
    let reports: Vec<PageReport> = pages
        .par_iter()
        .map(|p| PageReport::build(p, &engine, &config))
        .collect();

    match args.format.as_str() {
        "json" => report::write_json(config.engine, config.min_score, &reports)?,
        _ => report::write_pretty(
            &args.input.to_string_lossy(),
            config.engine,
            config.min_score,
            &reports,
        ),
    }

    if reports.iter().all(|r| r.passed) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

impl Template {
    fn find(name: &str) -> Option<&'static Template> {
        TEMPLATES.iter().find(|t| t.name == name)
    }

    /// The config this template produces.
    pub fn config(&self) -> crate::Result<ScoringConfig> {
        ScoringConfig::parse(self.content)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.list {
        return list_templates();
    }

    let Some(template) = Template::find(&args.template) else {
        let names: Vec<&str> = TEMPLATES.iter().map(|t| t.name).collect();
        eprintln!(
            "Error: no config template named {:?} (choose from: {})",
            args.template,
            names.join(", ")
        );
        return Ok(EXIT_ERROR);
    };
    let config = template.config()?;

    if args.output.exists() && !args.force {
        eprintln!(
            "Error: {} already holds a scoring config; pass --force to replace it",
            args.output.display()
        );
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.output, template.content)?;
    tracing::debug!(template = template.name, output = %args.output.display(), "wrote config");

    let path = args.output.display();
    println!(
        "Wrote {} ({} engine, pages below {} fail)",
        path, config.engine, config.min_score
    );
    println!();
    println!("Grade a crawl with it:");
    println!("  aiready score crawl.json --config {}", path);
    let other = match config.engine {
        EngineKind::Legacy => EngineKind::V2,
        EngineKind::V2 => EngineKind::Legacy,
    };
    println!("Compare against the {} engine:", other);
    println!("  aiready score crawl.json --config {} --engine {}", path, other);

    Ok(EXIT_SUCCESS)
}

fn list_templates() -> anyhow::Result<i32> {
    println!("{:<10} {:<8} {:>5}  DESCRIPTION", "TEMPLATE", "ENGINE", "PASS");
    for template in TEMPLATES {
        let config = template.config()?;
        let marker = if template.name == DEFAULT_TEMPLATE { "*" } else { "" };
        println!(
            "{:<10} {:<8} {:>5}  {}",
            format!("{}{}", template.name, marker),
            config.engine.to_string(),
            config.min_score,
            template.description
        );
    }
    println!();
    println!("* used when --template is omitted");

    Ok(EXIT_SUCCESS)
}
