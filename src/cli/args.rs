//! Command line argument parsing for the talentrank CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::keyword::DEFAULT_KEYWORD_LIMIT;

/// Talentrank - match candidates to job postings and build recommendations
#[derive(Parser, Debug, Clone)]
#[command(name = "talentrank")]
#[command(about = "Match candidates to job postings and build tiered recommendations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TalentrankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TalentrankArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Engine settings taken from flags or the environment.
///
/// These override values from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Weight of text similarity in the overall score
    #[arg(long, value_name = "WEIGHT", env = "TALENTRANK_WEIGHT_TEXT")]
    pub weight_text: Option<f64>,

    /// Weight of skill overlap in the overall score
    #[arg(long, value_name = "WEIGHT", env = "TALENTRANK_WEIGHT_SKILLS")]
    pub weight_skills: Option<f64>,

    /// Weight of experience match in the overall score
    #[arg(long, value_name = "WEIGHT", env = "TALENTRANK_WEIGHT_EXPERIENCE")]
    pub weight_experience: Option<f64>,

    /// Weight of education match in the overall score
    #[arg(long, value_name = "WEIGHT", env = "TALENTRANK_WEIGHT_EDUCATION")]
    pub weight_education: Option<f64>,

    /// Minimum overall score for a candidate to be recommended
    #[arg(long, value_name = "SCORE", env = "TALENTRANK_MIN_MATCH_THRESHOLD")]
    pub min_match_threshold: Option<f64>,

    /// Default number of recommendations returned by `top`
    #[arg(long, value_name = "N", env = "TALENTRANK_MAX_RECOMMENDATIONS")]
    pub max_recommendations: Option<usize>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score candidates against a job and print the ranked results
    Match(MatchArgs),

    /// Compute the text similarity of two texts
    Similarity(SimilarityArgs),

    /// Select the top candidates from previously computed results
    Top(TopArgs),

    /// Build a tiered report from previously computed results
    Report(ReportArgs),

    /// Extract the most frequent keywords of a text
    Keywords(KeywordsArgs),

    /// Extract known technical skills from a text
    Skills(SkillsArgs),

    /// Normalize a text into stemmed content tokens
    Preprocess(PreprocessArgs),
}

/// Arguments for matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Job posting file (JSON object)
    #[arg(value_name = "JOB_FILE")]
    pub job_file: PathBuf,

    /// Candidate profiles file (JSON array)
    #[arg(value_name = "CANDIDATES_FILE")]
    pub candidates_file: PathBuf,
}

/// Arguments for text similarity
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    #[arg(value_name = "TEXT1")]
    pub text1: String,

    #[arg(value_name = "TEXT2")]
    pub text2: String,
}

/// Arguments for top candidate selection
#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    /// Match results file (JSON array)
    #[arg(value_name = "MATCHES_FILE")]
    pub matches_file: PathBuf,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for report generation
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Match results file (JSON array)
    #[arg(value_name = "MATCHES_FILE")]
    pub matches_file: PathBuf,
}

/// Arguments for keyword extraction
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum number of keywords
    #[arg(short, long, default_value_t = DEFAULT_KEYWORD_LIMIT)]
    pub limit: usize,
}

/// Arguments for skill extraction
#[derive(Parser, Debug, Clone)]
pub struct SkillsArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for text preprocessing
#[derive(Parser, Debug, Clone)]
pub struct PreprocessArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
