//! Command implementations for the talentrank CLI.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::analysis::keyword::KeywordExtractor;
use crate::analysis::preprocess::{PreprocessedText, TextPreprocessor};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{EngineConfig, MatchEngine};
use crate::error::{Result, TalentrankError};
use crate::matching::aggregator::MatchResult;
use crate::matching::record::{CandidateRecord, JobRecord};
use crate::matching::similarity::TextSimilarityScorer;
use crate::matching::skills::SkillExtractor;

/// Execute a CLI command.
pub fn execute_command(args: TalentrankArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => run_match(match_args, &args),
        Command::Similarity(similarity_args) => run_similarity(similarity_args, &args),
        Command::Top(top_args) => run_top(top_args, &args),
        Command::Report(report_args) => run_report(report_args, &args),
        Command::Keywords(keyword_args) => run_keywords(keyword_args, &args),
        Command::Skills(skill_args) => run_skills(skill_args, &args),
        Command::Preprocess(preprocess_args) => run_preprocess(preprocess_args, &args),
    }
}

/// Assemble the engine configuration: defaults, then the config file, then
/// flag and environment overrides.
pub fn load_engine_config(args: &TalentrankArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading engine configuration from {}", path.display());
            read_json::<EngineConfig>(path, "engine configuration")?
        }
        None => EngineConfig::default(),
    };

    let overrides = &args.overrides;
    if let Some(weight) = overrides.weight_text {
        config.weights.text_similarity = weight;
    }
    if let Some(weight) = overrides.weight_skills {
        config.weights.skill_match = weight;
    }
    if let Some(weight) = overrides.weight_experience {
        config.weights.experience_match = weight;
    }
    if let Some(weight) = overrides.weight_education {
        config.weights.education_match = weight;
    }
    if let Some(threshold) = overrides.min_match_threshold {
        config.recommendation.min_match_threshold = threshold;
    }
    if let Some(limit) = overrides.max_recommendations {
        config.recommendation.default_limit = limit;
    }

    config.validate()?;
    Ok(config)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} from {}", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("invalid {what} in {}", path.display()))?;
    Ok(value)
}

/// Read a job object from a JSON file.
pub fn load_job(path: &Path) -> Result<JobRecord> {
    read_json(path, "job posting")
}

/// Read an array of candidate objects from a JSON file.
pub fn load_candidates(path: &Path) -> Result<Vec<CandidateRecord>> {
    read_json(path, "candidate profiles")
}

/// Read an array of match results from a JSON file.
pub fn load_matches(path: &Path) -> Result<Vec<MatchResult>> {
    read_json(path, "match results")
}

/// Score the candidates of `candidates_file` against the job of `job_file`.
pub fn match_files(
    job_file: &Path,
    candidates_file: &Path,
    config: EngineConfig,
) -> Result<Vec<MatchResult>> {
    let engine = MatchEngine::new(config)?;
    let job = load_job(job_file)?;
    let candidates = load_candidates(candidates_file)?;
    info!(
        "matching {} candidates against job '{}'",
        candidates.len(),
        job.job_id()
    );
    Ok(engine.match_candidates(&job, &candidates))
}

fn run_match(args: &MatchArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let config = load_engine_config(cli_args)?;
    let results = match_files(&args.job_file, &args.candidates_file, config)?;
    output_result("Candidates matched", &results, cli_args)
}

/// Similarity of two texts; both must be non-blank.
pub fn text_similarity(text1: &str, text2: &str) -> Result<SimilarityResult> {
    if text1.trim().is_empty() || text2.trim().is_empty() {
        return Err(TalentrankError::validation("Both texts are required"));
    }
    let scorer = TextSimilarityScorer::new()?;
    Ok(SimilarityResult {
        text_similarity_score: scorer.try_similarity(text1, text2)?,
    })
}

fn run_similarity(args: &SimilarityArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let result = text_similarity(&args.text1, &args.text2)?;
    output_result("Similarity computed", &result, cli_args)
}

fn run_top(args: &TopArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let engine = MatchEngine::new(load_engine_config(cli_args)?)?;
    let results = load_matches(&args.matches_file)?;
    let top = engine.top_candidates(&results, args.limit);
    output_result("Top candidates", &top, cli_args)
}

fn run_report(args: &ReportArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let engine = MatchEngine::new(load_engine_config(cli_args)?)?;
    let results = load_matches(&args.matches_file)?;
    let report = engine.build_report(&results);
    output_result("Recommendation report", &report, cli_args)
}

fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(TalentrankError::validation("No text provided"));
    }
    Ok(())
}

/// The `limit` most frequent keywords of a non-blank text.
pub fn extract_keywords(text: &str, limit: usize) -> Result<KeywordsResult> {
    require_text(text)?;
    let extractor = KeywordExtractor::new()?.limit(limit);
    Ok(KeywordsResult {
        keywords: extractor.extract(text)?,
    })
}

/// Known skills mentioned in a non-blank text.
pub fn extract_skills(text: &str) -> Result<SkillsResult> {
    require_text(text)?;
    let extractor = SkillExtractor::new()?;
    Ok(SkillsResult {
        skills: extractor.extract(text),
    })
}

/// Stemmed content tokens of a non-blank text.
pub fn preprocess_text(text: &str) -> Result<PreprocessedText> {
    require_text(text)?;
    TextPreprocessor::new()?.process(text)
}

fn run_keywords(args: &KeywordsArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let result = extract_keywords(&args.text, args.limit)?;
    output_result("Keywords extracted", &result, cli_args)
}

fn run_skills(args: &SkillsArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let result = extract_skills(&args.text)?;
    output_result("Skills extracted", &result, cli_args)
}

fn run_preprocess(args: &PreprocessArgs, cli_args: &TalentrankArgs) -> Result<()> {
    let result = preprocess_text(&args.text)?;
    output_result("Text preprocessed", &result, cli_args)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_text_similarity_requires_both_texts() {
        let err = text_similarity("", "python developer").unwrap_err();
        assert!(matches!(err, TalentrankError::Validation(_)));
        assert!(text_similarity("python developer", "  ").is_err());

        let result = text_similarity("python developer", "python developer").unwrap();
        assert_eq!(result.text_similarity_score, 1.0);
    }

    #[test]
    fn test_overrides_are_validated() {
        let mut args = TalentrankArgs::try_parse_from(["talentrank", "skills", "x"]).unwrap();
        args.overrides = ConfigOverrides {
            weight_text: Some(0.9),
            ..Default::default()
        };
        let err = load_engine_config(&args).unwrap_err();
        assert!(matches!(err, TalentrankError::Config(_)));

        args.overrides = ConfigOverrides {
            weight_text: Some(0.5),
            weight_skills: Some(0.3),
            max_recommendations: Some(3),
            ..Default::default()
        };
        let config = load_engine_config(&args).unwrap();
        assert_eq!(config.weights.text_similarity, 0.5);
        assert_eq!(config.weights.skill_match, 0.3);
        assert_eq!(config.recommendation.default_limit, 3);
    }

    #[test]
    fn test_override_flags_are_parsed() {
        let args = TalentrankArgs::try_parse_from([
            "talentrank",
            "--weight-text",
            "0.9",
            "skills",
            "x",
        ])
        .unwrap();
        assert_eq!(args.overrides.weight_text, Some(0.9));
    }

    #[test]
    fn test_text_commands_reject_blank_text() {
        for err in [
            extract_keywords("  ", 5).unwrap_err(),
            extract_skills("").unwrap_err(),
            preprocess_text("\n\t").unwrap_err(),
        ] {
            assert!(matches!(err, TalentrankError::Validation(_)));
            assert!(err.to_string().contains("No text provided"));
        }
    }

    #[test]
    fn test_preprocess_text() {
        let result = preprocess_text("Engineers building pipelines").unwrap();
        assert_eq!(result.processed_tokens, vec!["engin", "build", "pipelin"]);
        assert_eq!(result.token_count, 3);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_job(Path::new("/nonexistent/job.json")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/job.json"), "{message}");
    }
}
