//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::analysis::keyword::Keyword;
use crate::analysis::preprocess::PreprocessedText;
use crate::cli::args::{OutputFormat, TalentrankArgs};
use crate::error::Result;
use crate::matching::aggregator::MatchResult;
use crate::recommendation::engine::RecommendationReport;
use crate::recommendation::tier::Tier;

/// Result structure for text similarity.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub text_similarity_score: f64,
}

/// Result structure for keyword extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResult {
    pub keywords: Vec<Keyword>,
}

/// Result structure for skill extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResult {
    pub skills: Vec<String>,
}

/// Types that know how to print themselves for a human reader.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Output a result in the selected format on stdout.
pub fn output_result<T>(message: &str, result: &T, args: &TalentrankArgs) -> Result<()>
where
    T: Serialize + HumanOutput + ?Sized,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result in the selected format.
pub fn write_result<T>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &TalentrankArgs,
) -> Result<()>
where
    T: Serialize + HumanOutput + ?Sized,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn format_skills<'a>(skills: impl IntoIterator<Item = &'a String>) -> String {
    let joined = skills
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

fn write_match(out: &mut dyn Write, rank: usize, result: &MatchResult) -> io::Result<()> {
    writeln!(
        out,
        "{rank}. {} (Score: {:.3}, {})",
        result.candidate_id(),
        result.overall_match_score(),
        Tier::from_score(result.overall_match_score())
    )?;
    writeln!(
        out,
        "   text: {:.3}  skills: {:.3}  experience: {:.3}  education: {:.3}",
        result.text_similarity_score(),
        result.skill_match_score(),
        result.experience_match_score(),
        result.education_match_score()
    )?;
    writeln!(out, "   matched: {}", format_skills(result.matched_skills()))?;
    writeln!(out, "   missing: {}", format_skills(result.missing_skills()))
}

impl HumanOutput for [MatchResult] {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "No matching candidates.");
        }

        writeln!(out, "Match Results:")?;
        writeln!(out, "══════════════")?;
        for (i, result) in self.iter().enumerate() {
            write_match(out, i + 1, result)?;
        }
        Ok(())
    }
}

impl HumanOutput for Vec<MatchResult> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        self.as_slice().write_human(out)
    }
}

impl HumanOutput for RecommendationReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Recommendation Report:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Total candidates: {}", self.total_candidates)?;
        writeln!(out, "Average score: {:.3}", self.summary.average_score)?;

        for tier in Tier::ordered() {
            let results = self.tier(tier);
            writeln!(out)?;
            writeln!(out, "{tier} ({})", results.len())?;
            writeln!(out, "{}", "─".repeat(tier.label().chars().count()))?;
            for (i, result) in results.iter().enumerate() {
                write_match(out, i + 1, result)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for SimilarityResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Text similarity: {:.4}", self.text_similarity_score)
    }
}

impl HumanOutput for KeywordsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.keywords.is_empty() {
            return writeln!(out, "No keywords found.");
        }
        for keyword in &self.keywords {
            writeln!(out, "{} ({})", keyword.term, keyword.frequency)?;
        }
        Ok(())
    }
}

impl HumanOutput for SkillsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.skills.is_empty() {
            return writeln!(out, "No known skills found.");
        }
        writeln!(out, "{}", format_skills(&self.skills))
    }
}

impl HumanOutput for PreprocessedText {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Tokens ({}): {}", self.token_count, self.processed_tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::matching::aggregator::MatchResultData;
    use crate::recommendation::engine::RecommendationEngine;

    fn args(format: &str) -> TalentrankArgs {
        TalentrankArgs::try_parse_from(["talentrank", "--format", format, "skills", "x"]).unwrap()
    }

    fn result(candidate_id: &str, score: f64) -> MatchResult {
        MatchResult::try_from(MatchResultData {
            job_id: "job-1".into(),
            candidate_id: candidate_id.into(),
            overall_match_score: score,
            matched_skills: vec!["python".into()],
            missing_skills: vec!["sql".into()],
            ..Default::default()
        })
        .unwrap()
    }

    fn render<T: Serialize + HumanOutput + ?Sized>(value: &T, format: &str) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, "done", value, &args(format)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_human_match_list() {
        let text = render(&vec![result("alice", 0.85)], "human");
        assert!(text.contains("1. alice (Score: 0.850, Highly Recommended)"));
        assert!(text.contains("matched: python"));
        assert!(text.contains("missing: sql"));

        let empty: Vec<MatchResult> = Vec::new();
        assert_eq!(render(&empty, "human"), "No matching candidates.\n");
    }

    #[test]
    fn test_json_output() {
        let text = render(&SkillsResult { skills: vec!["python".into()] }, "json");
        assert_eq!(text, "{\"skills\":[\"python\"]}\n");
    }

    #[test]
    fn test_human_report_lists_every_tier() {
        let report = RecommendationEngine::default().build_report(&[result("bob", 0.5)]);
        let text = render(&report, "human");
        assert!(text.contains("Total candidates: 1"));
        assert!(text.contains("Highly Recommended (0)"));
        assert!(text.contains("Consider (1)"));
        assert!(text.contains("1. bob"));
    }

    #[test]
    fn test_human_similarity_and_keywords() {
        let text = render(&SimilarityResult { text_similarity_score: 0.5 }, "human");
        assert_eq!(text, "Text similarity: 0.5000\n");

        let keywords = KeywordsResult {
            keywords: vec![Keyword { term: "python".into(), frequency: 3 }],
        };
        assert_eq!(render(&keywords, "human"), "python (3)\n");
    }

    #[test]
    fn test_preprocessed_output() {
        let processed = PreprocessedText {
            original_text: "Managing teams".into(),
            processed_tokens: vec!["manag".into(), "team".into()],
            token_count: 2,
        };
        assert_eq!(render(&processed, "human"), "Tokens (2): manag team\n");

        let json = render(&processed, "json");
        assert!(json.contains("\"processed_tokens\":[\"manag\",\"team\"]"), "{json}");
        assert!(json.contains("\"token_count\":2"), "{json}");
    }
}
