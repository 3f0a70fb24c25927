//! Skill normalization, overlap scoring, and skill extraction.
//!
//! Skills are compared after normalization: trimmed, lowercased, and with
//! internal whitespace collapsed to single spaces. `"  Machine   Learning"`
//! and `"machine learning"` are the same skill.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentrankError};

/// Normalize a skill name. Returns `None` for blank input.
pub fn normalize_skill(skill: &str) -> Option<String> {
    let normalized = skill
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Normalize a list of skills into an ordered, de-duplicated set.
pub fn normalize_skills<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .filter_map(|skill| normalize_skill(skill.as_ref()))
        .collect()
}

/// Result of comparing a required skill set with a candidate's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOverlap {
    /// `|matched| / |required|`, or `0.0` when nothing is required.
    pub score: f64,
    /// `required ∩ candidate`
    pub matched: BTreeSet<String>,
    /// `required − candidate`
    pub missing: BTreeSet<String>,
}

/// Scores how much of a required skill set a candidate covers.
///
/// A job that declares no required skills scores `0.0` for every candidate.
/// Without requirements there is nothing to be matched against, and scoring
/// such a job as a perfect match would let every candidate ride the skill
/// weight to a high overall score. Both sets in the result are empty in that
/// case.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillOverlapScorer;

impl SkillOverlapScorer {
    pub fn new() -> Self {
        SkillOverlapScorer
    }

    /// Compare `required` against `candidate`; both are normalized first.
    pub fn score<R, C, S, T>(&self, required: R, candidate: C) -> SkillOverlap
    where
        R: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let required = normalize_skills(required);
        let candidate = normalize_skills(candidate);

        if required.is_empty() {
            return SkillOverlap {
                score: 0.0,
                matched: BTreeSet::new(),
                missing: BTreeSet::new(),
            };
        }

        let (matched, missing): (BTreeSet<String>, BTreeSet<String>) = required
            .iter()
            .cloned()
            .partition(|skill| candidate.contains(skill));

        let score = matched.len() as f64 / required.len() as f64;

        SkillOverlap {
            score,
            matched,
            missing,
        }
    }
}

const DEFAULT_TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "node.js",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "machine learning",
    "deep learning",
    "ai",
    "nlp",
    "data science",
    "data analysis",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "git",
    "linux",
    "agile",
    "scrum",
    "rest api",
    "microservices",
];

/// Finds known skills mentioned in free text.
///
/// Matching is case-insensitive and anchored on non-word boundaries, so
/// `ai` is found in "applied AI" but not in "maintain".
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    patterns: Vec<(String, Regex)>,
}

impl SkillExtractor {
    /// Create an extractor over the built-in technical skill dictionary.
    pub fn new() -> Result<Self> {
        Self::with_skills(DEFAULT_TECHNICAL_SKILLS.iter().copied())
    }

    /// Create an extractor over a custom skill dictionary.
    pub fn with_skills<I, S>(skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = normalize_skills(skills)
            .into_iter()
            .map(|skill| {
                let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(&skill));
                Regex::new(&pattern)
                    .map(|regex| (skill, regex))
                    .map_err(|e| TalentrankError::analysis(format!("Invalid skill pattern: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SkillExtractor { patterns })
    }

    /// Number of skills in the dictionary.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Return the dictionary skills found in `text`, in sorted order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        // Collapse whitespace so multi-word skills match across line breaks.
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(&text))
            .map(|(skill, _)| skill.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Machine \t Learning "), Some("machine learning".into()));
        assert_eq!(normalize_skill("SQL"), Some("sql".into()));
        assert_eq!(normalize_skill("   "), None);
    }

    #[test]
    fn test_full_overlap() {
        let overlap = SkillOverlapScorer::new().score(["python", "sql"], ["python", "sql", "docker"]);
        assert_eq!(overlap.score, 1.0);
        assert_eq!(overlap.matched, set(&["python", "sql"]));
        assert!(overlap.missing.is_empty());
    }

    #[test]
    fn test_partial_overlap_is_case_and_space_insensitive() {
        let overlap = SkillOverlapScorer::new().score(
            ["Python", "Machine Learning", "Kubernetes", "SQL"],
            ["python ", "machine   learning", "sql"],
        );
        assert_eq!(overlap.score, 0.75);
        assert_eq!(overlap.matched, set(&["machine learning", "python", "sql"]));
        assert_eq!(overlap.missing, set(&["kubernetes"]));
    }

    #[test]
    fn test_no_overlap() {
        let overlap = SkillOverlapScorer::new().score(["java"], ["python"]);
        assert_eq!(overlap.score, 0.0);
        assert!(overlap.matched.is_empty());
        assert_eq!(overlap.missing, set(&["java"]));
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let overlap = SkillOverlapScorer::new().score(Vec::<String>::new(), ["python", "sql"]);
        assert_eq!(overlap.score, 0.0);
        assert!(overlap.matched.is_empty());
        assert!(overlap.missing.is_empty());
    }

    #[test]
    fn test_matched_and_missing_partition_requirements() {
        let required = set(&["a1", "b2", "c3", "d4", "e5"]);
        let candidate = set(&["b2", "d4", "z9"]);
        let overlap = SkillOverlapScorer::new().score(&required, &candidate);

        assert!(overlap.matched.is_disjoint(&overlap.missing));
        let union: BTreeSet<String> = overlap.matched.union(&overlap.missing).cloned().collect();
        assert_eq!(union, required);
    }

    #[test]
    fn test_extractor_finds_dictionary_skills() {
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract(
            "Senior engineer: Python, SQL and Docker.\nShipped Machine\nLearning models on AWS.",
        );
        assert_eq!(
            skills,
            vec!["aws", "docker", "machine learning", "python", "sql"]
        );
    }

    #[test]
    fn test_extractor_respects_word_boundaries() {
        let extractor = SkillExtractor::new().unwrap();
        assert!(extractor.extract("We maintain legacy systems").is_empty());
        assert_eq!(extractor.extract("Applied AI research"), vec!["ai"]);
        assert_eq!(extractor.extract("APIs in Node.js"), vec!["node.js"]);
    }

    #[test]
    fn test_extractor_with_custom_dictionary() {
        let extractor = SkillExtractor::with_skills(["C++", "Rust"]).unwrap();
        assert_eq!(extractor.len(), 2);
        assert_eq!(extractor.extract("Systems work in c++ and rust."), vec!["c++", "rust"]);
    }
}
