//! Combines the sub-scores of one job/candidate pair into a [`MatchResult`].

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentrankError};
use crate::matching::history::{HistoryScorer, NeutralScorer, clamp_score};
use crate::matching::record::{CandidateRecord, EducationEntry, ExperienceEntry, JobRecord};
use crate::matching::similarity::TextSimilarityScorer;
use crate::matching::skills::{SkillOverlapScorer, normalize_skills};
use crate::matching::weights::MatchWeights;

/// Score of one candidate against one job.
///
/// Serializes with the field names below. Deserialization validates the
/// same invariants the aggregator guarantees: non-empty ids, every score
/// finite and in [0, 1], matched and missing skills disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatchResultData")]
pub struct MatchResult {
    job_id: String,
    candidate_id: String,
    skill_match_score: f64,
    text_similarity_score: f64,
    experience_match_score: f64,
    education_match_score: f64,
    overall_match_score: f64,
    matched_skills: BTreeSet<String>,
    missing_skills: BTreeSet<String>,
}

impl MatchResult {
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub fn skill_match_score(&self) -> f64 {
        self.skill_match_score
    }

    pub fn text_similarity_score(&self) -> f64 {
        self.text_similarity_score
    }

    pub fn experience_match_score(&self) -> f64 {
        self.experience_match_score
    }

    pub fn education_match_score(&self) -> f64 {
        self.education_match_score
    }

    pub fn overall_match_score(&self) -> f64 {
        self.overall_match_score
    }

    /// Required skills the candidate has.
    pub fn matched_skills(&self) -> &BTreeSet<String> {
        &self.matched_skills
    }

    /// Required skills the candidate lacks.
    pub fn missing_skills(&self) -> &BTreeSet<String> {
        &self.missing_skills
    }
}

/// Unvalidated match result fields, as read from the wire or assembled by hand.
///
/// ```
/// use talentrank::matching::aggregator::{MatchResult, MatchResultData};
///
/// let result = MatchResult::try_from(MatchResultData {
///     job_id: "job-1".into(),
///     candidate_id: "cand-1".into(),
///     overall_match_score: 0.72,
///     ..Default::default()
/// })
/// .unwrap();
///
/// assert_eq!(result.overall_match_score(), 0.72);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MatchResultData {
    pub job_id: String,
    pub candidate_id: String,
    pub skill_match_score: f64,
    pub text_similarity_score: f64,
    pub experience_match_score: f64,
    pub education_match_score: f64,
    pub overall_match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Accepts scores in [0, 1], storing `-0.0` as `0.0`.
fn check_score(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value + 0.0)
    } else {
        Err(TalentrankError::validation(format!(
            "match result field `{field}` must be within [0, 1], got {value}"
        )))
    }
}

impl TryFrom<MatchResultData> for MatchResult {
    type Error = TalentrankError;

    fn try_from(data: MatchResultData) -> Result<Self> {
        let job_id = data.job_id.trim();
        if job_id.is_empty() {
            return Err(TalentrankError::missing_field("match result", "job_id"));
        }
        let candidate_id = data.candidate_id.trim();
        if candidate_id.is_empty() {
            return Err(TalentrankError::missing_field(
                "match result",
                "candidate_id",
            ));
        }

        let matched_skills = normalize_skills(data.matched_skills);
        let missing_skills = normalize_skills(data.missing_skills);
        if let Some(skill) = matched_skills.intersection(&missing_skills).next() {
            return Err(TalentrankError::validation(format!(
                "skill `{skill}` is listed as both matched and missing"
            )));
        }

        Ok(MatchResult {
            job_id: job_id.to_string(),
            candidate_id: candidate_id.to_string(),
            skill_match_score: check_score("skill_match_score", data.skill_match_score)?,
            text_similarity_score: check_score(
                "text_similarity_score",
                data.text_similarity_score,
            )?,
            experience_match_score: check_score(
                "experience_match_score",
                data.experience_match_score,
            )?,
            education_match_score: check_score(
                "education_match_score",
                data.education_match_score,
            )?,
            overall_match_score: check_score("overall_match_score", data.overall_match_score)?,
            matched_skills,
            missing_skills,
        })
    }
}

/// Scores job/candidate pairs.
///
/// Holds only read-only scorers and the weighting policy, so one aggregator
/// can be shared across threads.
#[derive(Clone)]
pub struct MatchAggregator {
    weights: MatchWeights,
    similarity: TextSimilarityScorer,
    skills: SkillOverlapScorer,
    experience: Arc<dyn HistoryScorer<ExperienceEntry>>,
    education: Arc<dyn HistoryScorer<EducationEntry>>,
}

impl MatchAggregator {
    /// Create an aggregator with neutral experience and education scorers.
    ///
    /// Fails with a configuration error if `weights` is invalid.
    pub fn new(weights: MatchWeights) -> Result<Self> {
        weights.validate()?;

        Ok(MatchAggregator {
            weights,
            similarity: TextSimilarityScorer::new()?,
            skills: SkillOverlapScorer::new(),
            experience: Arc::new(NeutralScorer::new()),
            education: Arc::new(NeutralScorer::new()),
        })
    }

    /// Replace the experience and education scorers.
    pub fn with_scorers(
        mut self,
        experience: Arc<dyn HistoryScorer<ExperienceEntry>>,
        education: Arc<dyn HistoryScorer<EducationEntry>>,
    ) -> Self {
        self.experience = experience;
        self.education = education;
        self
    }

    /// Replace the text similarity scorer.
    pub fn with_similarity(mut self, similarity: TextSimilarityScorer) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Score `candidate` against `job`.
    pub fn aggregate(&self, job: &JobRecord, candidate: &CandidateRecord) -> MatchResult {
        let text_similarity = self
            .similarity
            .similarity(&job.match_text(), candidate.resume_text());

        let overlap = self
            .skills
            .score(job.required_skills(), candidate.skills());

        let experience = clamp_score(
            self.experience.name(),
            self.experience
                .score(job.required_experience(), candidate.experience()),
        );
        let education = clamp_score(
            self.education.name(),
            self.education
                .score(job.required_education(), candidate.education()),
        );

        let overall = self
            .weights
            .combine(text_similarity, overlap.score, experience, education);

        debug!(
            "scored candidate '{}' for job '{}': overall={overall:.4} text={text_similarity:.4} skills={:.4} experience={experience:.4} education={education:.4}",
            candidate.candidate_id(),
            job.job_id(),
            overlap.score,
        );

        MatchResult {
            job_id: job.job_id().to_string(),
            candidate_id: candidate.candidate_id().to_string(),
            skill_match_score: overlap.score,
            text_similarity_score: text_similarity,
            experience_match_score: experience,
            education_match_score: education,
            overall_match_score: overall,
            matched_skills: overlap.matched,
            missing_skills: overlap.missing,
        }
    }

    /// Score every candidate in parallel. Results keep the input order.
    pub fn aggregate_all(&self, job: &JobRecord, candidates: &[CandidateRecord]) -> Vec<MatchResult> {
        info!(
            "scoring {} candidates for job '{}'",
            candidates.len(),
            job.job_id()
        );

        candidates
            .par_iter()
            .map(|candidate| self.aggregate(job, candidate))
            .collect()
    }
}

impl std::fmt::Debug for MatchAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchAggregator")
            .field("weights", &self.weights)
            .field("similarity", &self.similarity)
            .field("experience", &self.experience.name())
            .field("education", &self.education.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRecord {
        JobRecord::builder("job-1")
            .title("Data Engineer")
            .description("Build Python and SQL data pipelines")
            .required_skills(["Python", "SQL"])
            .required_experience("3+ years")
            .required_education("Bachelor")
            .build()
            .unwrap()
    }

    struct Fixed(f64);

    impl<H> HistoryScorer<H> for Fixed {
        fn score(&self, _requirement: &str, _history: &[H]) -> f64 {
            self.0
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_aggregate_identical_text_and_full_skills() {
        let job = job();
        let candidate = CandidateRecord::builder("cand-a")
            .resume_text(job.match_text())
            .skills(["python", "sql", "docker"])
            .build()
            .unwrap();

        let aggregator = MatchAggregator::new(MatchWeights::default()).unwrap();
        let result = aggregator.aggregate(&job, &candidate);

        assert_eq!(result.job_id(), "job-1");
        assert_eq!(result.candidate_id(), "cand-a");
        assert_eq!(result.text_similarity_score(), 1.0);
        assert_eq!(result.skill_match_score(), 1.0);
        assert_eq!(result.experience_match_score(), 0.5);
        assert_eq!(result.education_match_score(), 0.5);
        assert!((result.overall_match_score() - 0.9).abs() < 1e-12);
        assert!(result.missing_skills().is_empty());
        assert_eq!(result.matched_skills().len(), 2);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let job = job();
        let candidate = CandidateRecord::builder("cand-b")
            .resume_text("Analyst with SQL reporting experience and some Python")
            .skills(["sql"])
            .build()
            .unwrap();

        let aggregator = MatchAggregator::new(MatchWeights::default()).unwrap();
        let first = aggregator.aggregate(&job, &candidate);
        let second = aggregator.aggregate(&job, &candidate);
        assert_eq!(first, second);
        assert_eq!(
            first.overall_match_score().to_bits(),
            second.overall_match_score().to_bits()
        );
    }

    #[test]
    fn test_invalid_weights_fail_construction() {
        let weights = MatchWeights {
            text_similarity: 0.9,
            ..Default::default()
        };
        let err = MatchAggregator::new(weights).unwrap_err();
        assert!(matches!(err, TalentrankError::Config(_)));
    }

    #[test]
    fn test_plugged_scorers_are_used_and_clamped() {
        let job = job();
        let candidate = CandidateRecord::builder("cand-c").build().unwrap();

        let aggregator = MatchAggregator::new(MatchWeights::default())
            .unwrap()
            .with_scorers(Arc::new(Fixed(1.0)), Arc::new(Fixed(7.5)));
        let result = aggregator.aggregate(&job, &candidate);

        assert_eq!(result.experience_match_score(), 1.0);
        assert_eq!(result.education_match_score(), 1.0);
        assert_eq!(result.text_similarity_score(), 0.0);
        assert_eq!(result.skill_match_score(), 0.0);
        assert!((result.overall_match_score() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_all_preserves_input_order() {
        let job = job();
        let candidates: Vec<CandidateRecord> = ["z", "a", "m"]
            .iter()
            .map(|id| CandidateRecord::builder(*id).skill("python").build().unwrap())
            .collect();

        let aggregator = MatchAggregator::new(MatchWeights::default()).unwrap();
        let results = aggregator.aggregate_all(&job, &candidates);
        let ids: Vec<&str> = results.iter().map(|r| r.candidate_id()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        assert!(aggregator.aggregate_all(&job, &[]).is_empty());
    }

    #[test]
    fn test_match_result_serialization_field_names() {
        let job = job();
        let candidate = CandidateRecord::builder("cand-d").skill("python").build().unwrap();
        let aggregator = MatchAggregator::new(MatchWeights::default()).unwrap();
        let result = aggregator.aggregate(&job, &candidate);

        let value = serde_json::to_value(&result).unwrap();
        for field in [
            "job_id",
            "candidate_id",
            "skill_match_score",
            "text_similarity_score",
            "experience_match_score",
            "education_match_score",
            "overall_match_score",
            "matched_skills",
            "missing_skills",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value.as_object().unwrap().len(), 9);
        assert_eq!(value["matched_skills"], serde_json::json!(["python"]));
        assert_eq!(value["missing_skills"], serde_json::json!(["sql"]));

        let parsed: MatchResult = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_match_result_data_validation() {
        let out_of_range = MatchResultData {
            job_id: "job-1".into(),
            candidate_id: "cand-1".into(),
            overall_match_score: 1.2,
            ..Default::default()
        };
        assert!(MatchResult::try_from(out_of_range).is_err());

        let overlapping = MatchResultData {
            job_id: "job-1".into(),
            candidate_id: "cand-1".into(),
            matched_skills: vec!["SQL".into()],
            missing_skills: vec!["sql".into()],
            ..Default::default()
        };
        assert!(MatchResult::try_from(overlapping).is_err());

        let missing_id = MatchResultData {
            job_id: "job-1".into(),
            ..Default::default()
        };
        assert!(matches!(
            MatchResult::try_from(missing_id),
            Err(TalentrankError::MissingField {
                field: "candidate_id",
                ..
            })
        ));
    }
}
