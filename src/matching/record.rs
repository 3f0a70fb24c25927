//! Normalized job and candidate records.
//!
//! Records are validated when they are built, either through the builders or
//! through serde deserialization, so the aggregator never sees a record it
//! cannot score. Skill lists are normalized once here (see
//! [`normalize_skill`](crate::matching::skills::normalize_skill)).
//!
//! # Examples
//!
//! ```
//! use talentrank::matching::record::JobRecord;
//!
//! let job = JobRecord::builder("job-1")
//!     .title("Data Engineer")
//!     .required_skills(["Python", " SQL "])
//!     .build()
//!     .unwrap();
//!
//! assert!(job.required_skills().contains("sql"));
//! assert!(JobRecord::builder("  ").build().is_err());
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentrankError};
use crate::matching::skills::normalize_skills;

/// A job posting as consumed by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JobRecordData")]
pub struct JobRecord {
    job_id: String,
    title: String,
    description: String,
    required_skills: BTreeSet<String>,
    required_experience: String,
    required_education: String,
}

/// Nested requirement block accepted on input (`{"requirements": {"skills": [...]}}`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobRequirementsData {
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
}

/// Unvalidated job fields, as read from the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobRecordData {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub required_experience: String,
    pub required_education: String,
    pub requirements: Option<JobRequirementsData>,
}

impl TryFrom<JobRecordData> for JobRecord {
    type Error = TalentrankError;

    fn try_from(data: JobRecordData) -> Result<Self> {
        let job_id = data.job_id.trim();
        if job_id.is_empty() {
            return Err(TalentrankError::missing_field("job", "job_id"));
        }

        let mut skills = data.required_skills;
        let mut required_experience = data.required_experience;
        let mut required_education = data.required_education;
        if let Some(requirements) = data.requirements {
            skills.extend(requirements.skills);
            if required_experience.trim().is_empty() {
                required_experience = requirements.experience;
            }
            if required_education.trim().is_empty() {
                required_education = requirements.education;
            }
        }

        Ok(JobRecord {
            job_id: job_id.to_string(),
            title: data.title,
            description: data.description,
            required_skills: normalize_skills(skills),
            required_experience,
            required_education,
        })
    }
}

impl JobRecord {
    /// Start building a job record with the given identifier.
    pub fn builder<S: Into<String>>(job_id: S) -> JobRecordBuilder {
        JobRecordBuilder {
            data: JobRecordData {
                job_id: job_id.into(),
                ..Default::default()
            },
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Normalized required skills.
    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    pub fn required_experience(&self) -> &str {
        &self.required_experience
    }

    pub fn required_education(&self) -> &str {
        &self.required_education
    }

    /// The text compared against a resume: `"{title} {description}"`.
    pub fn match_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Builder for [`JobRecord`].
#[derive(Debug, Clone)]
pub struct JobRecordBuilder {
    data: JobRecordData,
}

impl JobRecordBuilder {
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.data.title = title.into();
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.data.description = description.into();
        self
    }

    pub fn required_skill<S: Into<String>>(mut self, skill: S) -> Self {
        self.data.required_skills.push(skill.into());
        self
    }

    pub fn required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data
            .required_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn required_experience<S: Into<String>>(mut self, requirement: S) -> Self {
        self.data.required_experience = requirement.into();
        self
    }

    pub fn required_education<S: Into<String>>(mut self, requirement: S) -> Self {
        self.data.required_education = requirement.into();
        self
    }

    /// Validate and build the record.
    pub fn build(self) -> Result<JobRecord> {
        JobRecord::try_from(self.data)
    }
}

/// One position in a candidate's work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

/// One degree or qualification in a candidate's education history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: String,
}

/// A candidate profile as consumed by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CandidateRecordData")]
pub struct CandidateRecord {
    candidate_id: String,
    resume_text: String,
    skills: BTreeSet<String>,
    experience: Vec<ExperienceEntry>,
    education: Vec<EducationEntry>,
}

/// Unvalidated candidate fields, as read from the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CandidateRecordData {
    pub candidate_id: String,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl TryFrom<CandidateRecordData> for CandidateRecord {
    type Error = TalentrankError;

    fn try_from(data: CandidateRecordData) -> Result<Self> {
        let candidate_id = data.candidate_id.trim();
        if candidate_id.is_empty() {
            return Err(TalentrankError::missing_field("candidate", "candidate_id"));
        }

        Ok(CandidateRecord {
            candidate_id: candidate_id.to_string(),
            resume_text: data.resume_text,
            skills: normalize_skills(data.skills),
            experience: data.experience,
            education: data.education,
        })
    }
}

impl CandidateRecord {
    /// Start building a candidate record with the given identifier.
    pub fn builder<S: Into<String>>(candidate_id: S) -> CandidateRecordBuilder {
        CandidateRecordBuilder {
            data: CandidateRecordData {
                candidate_id: candidate_id.into(),
                ..Default::default()
            },
        }
    }

    pub fn candidate_id(&self) -> &str {
        &self.candidate_id
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    /// Normalized skills.
    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }
}

/// Builder for [`CandidateRecord`].
#[derive(Debug, Clone)]
pub struct CandidateRecordBuilder {
    data: CandidateRecordData,
}

impl CandidateRecordBuilder {
    pub fn resume_text<S: Into<String>>(mut self, text: S) -> Self {
        self.data.resume_text = text.into();
        self
    }

    pub fn skill<S: Into<String>>(mut self, skill: S) -> Self {
        self.data.skills.push(skill.into());
        self
    }

    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn experience(mut self, entry: ExperienceEntry) -> Self {
        self.data.experience.push(entry);
        self
    }

    pub fn education(mut self, entry: EducationEntry) -> Self {
        self.data.education.push(entry);
        self
    }

    /// Validate and build the record.
    pub fn build(self) -> Result<CandidateRecord> {
        CandidateRecord::try_from(self.data)
    }
}
