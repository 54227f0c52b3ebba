use serde::{Deserialize, Serialize};

use crate::timeline::{Duration, RawInterval};

/// Fallback name for resumes where extraction found none.
pub const UNKNOWN_CANDIDATE: &str = "Unknown";

/// Structured resume as produced by the extraction layer. Every field is
/// optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    /// Extractor-estimated total; replaced by the merged timeline whenever
    /// `experiences` is non-empty.
    #[serde(default)]
    pub work_experience: Option<Duration>,
    #[serde(default)]
    pub educations_duration: Option<Duration>,
    #[serde(default)]
    pub experiences: Option<Vec<ExperienceRecord>>,
    #[serde(default)]
    pub educations: Option<Vec<EducationRecord>>,
    #[serde(default)]
    pub skills: Option<SkillLists>,
    /// Placement hints; the configured defaults apply when absent.
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub date_end: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRecord {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date_start: Option<String>,
    #[serde(default)]
    pub date_end: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillLists {
    #[serde(default)]
    pub primary_skills: Option<Vec<String>>,
    #[serde(default)]
    pub secondary_skills: Option<Vec<String>>,
}

impl ExperienceRecord {
    pub fn interval(&self) -> RawInterval {
        RawInterval {
            date_start: self.date_start.clone(),
            date_end: self.date_end.clone(),
        }
    }
}

impl EducationRecord {
    pub fn interval(&self) -> RawInterval {
        RawInterval {
            date_start: self.date_start.clone(),
            date_end: self.date_end.clone(),
        }
    }
}

impl ParsedResume {
    /// Blank names count as missing.
    pub fn candidate_name(&self) -> &str {
        self.candidate_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_CANDIDATE)
    }

    pub fn primary_skills(&self) -> Option<&[String]> {
        self.skills
            .as_ref()
            .and_then(|s| s.primary_skills.as_deref())
    }

    pub fn secondary_skills(&self) -> Option<&[String]> {
        self.skills
            .as_ref()
            .and_then(|s| s.secondary_skills.as_deref())
    }

    pub fn experience_intervals(&self) -> Vec<RawInterval> {
        self.experiences
            .iter()
            .flatten()
            .map(ExperienceRecord::interval)
            .collect()
    }

    pub fn education_intervals(&self) -> Vec<RawInterval> {
        self.educations
            .iter()
            .flatten()
            .map(EducationRecord::interval)
            .collect()
    }
}
