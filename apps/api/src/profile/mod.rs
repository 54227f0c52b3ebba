//! Candidate profile: composes the timeline, bucketing and taxonomy steps
//! for one parsed resume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::resume::ParsedResume;
use crate::taxonomy::{build_mapping, SkillMapping};
use crate::timeline::{aggregate_raw, bucket, Duration, ExperienceBucket, RawInterval};

/// Everything the graph projector needs about one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_name: String,
    pub work_experience: Duration,
    pub education_duration: Duration,
    pub experience_bucket: ExperienceBucket,
    pub skill_mappings: Vec<SkillMapping>,
}

/// Builds a profile, resolving open-ended or malformed dates against `today`.
pub fn build_candidate_profile(resume: &ParsedResume, today: NaiveDate) -> CandidateProfile {
    let work_experience = merged_or_reported(
        &resume.experience_intervals(),
        resume.work_experience,
        today,
    );
    let education_duration = merged_or_reported(
        &resume.education_intervals(),
        resume.educations_duration,
        today,
    );

    CandidateProfile {
        candidate_name: resume.candidate_name().to_string(),
        work_experience,
        education_duration,
        experience_bucket: bucket(work_experience.fractional_years()),
        skill_mappings: build_mapping(resume.primary_skills(), resume.secondary_skills()),
    }
}

/// The merged timeline when there are intervals to merge, otherwise whatever
/// the extractor reported (normalized), otherwise zero.
fn merged_or_reported(
    intervals: &[RawInterval],
    reported: Option<Duration>,
    today: NaiveDate,
) -> Duration {
    if intervals.is_empty() {
        reported.map(|d| d.normalized()).unwrap_or_default()
    } else {
        aggregate_raw(intervals, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationRecord, ExperienceRecord, SkillLists};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn experience(start: &str, end: &str) -> ExperienceRecord {
        ExperienceRecord {
            date_start: Some(start.to_string()),
            date_end: Some(end.to_string()),
            ..Default::default()
        }
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_resume_defaults() {
        let profile = build_candidate_profile(&ParsedResume::default(), today());
        assert_eq!(profile.candidate_name, "Unknown");
        assert_eq!(profile.work_experience, Duration::default());
        assert_eq!(profile.experience_bucket, ExperienceBucket::UpToOne);
        assert!(profile.skill_mappings.is_empty());
    }

    #[test]
    fn test_merged_timeline_overrides_reported_value() {
        let resume = ParsedResume {
            candidate_name: Some("Ada".to_string()),
            work_experience: Some(Duration {
                years: 10,
                months: 0,
            }),
            experiences: Some(vec![
                experience("2020-01-01", "2021-06-01"),
                experience("2020-06-01", "2022-01-01"),
            ]),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.work_experience, Duration { years: 2, months: 0 });
        assert_eq!(profile.experience_bucket, ExperienceBucket::TwoToFour);
    }

    #[test]
    fn test_reported_value_kept_without_experiences() {
        let resume = ParsedResume {
            work_experience: Some(Duration { years: 4, months: 3 }),
            experiences: Some(vec![]),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.work_experience, Duration { years: 4, months: 3 });
        assert_eq!(profile.experience_bucket, ExperienceBucket::FourToEight);
    }

    #[test]
    fn test_reported_months_overflow_carried_into_years() {
        let resume = ParsedResume {
            work_experience: Some(Duration {
                years: 1,
                months: 30,
            }),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.work_experience, Duration { years: 3, months: 6 });
        assert_eq!(profile.experience_bucket, ExperienceBucket::TwoToFour);
    }

    #[test]
    fn test_blank_name_becomes_unknown() {
        let resume = ParsedResume {
            candidate_name: Some("   ".to_string()),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.candidate_name, "Unknown");
    }

    #[test]
    fn test_ongoing_role_measured_to_today() {
        let resume = ParsedResume {
            experiences: Some(vec![experience("2016-06-01", "present")]),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.work_experience, Duration { years: 8, months: 0 });
        assert_eq!(profile.experience_bucket, ExperienceBucket::EightToSixteen);
    }

    #[test]
    fn test_education_duration_merged() {
        let resume = ParsedResume {
            educations: Some(vec![
                EducationRecord {
                    date_start: Some("2012-09-01".to_string()),
                    date_end: Some("2015-06-01".to_string()),
                    ..Default::default()
                },
                EducationRecord {
                    date_start: Some("2015-09-01".to_string()),
                    date_end: Some("2016-09-01".to_string()),
                    ..Default::default()
                },
            ]),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.education_duration, Duration { years: 3, months: 9 });
    }

    #[test]
    fn test_skill_mappings_built_from_lists() {
        let resume = ParsedResume {
            skills: Some(SkillLists {
                primary_skills: Some(labels(&["Python"])),
                secondary_skills: Some(labels(&["Python", "SQL", "Communication"])),
            }),
            ..Default::default()
        };
        let profile = build_candidate_profile(&resume, today());
        assert_eq!(profile.skill_mappings.len(), 1);
        assert_eq!(profile.skill_mappings[0].subskills, labels(&["SQL"]));
    }
}
