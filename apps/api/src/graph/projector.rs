//! Graph projector: writes candidate profiles and job roles into a
//! `GraphStore` as a sequence of merges.
//!
//! Shape written for a candidate:
//! `Industry-[HAS_JOB_ROLE]->JobRole-[HAS_EXPERIENCE_RANGE]->Experience-[HAS_SKILL]->Skill-[HAS_SUBSKILL]->SubSkill`,
//! then `Candidate-[BELONGS_TO_SUBSKILL]->SubSkill` per subskill, or
//! `Candidate-[BELONGS_TO_SKILL]->Skill` when a skill has no subskills.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::graph::store::{CandidateSummary, EdgeKind, GraphError, GraphStore, NodeKey};
use crate::models::job::ParsedJobDescription;
use crate::models::resume::ParsedResume;
use crate::profile::CandidateProfile;
use crate::taxonomy::builder::dedup_preserving_order;
use crate::taxonomy::{candidate_links, CandidateLink};
use crate::timeline::{bucket, ExperienceBucket};

/// Where in the Industry -> JobRole hierarchy a candidate is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub industry: String,
    pub job_role: String,
}

impl Placement {
    /// Uses the resume's hints, falling back to the given defaults for
    /// missing or blank values.
    pub fn for_resume(
        resume: &ParsedResume,
        default_industry: &str,
        default_job_role: &str,
    ) -> Self {
        Self {
            industry: non_blank(resume.industry.as_deref())
                .unwrap_or(default_industry)
                .to_string(),
            job_role: non_blank(resume.job_role.as_deref())
                .unwrap_or(default_job_role)
                .to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateProjection {
    pub candidate_name: String,
    pub placement: Placement,
    pub experience_bucket: ExperienceBucket,
    pub links: Vec<CandidateLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRoleProjection {
    pub job_title: String,
    pub industry: String,
    pub experience_bucket: Option<ExperienceBucket>,
    pub required_skills: Vec<String>,
}

/// Projects one candidate profile. Safe to replay: every write is a merge.
pub async fn project_candidate(
    store: &dyn GraphStore,
    profile: &CandidateProfile,
    placement: &Placement,
) -> Result<CandidateProjection, GraphError> {
    let name = profile.candidate_name.as_str();
    let experience = NodeKey::experience(profile.experience_bucket);
    let candidate = NodeKey::candidate(name);

    store
        .upsert_candidate(CandidateSummary::new(
            name,
            profile.work_experience,
            profile.experience_bucket,
        ))
        .await?;

    store
        .merge_edge(
            NodeKey::industry(&placement.industry),
            EdgeKind::HasJobRole,
            NodeKey::job_role(&placement.job_role),
        )
        .await?;
    store
        .merge_edge(
            NodeKey::job_role(&placement.job_role),
            EdgeKind::HasExperienceRange,
            experience.clone(),
        )
        .await?;

    for mapping in &profile.skill_mappings {
        let skill = NodeKey::skill(&mapping.skill);
        store
            .merge_edge(experience.clone(), EdgeKind::HasSkill, skill.clone())
            .await?;
        for subskill in &mapping.subskills {
            store
                .merge_edge(skill.clone(), EdgeKind::HasSubskill, NodeKey::subskill(subskill))
                .await?;
        }
    }

    let links = candidate_links(&profile.skill_mappings);
    for link in &links {
        let (kind, target) = match link {
            CandidateLink::Subskill { subskill, .. } => {
                (EdgeKind::BelongsToSubskill, NodeKey::subskill(subskill))
            }
            CandidateLink::Skill { skill } => (EdgeKind::BelongsToSkill, NodeKey::skill(skill)),
        };
        store.merge_edge(candidate.clone(), kind, target).await?;
    }

    info!(
        "Candidate '{}' projected under {}/{} ({}) with {} links",
        name,
        placement.industry,
        placement.job_role,
        profile.experience_bucket,
        links.len()
    );

    Ok(CandidateProjection {
        candidate_name: name.to_string(),
        placement: placement.clone(),
        experience_bucket: profile.experience_bucket,
        links,
    })
}

/// Projects a job role: its industry, required skills and, when a minimum
/// experience is given, the experience band those skills hang under.
pub async fn project_job_role(
    store: &dyn GraphStore,
    jd: &ParsedJobDescription,
    default_industry: &str,
) -> Result<JobRoleProjection, GraphError> {
    let industry = non_blank(jd.industry_name.as_deref())
        .unwrap_or(default_industry)
        .to_string();
    let job_role = NodeKey::job_role(&jd.job_title);
    let required_skills =
        dedup_preserving_order(jd.required_skills.as_deref().unwrap_or_default());
    let experience_bucket = jd.min_work_experience.map(|years| bucket(years as f64));

    store
        .merge_edge(NodeKey::industry(&industry), EdgeKind::HasJobRole, job_role.clone())
        .await?;

    for skill in &required_skills {
        store
            .merge_edge(job_role.clone(), EdgeKind::Requires, NodeKey::skill(skill))
            .await?;
    }

    if let Some(band) = experience_bucket {
        let experience = NodeKey::experience(band);
        store
            .merge_edge(job_role.clone(), EdgeKind::HasExperienceRange, experience.clone())
            .await?;
        for skill in &required_skills {
            store
                .merge_edge(experience.clone(), EdgeKind::HasSkill, NodeKey::skill(skill))
                .await?;
        }
    }

    info!(
        "Job role '{}' projected under {} with {} required skills",
        jd.job_title,
        industry,
        required_skills.len()
    );

    Ok(JobRoleProjection {
        job_title: jd.job_title.clone(),
        industry,
        experience_bucket,
        required_skills,
    })
}
