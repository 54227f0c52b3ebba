//! Graph store: the seam between projection/queries and whatever backs the
//! knowledge graph.
//!
//! Every write is a merge keyed by `(label, name)`, so replaying a projection
//! is harmless.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::{Duration, ExperienceBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeLabel {
    Industry,
    JobRole,
    Experience,
    Skill,
    SubSkill,
    Candidate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    HasJobRole,
    HasExperienceRange,
    HasSkill,
    HasSubskill,
    BelongsToSubskill,
    BelongsToSkill,
    Requires,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::HasJobRole => "HAS_JOB_ROLE",
            EdgeKind::HasExperienceRange => "HAS_EXPERIENCE_RANGE",
            EdgeKind::HasSkill => "HAS_SKILL",
            EdgeKind::HasSubskill => "HAS_SUBSKILL",
            EdgeKind::BelongsToSubskill => "BELONGS_TO_SUBSKILL",
            EdgeKind::BelongsToSkill => "BELONGS_TO_SKILL",
            EdgeKind::Requires => "REQUIRES",
        }
    }
}

/// Identity of a node. Two merges with the same key address the same node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    pub label: NodeLabel,
    pub name: String,
}

impl NodeKey {
    pub fn new(label: NodeLabel, name: impl Into<String>) -> Self {
        Self {
            label,
            name: name.into(),
        }
    }

    pub fn industry(name: &str) -> Self {
        Self::new(NodeLabel::Industry, name)
    }

    pub fn job_role(title: &str) -> Self {
        Self::new(NodeLabel::JobRole, title)
    }

    pub fn experience(bucket: ExperienceBucket) -> Self {
        Self::new(NodeLabel::Experience, bucket.label())
    }

    pub fn skill(name: &str) -> Self {
        Self::new(NodeLabel::Skill, name)
    }

    pub fn subskill(name: &str) -> Self {
        Self::new(NodeLabel::SubSkill, name)
    }

    pub fn candidate(name: &str) -> Self {
        Self::new(NodeLabel::Candidate, name)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.label, self.name)
    }
}

/// Properties stored on a candidate node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub name: String,
    pub experience_years: i64,
    pub experience_months: u32,
    pub experience_bucket: ExperienceBucket,
}

impl CandidateSummary {
    pub fn new(name: &str, experience: Duration, bucket: ExperienceBucket) -> Self {
        Self {
            name: name.to_string(),
            experience_years: experience.years,
            experience_months: experience.months,
            experience_bucket: bucket,
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Edge {kind} cannot connect {from} to {to}")]
    InvalidEdge {
        kind: &'static str,
        from: NodeKey,
        to: NodeKey,
    },
}

/// Backend for the knowledge graph. Held by `AppState` as `Arc<dyn GraphStore>`.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Merges both endpoints and the edge between them.
    async fn merge_edge(&self, from: NodeKey, kind: EdgeKind, to: NodeKey)
        -> Result<(), GraphError>;

    /// Merges the candidate node and overwrites its properties.
    async fn upsert_candidate(&self, summary: CandidateSummary) -> Result<(), GraphError>;

    /// Removes the node and every edge touching it. Returns `false` if absent.
    async fn detach_delete(&self, key: &NodeKey) -> Result<bool, GraphError>;

    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, GraphError>;

    async fn list_job_roles(&self) -> Result<Vec<String>, GraphError>;

    /// Candidates under `Experience(bucket)-[HAS_SKILL]->Skill(skill)`, reached
    /// through any of the skill's subskills or linked to the skill directly.
    /// Only candidates whose own band is `bucket` are returned.
    async fn candidates_for_skill(
        &self,
        bucket: ExperienceBucket,
        skill: &str,
    ) -> Result<Vec<CandidateSummary>, GraphError>;

    /// Candidates at the end of
    /// `Industry->JobRole->Experience(bucket)->Skill->SubSkill<-Candidate`,
    /// restricted to candidates in `bucket`.
    async fn candidates_for_subskill(
        &self,
        industry: &str,
        bucket: ExperienceBucket,
        skill: &str,
        subskill: &str,
    ) -> Result<Vec<CandidateSummary>, GraphError>;

    /// Candidates reaching any skill the job role requires.
    async fn candidates_for_job(&self, job_title: &str)
        -> Result<Vec<CandidateSummary>, GraphError>;

    /// Job roles requiring any skill the candidate reaches.
    async fn job_roles_for_candidate(&self, candidate: &str) -> Result<Vec<String>, GraphError>;
}

/// Edge endpoints must follow the fixed taxonomy shape.
pub fn validate_edge(from: &NodeKey, kind: EdgeKind, to: &NodeKey) -> Result<(), GraphError> {
    use NodeLabel::*;
    let allowed = matches!(
        (from.label, kind, to.label),
        (Industry, EdgeKind::HasJobRole, JobRole)
            | (JobRole, EdgeKind::HasExperienceRange, Experience)
            | (Experience, EdgeKind::HasSkill, Skill)
            | (Skill, EdgeKind::HasSubskill, SubSkill)
            | (Candidate, EdgeKind::BelongsToSubskill, SubSkill)
            | (Candidate, EdgeKind::BelongsToSkill, Skill)
            | (JobRole, EdgeKind::Requires, Skill)
    );
    if allowed {
        Ok(())
    } else {
        Err(GraphError::InvalidEdge {
            kind: kind.as_str(),
            from: from.clone(),
            to: to.clone(),
        })
    }
}
