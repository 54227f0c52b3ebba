use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::graph::store::{
    validate_edge, CandidateSummary, EdgeKind, GraphError, GraphStore, NodeKey, NodeLabel,
};
use crate::timeline::ExperienceBucket;

type Edge = (NodeKey, EdgeKind, NodeKey);

#[derive(Debug, Default)]
struct GraphState {
    nodes: BTreeSet<NodeKey>,
    edges: BTreeSet<Edge>,
    candidates: BTreeMap<String, CandidateSummary>,
}

impl GraphState {
    fn has_edge(&self, from: &NodeKey, kind: EdgeKind, to: &NodeKey) -> bool {
        self.edges.contains(&(from.clone(), kind, to.clone()))
    }

    fn targets<'a>(
        &'a self,
        from: &'a NodeKey,
        kind: EdgeKind,
    ) -> impl Iterator<Item = &'a NodeKey> + 'a {
        self.edges
            .iter()
            .filter(move |(f, k, _)| f == from && *k == kind)
            .map(|(_, _, t)| t)
    }

    fn sources<'a>(
        &'a self,
        kind: EdgeKind,
        to: &'a NodeKey,
    ) -> impl Iterator<Item = &'a NodeKey> + 'a {
        self.edges
            .iter()
            .filter(move |(_, k, t)| t == to && *k == kind)
            .map(|(f, _, _)| f)
    }

    /// Candidates linked to the skill directly or to any of its subskills.
    fn candidates_reaching_skill(&self, skill: &NodeKey) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = self
            .sources(EdgeKind::BelongsToSkill, skill)
            .map(|c| c.name.clone())
            .collect();
        for subskill in self.targets(skill, EdgeKind::HasSubskill) {
            names.extend(
                self.sources(EdgeKind::BelongsToSubskill, subskill)
                    .map(|c| c.name.clone()),
            );
        }
        names
    }

    /// Candidate nodes merged without properties are not reported.
    fn summaries(&self, names: BTreeSet<String>) -> Vec<CandidateSummary> {
        names
            .iter()
            .filter_map(|name| self.candidates.get(name).cloned())
            .collect()
    }

    /// Skill nodes are shared across bands, so the candidate's own band decides.
    fn summaries_in(
        &self,
        names: BTreeSet<String>,
        bucket: ExperienceBucket,
    ) -> Vec<CandidateSummary> {
        names
            .iter()
            .filter_map(|name| self.candidates.get(name))
            .filter(|summary| summary.experience_bucket == bucket)
            .cloned()
            .collect()
    }
}

/// Process-local graph with merge-by-key semantics. Writers serialize on the
/// lock; readers see a consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryGraph {
    state: RwLock<GraphState>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn node_count(&self) -> usize {
        self.state.read().await.nodes.len()
    }

    pub async fn edge_count(&self) -> usize {
        self.state.read().await.edges.len()
    }

    pub async fn contains_edge(&self, from: &NodeKey, kind: EdgeKind, to: &NodeKey) -> bool {
        self.state.read().await.has_edge(from, kind, to)
    }
}

#[async_trait]
impl GraphStore for InMemoryGraph {
    async fn merge_edge(
        &self,
        from: NodeKey,
        kind: EdgeKind,
        to: NodeKey,
    ) -> Result<(), GraphError> {
        validate_edge(&from, kind, &to)?;
        let mut state = self.state.write().await;
        state.nodes.insert(from.clone());
        state.nodes.insert(to.clone());
        state.edges.insert((from, kind, to));
        Ok(())
    }

    async fn upsert_candidate(&self, summary: CandidateSummary) -> Result<(), GraphError> {
        let mut state = self.state.write().await;
        state.nodes.insert(NodeKey::candidate(&summary.name));
        state.candidates.insert(summary.name.clone(), summary);
        Ok(())
    }

    async fn detach_delete(&self, key: &NodeKey) -> Result<bool, GraphError> {
        let mut state = self.state.write().await;
        if !state.nodes.remove(key) {
            return Ok(false);
        }
        state.edges.retain(|(from, _, to)| from != key && to != key);
        if key.label == NodeLabel::Candidate {
            state.candidates.remove(&key.name);
        }
        Ok(true)
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateSummary>, GraphError> {
        Ok(self.state.read().await.candidates.values().cloned().collect())
    }

    async fn list_job_roles(&self) -> Result<Vec<String>, GraphError> {
        Ok(self
            .state
            .read()
            .await
            .nodes
            .iter()
            .filter(|n| n.label == NodeLabel::JobRole)
            .map(|n| n.name.clone())
            .collect())
    }

    async fn candidates_for_skill(
        &self,
        bucket: ExperienceBucket,
        skill: &str,
    ) -> Result<Vec<CandidateSummary>, GraphError> {
        let guard = self.state.read().await;
        let state: &GraphState = &guard;
        let skill = NodeKey::skill(skill);
        if !state.has_edge(&NodeKey::experience(bucket), EdgeKind::HasSkill, &skill) {
            return Ok(vec![]);
        }
        let names = state.candidates_reaching_skill(&skill);
        Ok(state.summaries_in(names, bucket))
    }

    async fn candidates_for_subskill(
        &self,
        industry: &str,
        bucket: ExperienceBucket,
        skill: &str,
        subskill: &str,
    ) -> Result<Vec<CandidateSummary>, GraphError> {
        let guard = self.state.read().await;
        let state: &GraphState = &guard;
        let industry = NodeKey::industry(industry);
        let experience = NodeKey::experience(bucket);
        let skill = NodeKey::skill(skill);
        let subskill = NodeKey::subskill(subskill);

        let chain_exists = state
            .targets(&industry, EdgeKind::HasJobRole)
            .any(|role| state.has_edge(role, EdgeKind::HasExperienceRange, &experience))
            && state.has_edge(&experience, EdgeKind::HasSkill, &skill)
            && state.has_edge(&skill, EdgeKind::HasSubskill, &subskill);
        if !chain_exists {
            return Ok(vec![]);
        }

        let names = state
            .sources(EdgeKind::BelongsToSubskill, &subskill)
            .map(|c| c.name.clone())
            .collect();
        Ok(state.summaries_in(names, bucket))
    }

    async fn candidates_for_job(
        &self,
        job_title: &str,
    ) -> Result<Vec<CandidateSummary>, GraphError> {
        let guard = self.state.read().await;
        let state: &GraphState = &guard;
        let job = NodeKey::job_role(job_title);
        let mut names = BTreeSet::new();
        for skill in state.targets(&job, EdgeKind::Requires) {
            names.extend(state.candidates_reaching_skill(skill));
        }
        Ok(state.summaries(names))
    }

    async fn job_roles_for_candidate(&self, candidate: &str) -> Result<Vec<String>, GraphError> {
        let guard = self.state.read().await;
        let state: &GraphState = &guard;
        let candidate = NodeKey::candidate(candidate);

        let mut skills: BTreeSet<&NodeKey> =
            state.targets(&candidate, EdgeKind::BelongsToSkill).collect();
        for subskill in state.targets(&candidate, EdgeKind::BelongsToSubskill) {
            skills.extend(state.sources(EdgeKind::HasSubskill, subskill));
        }

        let roles: BTreeSet<String> = skills
            .into_iter()
            .flat_map(|skill| state.sources(EdgeKind::Requires, skill))
            .map(|role| role.name.clone())
            .collect();
        Ok(roles.into_iter().collect())
    }
}
