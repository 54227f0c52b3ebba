use axum::Json;
use serde::{Deserialize, Serialize};

use crate::taxonomy::{build_mapping, candidate_links, CandidateLink, SkillMapping};

#[derive(Debug, Deserialize)]
pub struct TaxonomyRequest {
    #[serde(default)]
    pub primary_skills: Option<Vec<String>>,
    #[serde(default)]
    pub secondary_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub mappings: Vec<SkillMapping>,
    pub links: Vec<CandidateLink>,
}

/// POST /api/v1/skills/taxonomy
///
/// Previews the skill -> subskill mapping and the links a candidate would get.
pub async fn handle_build_taxonomy(Json(req): Json<TaxonomyRequest>) -> Json<TaxonomyResponse> {
    let mappings = build_mapping(
        req.primary_skills.as_deref(),
        req.secondary_skills.as_deref(),
    );
    let links = candidate_links(&mappings);
    Json(TaxonomyResponse { mappings, links })
}
