// Skill taxonomy: primary/secondary skill lists -> skill -> subskill mappings.

pub mod builder;
pub mod handlers;

pub use builder::{build_mapping, candidate_links, CandidateLink, SkillMapping, CONFLICT_SET};
