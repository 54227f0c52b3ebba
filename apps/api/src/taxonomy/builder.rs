//! Skill taxonomy builder: flat primary/secondary skill lists into a
//! two-level skill → subskill mapping.
//!
//! Labels are compared exactly: no case folding or trimming.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Soft skills that are never treated as subskills.
pub const CONFLICT_SET: [&str; 3] = ["Problem Solving", "Communication", "Critical Thinking"];

/// One primary skill with the subskills linked beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMapping {
    pub skill: String,
    pub subskills: Vec<String>,
}

/// How a candidate attaches to the taxonomy for one mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "granularity", rename_all = "snake_case")]
pub enum CandidateLink {
    Subskill { skill: String, subskill: String },
    Skill { skill: String },
}

impl SkillMapping {
    /// Subskill-level links when any subskills survived filtering, otherwise a
    /// single direct link to the skill.
    pub fn candidate_links(&self) -> Vec<CandidateLink> {
        if self.subskills.is_empty() {
            return vec![CandidateLink::Skill {
                skill: self.skill.clone(),
            }];
        }
        self.subskills
            .iter()
            .map(|subskill| CandidateLink::Subskill {
                skill: self.skill.clone(),
                subskill: subskill.clone(),
            })
            .collect()
    }
}

/// Drops repeated labels, keeping the first occurrence of each.
pub fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.as_str()))
        .cloned()
        .collect()
}

/// Builds one mapping per distinct primary skill.
///
/// Every primary skill receives the same subskill pool: the distinct
/// secondary skills minus the primary skills and `CONFLICT_SET`.
pub fn build_mapping(
    primary: Option<&[String]>,
    secondary: Option<&[String]>,
) -> Vec<SkillMapping> {
    let primary = dedup_preserving_order(primary.unwrap_or_default());
    let secondary = dedup_preserving_order(secondary.unwrap_or_default());

    let primary_set: HashSet<&str> = primary.iter().map(String::as_str).collect();
    let filtered_secondary: Vec<String> = secondary
        .into_iter()
        .filter(|s| !primary_set.contains(s.as_str()) && !CONFLICT_SET.contains(&s.as_str()))
        .collect();

    primary
        .into_iter()
        .map(|skill| SkillMapping {
            skill,
            subskills: filtered_secondary.clone(),
        })
        .collect()
}

/// Flattens every mapping into its candidate links.
pub fn candidate_links(mappings: &[SkillMapping]) -> Vec<CandidateLink> {
    mappings.iter().flat_map(SkillMapping::candidate_links).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_secondary_filtered_against_primary() {
        let primary = labels(&["Python"]);
        let secondary = labels(&["Python", "SQL"]);
        let mappings = build_mapping(Some(&primary), Some(&secondary));
        assert_eq!(
            mappings,
            vec![SkillMapping {
                skill: "Python".to_string(),
                subskills: labels(&["SQL"]),
            }]
        );
    }

    #[test]
    fn test_conflict_set_empties_subskills() {
        let primary = labels(&["Python"]);
        let secondary = labels(&["Communication"]);
        let mappings = build_mapping(Some(&primary), Some(&secondary));
        assert_eq!(mappings.len(), 1);
        assert!(mappings[0].subskills.is_empty());
    }

    #[test]
    fn test_missing_inputs_are_empty() {
        assert!(build_mapping(None, None).is_empty());
        let secondary = labels(&["SQL"]);
        assert!(build_mapping(None, Some(&secondary)).is_empty());
    }

    #[test]
    fn test_primary_without_secondary() {
        let primary = labels(&["Rust", "Go"]);
        let mappings = build_mapping(Some(&primary), None);
        assert_eq!(mappings.len(), 2);
        assert!(mappings.iter().all(|m| m.subskills.is_empty()));
    }

    #[test]
    fn test_broadcast_shares_pool_across_primaries() {
        let primary = labels(&["Python", "Excel"]);
        let secondary = labels(&["Pandas", "VBA", "Critical Thinking"]);
        let mappings = build_mapping(Some(&primary), Some(&secondary));
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].subskills, labels(&["Pandas", "VBA"]));
        assert_eq!(mappings[0].subskills, mappings[1].subskills);
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let primary = labels(&["SQL", "Python", "SQL", "Java", "Python"]);
        let secondary = labels(&["Docker", "Git", "Docker"]);
        let mappings = build_mapping(Some(&primary), Some(&secondary));
        let skills: Vec<&str> = mappings.iter().map(|m| m.skill.as_str()).collect();
        assert_eq!(skills, vec!["SQL", "Python", "Java"]);
        assert_eq!(mappings[0].subskills, labels(&["Docker", "Git"]));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let primary = labels(&["python"]);
        let secondary = labels(&["Python", "communication"]);
        let mappings = build_mapping(Some(&primary), Some(&secondary));
        assert_eq!(mappings[0].subskills, labels(&["Python", "communication"]));
    }

    #[test]
    fn test_links_subskill_level_when_pool_non_empty() {
        let mapping = SkillMapping {
            skill: "Python".to_string(),
            subskills: labels(&["SQL", "Pandas"]),
        };
        assert_eq!(
            mapping.candidate_links(),
            vec![
                CandidateLink::Subskill {
                    skill: "Python".to_string(),
                    subskill: "SQL".to_string(),
                },
                CandidateLink::Subskill {
                    skill: "Python".to_string(),
                    subskill: "Pandas".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_links_skill_level_when_pool_empty() {
        let mapping = SkillMapping {
            skill: "Python".to_string(),
            subskills: vec![],
        };
        assert_eq!(
            mapping.candidate_links(),
            vec![CandidateLink::Skill {
                skill: "Python".to_string()
            }]
        );
    }

    #[test]
    fn test_candidate_link_serializes_with_granularity_tag() {
        let link = CandidateLink::Skill {
            skill: "Rust".to_string(),
        };
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["granularity"], "skill");
        assert_eq!(value["skill"], "Rust");
    }
}
