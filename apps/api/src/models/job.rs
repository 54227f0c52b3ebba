use serde::{Deserialize, Serialize};

/// Structured job description as produced by the extraction layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedJobDescription {
    pub job_title: String,
    #[serde(default)]
    pub industry_name: Option<String>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    /// Minimum years of experience; places the role in an experience band.
    #[serde(default)]
    pub min_work_experience: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_jd_deserializes() {
        let jd: ParsedJobDescription =
            serde_json::from_str(r#"{"job_title": "Risk Analyst"}"#).unwrap();
        assert_eq!(jd.job_title, "Risk Analyst");
        assert!(jd.industry_name.is_none());
        assert!(jd.required_skills.is_none());
        assert!(jd.min_work_experience.is_none());
    }

    #[test]
    fn test_full_jd_deserializes() {
        let jd: ParsedJobDescription = serde_json::from_str(
            r#"{"job_title": "Quant", "industry_name": "Finances",
                "required_skills": ["Python", "Statistics"], "min_work_experience": 5,
                "job_description": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(jd.min_work_experience, Some(5));
        assert_eq!(jd.required_skills.unwrap().len(), 2);
    }
}
