//! Result schemas — the contract every generation call must satisfy.
//!
//! Every field carries a serde default so a partially-filled model response
//! still decodes into a structurally complete value: missing strings become
//! `""`, missing sequences become `[]`, missing scores become 0. Downstream
//! consumers never branch on presence/absence.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Upper bound for every dimension score.
pub const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Multi-criteria evaluation of a résumé against a job description.
///
/// Scores are 0–100. `keyword_score` has no detail string of its own — its
/// findings are reported through `key_strengths` and `missing_skills`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationReport {
    pub candidate_name: String,
    pub overall_score: u32,
    pub overall_summary: String,
    pub writing_score: u32,
    pub writing_detail: String,
    pub ats_score: u32,
    pub ats_detail: String,
    pub skill_score: u32,
    pub skill_detail: String,
    pub experience_score: u32,
    pub experience_detail: String,
    pub keyword_score: u32,
    pub key_strengths: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl EvaluationReport {
    /// Structurally valid, zeroed report returned when the generation path
    /// fails. The diagnostic lands in `overall_summary` — the only free-text
    /// field a UI always renders.
    pub fn fallback(diagnostic: &str) -> Self {
        EvaluationReport {
            candidate_name: "Unknown".to_string(),
            overall_summary: format!("Error: {diagnostic}"),
            ..EvaluationReport::default()
        }
    }

    /// Caps every score at 100. Generation backends occasionally score on
    /// a different scale than instructed.
    pub fn clamp_scores(mut self) -> Self {
        self.overall_score = self.overall_score.min(MAX_SCORE);
        self.writing_score = self.writing_score.min(MAX_SCORE);
        self.ats_score = self.ats_score.min(MAX_SCORE);
        self.skill_score = self.skill_score.min(MAX_SCORE);
        self.experience_score = self.experience_score.min(MAX_SCORE);
        self.keyword_score = self.keyword_score.min(MAX_SCORE);
        self
    }

    /// Gemini response schema declared on evaluation calls.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "candidate_name": {"type": "STRING"},
                "overall_score": {"type": "INTEGER"},
                "overall_summary": {"type": "STRING"},
                "writing_score": {"type": "INTEGER"},
                "writing_detail": {"type": "STRING"},
                "ats_score": {"type": "INTEGER"},
                "ats_detail": {"type": "STRING"},
                "skill_score": {"type": "INTEGER"},
                "skill_detail": {"type": "STRING"},
                "experience_score": {"type": "INTEGER"},
                "experience_detail": {"type": "STRING"},
                "keyword_score": {"type": "INTEGER"},
                "key_strengths": {"type": "ARRAY", "items": {"type": "STRING"}},
                "missing_skills": {"type": "ARRAY", "items": {"type": "STRING"}}
            },
            "required": ["candidate_name", "overall_score", "overall_summary"]
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized résumé
// ────────────────────────────────────────────────────────────────────────────

/// Contact block. Each field is independently optional — an empty string
/// means the source document did not carry it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// A résumé restructured into a fixed shape. Produced by both the verbatim
/// extraction and the rewrite operation — only the prompt differs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedResume {
    pub full_name: String,
    pub professional_summary: String,
    pub contact_info: ContactInfo,
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub work_experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl NormalizedResume {
    /// Empty placeholder résumé for failed generation calls.
    ///
    /// Call sites pass different placeholder names: "Candidate" when a
    /// verbatim extraction fails (the editor still renders an empty form),
    /// "Error" when a rewrite fails (the user asked for new content and
    /// must see that none was produced).
    pub fn fallback(placeholder_name: &str, summary: &str) -> Self {
        NormalizedResume {
            full_name: placeholder_name.to_string(),
            professional_summary: summary.to_string(),
            ..NormalizedResume::default()
        }
    }

    /// Gemini response schema declared on extraction and rewrite calls.
    pub fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "full_name": {"type": "STRING"},
                "professional_summary": {"type": "STRING"},
                "contact_info": {
                    "type": "OBJECT",
                    "properties": {
                        "email": {"type": "STRING"},
                        "phone": {"type": "STRING"},
                        "location": {"type": "STRING"}
                    }
                },
                "hard_skills": {"type": "ARRAY", "items": {"type": "STRING"}},
                "soft_skills": {"type": "ARRAY", "items": {"type": "STRING"}},
                "work_experience": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "job_title": {"type": "STRING"},
                            "company": {"type": "STRING"},
                            "duration": {"type": "STRING"},
                            "achievements": {"type": "ARRAY", "items": {"type": "STRING"}}
                        }
                    }
                },
                "education": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "degree": {"type": "STRING"},
                            "institution": {"type": "STRING"},
                            "graduation_year": {"type": "STRING"}
                        }
                    }
                },
                "projects": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {"type": "STRING"},
                            "description": {"type": "STRING"},
                            "technologies": {"type": "ARRAY", "items": {"type": "STRING"}}
                        }
                    }
                }
            },
            "required": ["full_name"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_fallback_is_zeroed_and_complete() {
        let report = EvaluationReport::fallback("backend unreachable");
        assert_eq!(report.candidate_name, "Unknown");
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.writing_score, 0);
        assert_eq!(report.ats_score, 0);
        assert_eq!(report.skill_score, 0);
        assert_eq!(report.experience_score, 0);
        assert_eq!(report.keyword_score, 0);
        assert!(report.overall_summary.contains("backend unreachable"));
        assert!(report.key_strengths.is_empty());
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn test_evaluation_deserializes_with_missing_fields() {
        // A sparse model response must still decode to a complete record.
        let json = r#"{"candidate_name": "Ada Lovelace", "overall_score": 87}"#;
        let report: EvaluationReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.candidate_name, "Ada Lovelace");
        assert_eq!(report.overall_score, 87);
        assert_eq!(report.writing_score, 0);
        assert_eq!(report.writing_detail, "");
        assert!(report.key_strengths.is_empty());
    }

    #[test]
    fn test_clamp_scores_caps_at_100() {
        let report = EvaluationReport {
            overall_score: 250,
            writing_score: 101,
            ats_score: 100,
            skill_score: 42,
            ..EvaluationReport::default()
        }
        .clamp_scores();
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.writing_score, 100);
        assert_eq!(report.ats_score, 100);
        assert_eq!(report.skill_score, 42);
    }

    #[test]
    fn test_resume_fallback_placeholders() {
        let extraction = NormalizedResume::fallback("Candidate", "");
        assert_eq!(extraction.full_name, "Candidate");
        assert_eq!(extraction.professional_summary, "");
        assert!(extraction.work_experience.is_empty());
        assert_eq!(extraction.contact_info.email, "");

        let rewrite = NormalizedResume::fallback("Error", "Error: quota exceeded");
        assert_eq!(rewrite.full_name, "Error");
        assert!(rewrite.professional_summary.contains("quota exceeded"));
    }

    #[test]
    fn test_resume_deserializes_from_empty_object() {
        let resume: NormalizedResume = serde_json::from_str("{}").unwrap();
        assert_eq!(resume.full_name, "");
        assert!(resume.hard_skills.is_empty());
        assert!(resume.education.is_empty());
        assert_eq!(resume.contact_info.phone, "");
    }

    #[test]
    fn test_resume_nested_entries_default_field_by_field() {
        let json = r#"{
            "full_name": "Grace Hopper",
            "work_experience": [{"job_title": "Rear Admiral"}],
            "projects": [{"name": "COBOL"}]
        }"#;
        let resume: NormalizedResume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.work_experience.len(), 1);
        assert_eq!(resume.work_experience[0].job_title, "Rear Admiral");
        assert_eq!(resume.work_experience[0].company, "");
        assert!(resume.work_experience[0].achievements.is_empty());
        assert_eq!(resume.projects[0].name, "COBOL");
        assert!(resume.projects[0].technologies.is_empty());
    }

    #[test]
    fn test_response_schemas_are_objects() {
        assert_eq!(EvaluationReport::response_schema()["type"], "OBJECT");
        assert_eq!(NormalizedResume::response_schema()["type"], "OBJECT");
    }
}
