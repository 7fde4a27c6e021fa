use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One completed soft-skill quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillEntry {
    pub topic: String,
    pub final_score: f64,
    pub total_questions: u32,
    pub date: String,
}

/// One completed aptitude practice session. `score` is the session average out of 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeEntry {
    pub aptitude_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub score: f64,
    pub date: String,
}

/// One completed mock interview. `score` is out of 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewEntry {
    #[serde(rename = "type")]
    pub interview_type: String,
    pub score: f64,
    #[serde(default)]
    pub overall_feedback: Option<String>,
    pub date: String,
}

/// Per-user performance history. Entries are append-only; a reset clears all three lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformanceData {
    #[serde(default)]
    pub soft_skills_history: Vec<SoftSkillEntry>,
    #[serde(default)]
    pub aptitude_history: Vec<AptitudeEntry>,
    #[serde(default)]
    pub interview_history: Vec<InterviewEntry>,
}

/// Entries to append in one read-modify-write cycle.
#[derive(Debug, Clone, Default)]
pub struct PerformanceUpdate {
    pub soft_skill_entry: Option<SoftSkillEntry>,
    pub aptitude_entry: Option<AptitudeEntry>,
    pub interview_entry: Option<InterviewEntry>,
}

impl UserPerformanceData {
    pub fn apply(&mut self, update: PerformanceUpdate) {
        if let Some(entry) = update.soft_skill_entry {
            self.soft_skills_history.push(entry);
        }
        if let Some(entry) = update.aptitude_entry {
            self.aptitude_history.push(entry);
        }
        if let Some(entry) = update.interview_entry {
            self.interview_history.push(entry);
        }
    }
}

/// Today's UTC date as `YYYY-MM-DD`, the format stored in every history entry.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
