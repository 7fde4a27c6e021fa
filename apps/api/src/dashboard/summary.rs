use serde::Serialize;

use crate::models::performance::UserPerformanceData;
use crate::tutoring::scoring::round1;

/// Aggregate for one practice module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStat {
    pub sessions: usize,
    /// Mean score in the module's own unit (percent for soft skills, /10 otherwise).
    pub average_score: Option<f64>,
    /// Progress bar value, 0-100.
    pub completion_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub soft_skills: ModuleStat,
    pub aptitude: ModuleStat,
    pub interviews: ModuleStat,
    pub total_sessions: usize,
}

pub fn compute_summary(data: &UserPerformanceData) -> PerformanceSummary {
    let soft_skill_percents: Vec<f64> = data
        .soft_skills_history
        .iter()
        .map(|e| {
            let max = e.total_questions as f64 * 10.0;
            if max > 0.0 {
                e.final_score / max * 100.0
            } else {
                0.0
            }
        })
        .collect();
    let aptitude_scores: Vec<f64> = data.aptitude_history.iter().map(|e| e.score).collect();
    let interview_scores: Vec<f64> = data.interview_history.iter().map(|e| e.score).collect();

    let soft_skills = module_stat(&soft_skill_percents, 1.0);
    let aptitude = module_stat(&aptitude_scores, 10.0);
    let interviews = module_stat(&interview_scores, 10.0);
    let total_sessions = soft_skills.sessions + aptitude.sessions + interviews.sessions;

    PerformanceSummary {
        soft_skills,
        aptitude,
        interviews,
        total_sessions,
    }
}

/// `to_percent` scales the module's unit to 0-100 for the completion bar.
fn module_stat(scores: &[f64], to_percent: f64) -> ModuleStat {
    if scores.is_empty() {
        return ModuleStat {
            sessions: 0,
            average_score: None,
            completion_percent: 0.0,
        };
    }
    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    ModuleStat {
        sessions: scores.len(),
        average_score: Some(round1(average)),
        completion_percent: round1((average * to_percent).clamp(0.0, 100.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::performance::{AptitudeEntry, InterviewEntry, SoftSkillEntry};

    fn soft(final_score: f64, total_questions: u32) -> SoftSkillEntry {
        SoftSkillEntry {
            topic: "Problem Solving".to_string(),
            final_score,
            total_questions,
            date: "2024-06-01".to_string(),
        }
    }

    #[test]
    fn test_empty_history_has_no_averages() {
        let summary = compute_summary(&UserPerformanceData::default());
        assert_eq!(summary.total_sessions, 0);
        assert!(summary.soft_skills.average_score.is_none());
        assert_eq!(summary.interviews.completion_percent, 0.0);
    }

    #[test]
    fn test_soft_skills_average_is_percent_of_max() {
        let data = UserPerformanceData {
            soft_skills_history: vec![soft(24.0, 3), soft(15.0, 3)],
            ..Default::default()
        };
        let summary = compute_summary(&data);
        assert_eq!(summary.soft_skills.sessions, 2);
        assert_eq!(summary.soft_skills.average_score, Some(65.0));
        assert_eq!(summary.soft_skills.completion_percent, 65.0);
    }

    #[test]
    fn test_zero_question_quiz_counts_as_zero_percent() {
        let data = UserPerformanceData {
            soft_skills_history: vec![soft(10.0, 0)],
            ..Default::default()
        };
        assert_eq!(compute_summary(&data).soft_skills.average_score, Some(0.0));
    }

    #[test]
    fn test_aptitude_and_interview_scale_to_percent() {
        let data = UserPerformanceData {
            aptitude_history: vec![
                AptitudeEntry {
                    aptitude_type: "Verbal Ability".to_string(),
                    topic: None,
                    score: 6.0,
                    date: "2024-06-01".to_string(),
                },
                AptitudeEntry {
                    aptitude_type: "Verbal Ability".to_string(),
                    topic: None,
                    score: 8.0,
                    date: "2024-06-02".to_string(),
                },
            ],
            interview_history: vec![InterviewEntry {
                interview_type: "Technical - JavaScript".to_string(),
                score: 9.0,
                overall_feedback: None,
                date: "2024-06-03".to_string(),
            }],
            ..Default::default()
        };
        let summary = compute_summary(&data);
        assert_eq!(summary.aptitude.average_score, Some(7.0));
        assert_eq!(summary.aptitude.completion_percent, 70.0);
        assert_eq!(summary.interviews.completion_percent, 90.0);
        assert_eq!(summary.total_sessions, 3);
    }
}
