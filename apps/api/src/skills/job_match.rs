//! Job-match scoring: compares resume skills against a pasted job description.
//!
//! `AppState` holds an `Arc<dyn JobScorer>`; `SubstringJobScorer` is the default.

use serde::{Deserialize, Serialize};

/// Outcome of comparing resume skills with a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub resume_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    /// 0.0 to 100.0, two decimal places
    pub match_score: f64,
    pub job_desc: String,
}

/// Implement this to swap the scoring backend without touching handlers.
pub trait JobScorer: Send + Sync {
    fn score(&self, resume_skills: &[String], job_desc: &str) -> JobMatch;
}

/// Case-insensitive substring scorer.
///
/// Algorithm:
/// 1. matched = resume skills (non-empty) whose lowercase form occurs in the
///    lowercased job description, in resume-skill order
/// 2. score = 100 × |matched| / |resume skills|, rounded to 2 dp; 0 when empty
///
/// Blank entries never match but still count toward the denominator.
pub struct SubstringJobScorer;

impl JobScorer for SubstringJobScorer {
    fn score(&self, resume_skills: &[String], job_desc: &str) -> JobMatch {
        score_job_match(resume_skills, job_desc)
    }
}

fn score_job_match(resume_skills: &[String], job_desc: &str) -> JobMatch {
    let job_desc_lower = job_desc.to_lowercase();

    let matched_skills: Vec<String> = resume_skills
        .iter()
        .filter(|s| !s.is_empty() && job_desc_lower.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    let match_score = if resume_skills.is_empty() {
        0.0
    } else {
        round2(matched_skills.len() as f64 / resume_skills.len() as f64 * 100.0)
    };

    JobMatch {
        resume_skills: resume_skills.to_vec(),
        matched_skills,
        match_score,
        job_desc: job_desc.to_string(),
    }
}

/// Ties go to the even neighbour: 3.125 becomes 3.12.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Splits the `skills` query parameter. An empty parameter yields no skills;
/// anything else is split on every comma, keeping blank pieces.
pub fn parse_skills_param(param: &str) -> Vec<String> {
    if param.is_empty() {
        return Vec::new();
    }
    param.split(',').map(String::from).collect()
}

/// Inverse of [`parse_skills_param`] for comma-free skill names.
pub fn join_skills(skills: &[String]) -> String {
    skills.join(",")
}
