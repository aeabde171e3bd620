// Skill matching: fixed vocabulary, resume skill extraction, job-description scoring.
// Everything here is pure and synchronous; handlers call it directly.

pub mod job_match;
pub mod matcher;
pub mod vocabulary;

pub use job_match::{join_skills, parse_skills_param, JobMatch, JobScorer, SubstringJobScorer};
pub use matcher::extract_skills;
pub use vocabulary::SkillVocabulary;
