// Resume upload flow: validate, save, extract, match skills.
// HTML and JSON handlers share `analyze_upload`; they differ only in rendering.

pub mod analysis;
pub mod handlers;

pub use analysis::ResumeAnalysis;
