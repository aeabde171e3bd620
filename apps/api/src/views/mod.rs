//! HTML views. Templates are compiled into the binary and rendered with
//! minijinja; `.html` templates are auto-escaped.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::errors::AppError;
use crate::resume::ResumeAnalysis;
use crate::skills::JobMatch;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("upload.html", include_str!("../../templates/upload.html")),
    ("result.html", include_str!("../../templates/result.html")),
    ("job.html", include_str!("../../templates/job.html")),
    ("job_result.html", include_str!("../../templates/job_result.html")),
];

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn upload_form(&self) -> Result<String, AppError> {
        self.render("upload.html", context! {})
    }

    pub fn upload_result(&self, analysis: &ResumeAnalysis) -> Result<String, AppError> {
        self.render(
            "result.html",
            context! {
                text => &analysis.text,
                skills => &analysis.skills,
                skills_str => &analysis.skills_str,
                filename => &analysis.filename,
            },
        )
    }

    pub fn job_form(&self, skills_param: &str, resume_skills: &[String]) -> Result<String, AppError> {
        self.render(
            "job.html",
            context! {
                skills => skills_param,
                resume_skills => resume_skills,
            },
        )
    }

    pub fn job_result(&self, skills_param: &str, report: &JobMatch) -> Result<String, AppError> {
        self.render(
            "job_result.html",
            context! {
                skills => skills_param,
                resume_skills => &report.resume_skills,
                matched_skills => &report.matched_skills,
                match_score => report.match_score,
                job_desc => &report.job_desc,
            },
        )
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::DocumentKind;

    fn views() -> Views {
        Views::new().expect("templates compile")
    }

    #[test]
    fn test_upload_form_posts_resume_field() {
        let html = views().upload_form().unwrap();
        assert!(html.contains(r#"name="resume""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn test_result_escapes_extracted_text() {
        let analysis = ResumeAnalysis {
            filename: "cv.pdf".to_string(),
            kind: DocumentKind::Pdf,
            text: "<script>alert(1)</script> Python".to_string(),
            skills: vec!["Python".to_string()],
            skills_str: "Python".to_string(),
        };
        let html = views().upload_result(&analysis).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("cv.pdf"));
    }

    #[test]
    fn test_result_links_to_job_page_with_encoded_skills() {
        let analysis = ResumeAnalysis {
            filename: "cv.docx".to_string(),
            kind: DocumentKind::Docx,
            text: String::new(),
            skills: vec!["C++".to_string(), "Power BI".to_string()],
            skills_str: "C++,Power BI".to_string(),
        };
        let html = views().upload_result(&analysis).unwrap();
        assert!(html.contains("/job?skills=C%2B%2B"), "{html}");
        assert!(html.contains("Power%20BI"), "{html}");
    }

    #[test]
    fn test_job_result_shows_score() {
        let report = JobMatch {
            resume_skills: vec!["Python".to_string(), "Java".to_string()],
            matched_skills: vec!["Python".to_string()],
            match_score: 50.0,
            job_desc: "Python only".to_string(),
        };
        let html = views().job_result("Python,Java", &report).unwrap();
        assert!(html.contains("50.0"));
        assert!(html.contains("Python only"));
    }
}
