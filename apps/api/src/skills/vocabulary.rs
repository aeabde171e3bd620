//! The built-in skill vocabulary.

/// Recognized skill keywords, in the order matches are reported.
pub const ALL_SKILLS: &[&str] = &[
    // Programming languages
    "Python",
    "Java",
    "C++",
    "C#",
    "JavaScript",
    "TypeScript",
    "Go",
    "Ruby",
    "R",
    "PHP",
    // Web
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Flask",
    "Django",
    "Node.js",
    "Bootstrap",
    // Databases
    "SQL",
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "SQLite",
    "Oracle",
    "Redis",
    // Cloud & DevOps
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Git",
    "GitHub",
    "Jenkins",
    // Data science & ML
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "Numpy",
    "Pandas",
    "Scikit-learn",
    "Data Analysis",
    "Data Visualization",
    "Tableau",
    "Power BI",
    // Other
    "Selenium",
    "Unit Testing",
    "API",
    "REST",
    "GraphQL",
    "Agile",
    "Scrum",
    "Linux",
    "Bash",
    "Problem Solving",
];

/// An ordered, immutable list of skill names with their lowercase forms
/// precomputed for case-insensitive matching.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<(String, String)>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from skill names. Order is preserved; later
    /// duplicates (compared case-insensitively) are dropped.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for skill in skills {
            let name = skill.into();
            let lower = name.to_lowercase();
            if !entries.iter().any(|(_, l)| *l == lower) {
                entries.push((name, lower));
            }
        }
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(ALL_SKILLS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Skill names in vocabulary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, lowercase name)` pairs in vocabulary order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, lower)| (name.as_str(), lower.as_str()))
    }
}
