use std::sync::Arc;

use crate::config::Config;
use crate::skills::{JobScorer, SkillVocabulary, SubstringJobScorer};
use crate::uploads::UploadStore;
use crate::views::Views;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub uploads: UploadStore,
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable job scorer. Default: SubstringJobScorer.
    pub job_scorer: Arc<dyn JobScorer>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, minijinja::Error> {
        Ok(Self {
            uploads: UploadStore::new(config.upload_dir.clone()),
            vocabulary: Arc::new(SkillVocabulary::builtin()),
            job_scorer: Arc::new(SubstringJobScorer),
            views: Arc::new(Views::new()?),
            config,
        })
    }
}
