//! Upload validation, filename sanitizing and on-disk storage.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::extraction::DocumentKind;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid filename regex"));

/// True when the name has an extension and it is `pdf` or `docx` (any case).
pub fn allowed_file(filename: &str) -> bool {
    DocumentKind::from_filename(filename).is_some()
}

/// Reduces a client-supplied filename to a safe, flat ASCII name.
///
/// Path separators become word breaks, whitespace runs become `_`, and
/// anything outside `[A-Za-z0-9_.-]` is dropped, as are leading and trailing
/// dots and underscores. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename.nfkd().filter(char::is_ascii).collect();
    let flattened = ascii.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    UNSAFE_FILENAME_CHARS
        .replace_all(&joined, "")
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

/// The uploads directory. Files are written flat under their sanitized names;
/// a second upload with the same name replaces the first.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        info!("Uploads directory ready at {}", self.dir.display());
        Ok(())
    }

    /// Writes `data` as `<dir>/<safe_name>` and returns the full path.
    /// `safe_name` must already have passed through [`secure_filename`].
    pub async fn save(&self, safe_name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.join(safe_name);
        tokio::fs::write(&path, data).await?;
        info!(filename = %safe_name, bytes = data.len(), "Saved upload");
        Ok(path)
    }
}
