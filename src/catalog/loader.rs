//! Article snapshot loader
//!
//! - Snapshots stored at `<data_dir>/articles/article_<id>.json`
//! - One file per article, fields stored as flat records
//! - Malformed files fail startup

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};
use super::models::{Article, ArticleSnapshot};
use crate::schema::check_structure;

/// Reads and writes article snapshot files.
#[derive(Debug, Clone)]
pub struct ArticleLoader {
    article_dir: PathBuf,
}

impl ArticleLoader {
    /// Creates a loader for `<data_dir>/articles/`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            article_dir: data_dir.join("articles"),
        }
    }

    pub fn article_dir(&self) -> &Path {
        &self.article_dir
    }

    /// Loads every snapshot, oldest first.
    pub fn load_all(&self) -> CatalogResult<Vec<Article>> {
        if !self.article_dir.exists() {
            fs::create_dir_all(&self.article_dir).map_err(|e| {
                self.dir_error(format!("Failed to create article directory: {}", e))
            })?;
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.article_dir)
            .map_err(|e| self.dir_error(format!("Failed to read article directory: {}", e)))?;

        let mut articles = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| self.dir_error(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();

            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            articles.push(Self::load_file(&path)?);
        }

        articles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(articles)
    }

    fn load_file(path: &Path) -> CatalogResult<Article> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::snapshot(path.display().to_string(), format!("Failed to read file: {}", e))
        })?;

        let snapshot: ArticleSnapshot = serde_json::from_str(&content).map_err(|e| {
            CatalogError::snapshot(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        let article = Article::from(snapshot);
        check_structure(&article.attribute_fields)
            .and_then(|_| check_structure(&article.shop_floor_fields))
            .map_err(|e| CatalogError::snapshot(path.display().to_string(), e))?;

        Ok(article)
    }

    /// Writes the snapshot for `article`, replacing any previous one.
    pub fn save(&self, article: &Article) -> CatalogResult<()> {
        fs::create_dir_all(&self.article_dir)
            .map_err(|e| self.dir_error(format!("Failed to create article directory: {}", e)))?;

        let path = self.path_for(article.id);
        let content = serde_json::to_string_pretty(&ArticleSnapshot::from(article))
            .map_err(|e| CatalogError::snapshot(path.display().to_string(), e.to_string()))?;

        fs::write(&path, content).map_err(|e| {
            CatalogError::snapshot(path.display().to_string(), format!("Failed to write file: {}", e))
        })
    }

    /// Deletes the snapshot for `id`. A missing file is not an error.
    pub fn remove(&self, id: Uuid) -> CatalogResult<()> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CatalogError::snapshot(
                path.display().to_string(),
                format!("Failed to remove file: {}", e),
            )),
        }
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.article_dir.join(format!("article_{}.json", id))
    }

    fn dir_error(&self, message: String) -> CatalogError {
        CatalogError::snapshot(self.article_dir.display().to_string(), message)
    }
}
