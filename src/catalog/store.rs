//! In-memory article and entry catalog
//!
//! Entry creation always validates against the article's shop floor fields
//! before anything is stored. Articles are snapshotted to disk when the
//! catalog was built with an [`ArticleLoader`].

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};
use super::loader::ArticleLoader;
use super::models::{Article, Entry, NewArticle};
use crate::schema::{check_structure, FieldValidator, ValidationIssue};

#[derive(Default)]
struct CatalogState {
    articles: HashMap<Uuid, Article>,
    /// Article ids in creation order
    order: Vec<Uuid>,
    entries: HashMap<Uuid, Vec<Entry>>,
}

impl CatalogState {
    fn insert_article(&mut self, article: Article) {
        self.order.push(article.id);
        self.entries.entry(article.id).or_default();
        self.articles.insert(article.id, article);
    }
}

/// Article catalog shared by request handlers.
pub struct Catalog {
    state: RwLock<CatalogState>,
    loader: Option<ArticleLoader>,
}

impl Catalog {
    /// Empty catalog without persistence.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
            loader: None,
        }
    }

    /// Catalog backed by a snapshot directory; existing snapshots are loaded.
    pub fn with_loader(loader: ArticleLoader) -> CatalogResult<Self> {
        let mut state = CatalogState::default();
        for article in loader.load_all()? {
            state.insert_article(article);
        }
        info!(
            articles = state.order.len(),
            dir = %loader.article_dir().display(),
            "article snapshots loaded"
        );

        Ok(Self {
            state: RwLock::new(state),
            loader: Some(loader),
        })
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, CatalogState>> {
        self.state
            .read()
            .map_err(|_| CatalogError::Internal("catalog lock poisoned".into()))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, CatalogState>> {
        self.state
            .write()
            .map_err(|_| CatalogError::Internal("catalog lock poisoned".into()))
    }

    /// Creates an article after checking its field lists and attribute values.
    pub fn create_article(&self, request: NewArticle) -> CatalogResult<Article> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::InvalidArticle("name must not be empty".into()));
        }
        check_structure(&request.attribute_fields).map_err(CatalogError::InvalidArticle)?;
        check_structure(&request.shop_floor_fields).map_err(CatalogError::InvalidArticle)?;

        let issues =
            FieldValidator::new(&request.attribute_fields).validate_issues(&request.attributes);
        if let Some(first) = issues.first() {
            warn!(
                errors = issues.len(),
                field = first.label(),
                kind = %first.kind(),
                "article attributes rejected"
            );
            return Err(rejected(&issues));
        }

        let article = Article::from_request(request);
        if let Some(loader) = &self.loader {
            loader.save(&article)?;
        }

        self.write()?.insert_article(article.clone());
        info!(article_id = %article.id, name = %article.name, "article created");
        Ok(article)
    }

    pub fn get_article(&self, id: Uuid) -> CatalogResult<Article> {
        self.read()?
            .articles
            .get(&id)
            .cloned()
            .ok_or(CatalogError::ArticleNotFound(id))
    }

    /// All articles in creation order.
    pub fn list_articles(&self) -> CatalogResult<Vec<Article>> {
        let state = self.read()?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.articles.get(id).cloned())
            .collect())
    }

    /// Removes an article together with its entries.
    ///
    /// The snapshot goes first; if it cannot be removed the article stays.
    pub fn delete_article(&self, id: Uuid) -> CatalogResult<()> {
        let mut state = self.write()?;
        if !state.articles.contains_key(&id) {
            return Err(CatalogError::ArticleNotFound(id));
        }
        if let Some(loader) = &self.loader {
            loader.remove(id)?;
        }

        state.articles.remove(&id);
        state.order.retain(|existing| *existing != id);
        let dropped = state.entries.remove(&id).map_or(0, |e| e.len());
        drop(state);
        info!(article_id = %id, entries = dropped, "article deleted");
        Ok(())
    }

    /// Validates `data` against the article's shop floor fields and stores it.
    ///
    /// Nothing is stored when validation reports any message.
    pub fn create_entry(&self, article_id: Uuid, data: Value) -> CatalogResult<Entry> {
        let Value::Object(data) = data else {
            return Err(CatalogError::InvalidSubmission(
                "entry data must be a JSON object".into(),
            ));
        };

        let fields = self.get_article(article_id)?.shop_floor_fields;
        let issues = FieldValidator::new(&fields).validate_issues(&data);
        if let Some(first) = issues.first() {
            warn!(
                article_id = %article_id,
                errors = issues.len(),
                field = first.label(),
                kind = %first.kind(),
                "entry rejected"
            );
            return Err(rejected(&issues));
        }

        let entry = Entry::new(article_id, data);
        let mut state = self.write()?;
        // The article may have been deleted while validating.
        let entries = state
            .entries
            .get_mut(&article_id)
            .ok_or(CatalogError::ArticleNotFound(article_id))?;
        entries.push(entry.clone());
        debug!(article_id = %article_id, entry_id = %entry.id, "entry stored");
        Ok(entry)
    }

    /// Entries of an article in insertion order.
    pub fn list_entries(&self, article_id: Uuid) -> CatalogResult<Vec<Entry>> {
        self.read()?
            .entries
            .get(&article_id)
            .cloned()
            .ok_or(CatalogError::ArticleNotFound(article_id))
    }
}

fn rejected(issues: &[ValidationIssue]) -> CatalogError {
    CatalogError::ValidationFailed(issues.iter().map(ToString::to_string).collect())
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
