use axum::extract::FromRef;
use shared_types::{AnalysisResults, AppError, DocumentSummary, FeatureFlags, LegalDocument};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<DocumentStore>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: DocumentStore,
    pub flags: FeatureFlags,
}

/// In-memory document store keyed by `document_id`.
///
/// Cloning is cheap and every clone sees the same documents. Reads return
/// snapshots, so a render never observes a concurrent write halfway through.
#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<BTreeMap<String, LegalDocument>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from documents, rejecting duplicate ids.
    pub fn from_documents(
        documents: impl IntoIterator<Item = LegalDocument>,
    ) -> Result<Self, AppError> {
        let store = Self::new();
        for doc in documents {
            store.insert(doc)?;
        }
        Ok(store)
    }

    /// Seed a store from every `*.json` file in `dir`.
    ///
    /// Files that cannot be read or parsed, and duplicate ids, are logged and
    /// skipped. Failing to read the directory itself is an error.
    pub fn load_dir(dir: &Path) -> Result<Self, AppError> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            AppError::internal(format!("cannot read documents dir {}: {e}", dir.display()))
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let store = Self::new();
        for path in paths {
            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|raw| {
                    serde_json::from_str::<LegalDocument>(&raw).map_err(|e| e.to_string())
                });
            match parsed {
                Ok(doc) => {
                    if let Err(e) = store.insert(doc) {
                        tracing::warn!(path = %path.display(), error = %e, "skipping document");
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document");
                }
            }
        }

        tracing::info!(dir = %dir.display(), documents = store.len(), "loaded documents");
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, LegalDocument>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, LegalDocument>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// `(registered, analyzed)` document counts from one snapshot.
    pub fn counts(&self) -> (usize, usize) {
        let docs = self.read();
        let analyzed = docs.values().filter(|d| d.has_results()).count();
        (docs.len(), analyzed)
    }

    pub fn get(&self, document_id: &str) -> Option<LegalDocument> {
        self.read().get(document_id).cloned()
    }

    /// Summaries of all documents, ordered by id.
    pub fn list(&self) -> Vec<DocumentSummary> {
        self.read().values().map(DocumentSummary::from).collect()
    }

    pub fn insert(&self, document: LegalDocument) -> Result<LegalDocument, AppError> {
        let mut docs = self.write();
        if docs.contains_key(&document.document_id) {
            return Err(AppError::conflict(format!(
                "Document '{}' already exists",
                document.document_id
            )));
        }
        docs.insert(document.document_id.clone(), document.clone());
        Ok(document)
    }

    /// Attach analysis results to a document. Results are written once;
    /// a second attach is a conflict.
    pub fn attach_results(
        &self,
        document_id: &str,
        results: AnalysisResults,
    ) -> Result<LegalDocument, AppError> {
        let mut docs = self.write();
        let doc = docs
            .get_mut(document_id)
            .ok_or_else(|| AppError::not_found(format!("Document '{document_id}' not found")))?;
        if doc.results.is_some() {
            return Err(AppError::conflict(format!(
                "Results already attached to document '{document_id}'"
            )));
        }
        doc.results = Some(results);
        Ok(doc.clone())
    }
}
