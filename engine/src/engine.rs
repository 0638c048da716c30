use crate::corpus::{Corpus, DocId};
use crate::index::Index;
use crate::ranking::{
    boolean_search, vector_cosine_search, weighted_boolean_search, BooleanMatch, RankingModel,
    SearchOutcome,
};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// `{id, title}` pair for document listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInfo {
    pub id: DocId,
    pub title: String,
}

/// The engine facade: corpus plus its current index snapshot.
///
/// Every mutation rebuilds the index synchronously before returning, so a
/// query never observes a corpus/index mismatch. Collaborators hand in
/// already-decoded text; file handling, transport, and PDF extraction live
/// outside this crate.
#[derive(Debug, Default)]
pub struct SearchEngine {
    corpus: Corpus,
    index: Index,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document and reindex. The title defaults to the assigned id.
    pub fn ingest(&mut self, text: &str, title: Option<&str>) -> DocId {
        let id = self.corpus.add(text, title);
        self.reindex();
        id
    }

    /// Remove a document by id. Returns false (and leaves the index alone)
    /// when the id is unknown.
    pub fn retract(&mut self, id: DocId) -> bool {
        let removed = self.corpus.remove(id);
        if removed {
            self.reindex();
        }
        removed
    }

    /// Evaluate a query under the chosen model.
    ///
    /// A blank or whitespace-only query short-circuits to `EmptyQuery` before
    /// any tokenization; a result set that ends up empty (including on an
    /// empty corpus) is reported as `NoMatches`.
    pub fn query(&self, model: RankingModel, text: &str) -> SearchOutcome {
        if text.trim().is_empty() {
            return SearchOutcome::EmptyQuery;
        }
        match model {
            RankingModel::Boolean => {
                let matches: Vec<BooleanMatch> = boolean_search(&self.corpus, text)
                    .into_iter()
                    .map(|doc| BooleanMatch { title: doc.title.clone(), text: doc.text.clone() })
                    .collect();
                if matches.is_empty() {
                    SearchOutcome::NoMatches
                } else {
                    SearchOutcome::Matches(matches)
                }
            }
            RankingModel::WeightedBoolean => {
                let results = weighted_boolean_search(&self.corpus, &self.index, text);
                if results.is_empty() {
                    SearchOutcome::NoMatches
                } else {
                    SearchOutcome::Ranked(results)
                }
            }
            RankingModel::VectorCosine => {
                let results = vector_cosine_search(&self.corpus, &self.index, text);
                if results.is_empty() {
                    SearchOutcome::NoMatches
                } else {
                    SearchOutcome::Ranked(results)
                }
            }
        }
    }

    /// `{id, title}` pairs in insertion order.
    pub fn documents(&self) -> Vec<DocumentInfo> {
        self.corpus
            .all()
            .map(|doc| DocumentInfo { id: doc.id, title: doc.title.clone() })
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.corpus.count()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    fn reindex(&mut self) {
        // Wholesale snapshot swap; see Index::rebuild.
        self.index = Index::rebuild(&self.corpus);
    }
}

/// Clone-able handle for multi-threaded callers.
///
/// Writers hold the lock across mutation plus reindex, so concurrent readers
/// observe either the pre- or post-rebuild corpus/index pair, never a
/// partially rebuilt one.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&self, text: &str, title: Option<&str>) -> DocId {
        self.inner.write().ingest(text, title)
    }

    pub fn retract(&self, id: DocId) -> bool {
        self.inner.write().retract(id)
    }

    pub fn query(&self, model: RankingModel, text: &str) -> SearchOutcome {
        self.inner.read().query(model, text)
    }

    pub fn documents(&self) -> Vec<DocumentInfo> {
        self.inner.read().documents()
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }
}
