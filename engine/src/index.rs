use crate::corpus::Corpus;
use crate::tokenizer::tokenize_stemmed;
use std::collections::{HashMap, HashSet};

/// Log base applied to the IDF ratio. The weighted-Boolean model scores with
/// base 10, the vector-cosine model with the natural log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBase {
    Natural,
    Base10,
}

impl LogBase {
    pub fn log(self, x: f64) -> f64 {
        match self {
            LogBase::Natural => x.ln(),
            LogBase::Base10 => x.log10(),
        }
    }
}

/// Vocabulary and document-frequency table for one corpus generation.
///
/// An `Index` is an immutable snapshot: the engine rebuilds a fresh value on
/// every corpus mutation and swaps it in wholesale, so a partially updated
/// vocabulary/df pair is never observable.
#[derive(Debug, Default)]
pub struct Index {
    vocabulary: Vec<String>,
    term_ids: HashMap<String, usize>,
    df: Vec<u32>,
    num_docs: usize,
}

impl Index {
    /// Walk the corpus in insertion order and derive the vocabulary
    /// (first-occurrence order) and per-term document frequencies.
    /// Synchronous and total: the returned index reflects exactly the corpus
    /// it was given.
    pub fn rebuild(corpus: &Corpus) -> Self {
        let mut vocabulary: Vec<String> = Vec::new();
        let mut term_ids: HashMap<String, usize> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();

        for doc in corpus.all() {
            let mut seen_in_doc: HashSet<usize> = HashSet::new();
            for token in tokenize_stemmed(&doc.text) {
                let tid = match term_ids.get(&token) {
                    Some(&tid) => tid,
                    None => {
                        let tid = vocabulary.len();
                        vocabulary.push(token.clone());
                        term_ids.insert(token, tid);
                        df.push(0);
                        tid
                    }
                };
                // df counts containment, not occurrences.
                if seen_in_doc.insert(tid) {
                    df[tid] += 1;
                }
            }
        }

        let index = Self { vocabulary, term_ids, df, num_docs: corpus.count() };
        tracing::debug!(
            documents = index.num_docs,
            vocabulary = index.vocabulary.len(),
            "index rebuilt"
        );
        index
    }

    /// Vocabulary in first-occurrence order. The order pins dense vector
    /// slots within this index generation and carries no other meaning.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.term_ids.get(term).copied()
    }

    /// Number of documents containing the term; 0 for unknown terms.
    pub fn df(&self, term: &str) -> u32 {
        match self.term_id(term) {
            Some(tid) => self.df[tid],
            None => 0,
        }
    }

    /// IDF of a term under the given log base: `log(N / (df + 1))`.
    /// Terms outside the vocabulary score 0 by convention, never an error.
    pub fn idf(&self, term: &str, base: LogBase) -> f64 {
        match self.term_id(term) {
            Some(tid) => self.idf_at(tid, base),
            None => 0.0,
        }
    }

    /// IDF by vocabulary slot.
    pub fn idf_at(&self, tid: usize, base: LogBase) -> f64 {
        base.log(self.num_docs as f64 / (self.df[tid] as f64 + 1.0))
    }
}
