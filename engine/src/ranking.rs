use crate::corpus::{Corpus, Document};
use crate::index::Index;
use crate::tokenizer::{tokenize, tokenize_stemmed};
use crate::vectorizer::{dense_vector, sparse_vector, VectorizationConfig};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Retrieval model selector. One engine, three strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingModel {
    Boolean,
    WeightedBoolean,
    VectorCosine,
}

/// A ranked hit: title, leading slice of the text, and the model's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub summary: String,
    pub score: f64,
}

/// A Boolean-model hit: presence only, full text, no score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanMatch {
    pub title: String,
    pub text: String,
}

/// Outcome of one query. Blank queries and empty result sets are ordinary
/// states reported to the caller, never errors and never sentinel entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "results", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The query was empty or whitespace-only; nothing was tokenized.
    EmptyQuery,
    /// No document survived matching/filtering (including the empty corpus).
    NoMatches,
    /// Boolean-model match set.
    Matches(Vec<BooleanMatch>),
    /// Score-ordered results, ties in corpus insertion order.
    Ranked(Vec<SearchResult>),
}

/// Boolean retrieval. The raw query is lowercased and whitespace-split with
/// no stop-word filtering, so the `and`/`or` operators survive; `and` takes
/// precedence when both appear, and the default is AND over all terms.
/// Membership is tested against each document's unstemmed filtered token set.
pub fn boolean_search<'c>(corpus: &'c Corpus, query: &str) -> Vec<&'c Document> {
    let query_terms: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let conjunctive = query_terms.iter().any(|t| t == "and");
    let disjunctive = !conjunctive && query_terms.iter().any(|t| t == "or");
    let operator = if conjunctive { "and" } else { "or" };
    let terms: Vec<&String> = if conjunctive || disjunctive {
        query_terms.iter().filter(|t| *t != operator).collect()
    } else {
        query_terms.iter().collect()
    };

    corpus
        .all()
        .filter(|doc| {
            let doc_tokens: HashSet<String> = tokenize(&doc.text).into_iter().collect();
            if disjunctive {
                terms.iter().any(|t| doc_tokens.contains(t.as_str()))
            } else {
                terms.iter().all(|t| doc_tokens.contains(t.as_str()))
            }
        })
        .collect()
}

/// Weighted-Boolean retrieval: dot product of the query's IDF weights with
/// each document's sparse TF-IDF vector, over the query's term set only.
/// Documents scoring <= 0 are excluded.
pub fn weighted_boolean_search(corpus: &Corpus, index: &Index, query: &str) -> Vec<SearchResult> {
    let config = VectorizationConfig::weighted_boolean();

    // Unique query terms in first-seen order keep score summation stable.
    let mut query_weights: Vec<(String, f64)> = Vec::new();
    for token in tokenize_stemmed(query) {
        if !query_weights.iter().any(|(t, _)| *t == token) {
            let idf = index.idf(&token, config.log_base);
            query_weights.push((token, idf));
        }
    }

    let mut results: Vec<SearchResult> = corpus
        .all()
        .filter_map(|doc| {
            let doc_vector = sparse_vector(&doc.text, index, &config);
            let score: f64 = query_weights
                .iter()
                .map(|(term, weight)| weight * doc_vector.get(term).copied().unwrap_or(0.0))
                .sum();
            (score > 0.0).then(|| SearchResult {
                title: doc.title.clone(),
                summary: doc.summary(),
                score,
            })
        })
        .collect();
    sort_descending(&mut results);
    results
}

/// Vector-space retrieval: cosine similarity between dense TF-IDF vectors on
/// the shared vocabulary basis. Documents with similarity <= 0 are excluded.
pub fn vector_cosine_search(corpus: &Corpus, index: &Index, query: &str) -> Vec<SearchResult> {
    let config = VectorizationConfig::vector_cosine();
    let query_vector = dense_vector(query, index, &config);

    let mut results: Vec<SearchResult> = corpus
        .all()
        .filter_map(|doc| {
            let doc_vector = dense_vector(&doc.text, index, &config);
            let similarity = cosine_similarity(&query_vector, &doc_vector);
            (similarity > 0.0).then(|| SearchResult {
                title: doc.title.clone(),
                summary: doc.summary(),
                score: similarity,
            })
        })
        .collect();
    sort_descending(&mut results);
    results
}

/// Cosine similarity of two equal-length vectors, exactly 0 when either
/// magnitude is 0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let norm_a = norm_a.sqrt();
    let norm_b = norm_b.sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

// Stable sort: equal scores keep corpus insertion order.
fn sort_descending(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
