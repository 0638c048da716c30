use crate::index::{Index, LogBase};
use crate::tokenizer::tokenize_stemmed;
use std::collections::HashMap;

/// Per-model weighting parameters. The ranking models differ only in log
/// base and TF normalization, so both are explicit knobs rather than
/// separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizationConfig {
    pub log_base: LogBase,
    pub normalize_tf: bool,
}

impl VectorizationConfig {
    /// Vector-cosine weighting: natural log, raw term counts.
    pub fn vector_cosine() -> Self {
        Self { log_base: LogBase::Natural, normalize_tf: false }
    }

    /// Weighted-Boolean weighting: base-10 log, term counts normalized by the
    /// text's total token count.
    pub fn weighted_boolean() -> Self {
        Self { log_base: LogBase::Base10, normalize_tf: true }
    }
}

/// Dense TF-IDF vector aligned to the index's vocabulary order. Tokens
/// outside the vocabulary contribute nothing and do not enlarge the vector;
/// empty text yields an all-zero vector.
pub fn dense_vector(text: &str, index: &Index, config: &VectorizationConfig) -> Vec<f64> {
    let tokens = tokenize_stemmed(text);
    let mut weights = vec![0.0; index.len()];
    for token in &tokens {
        if let Some(tid) = index.term_id(token) {
            weights[tid] += 1.0;
        }
    }
    if config.normalize_tf && !tokens.is_empty() {
        let total = tokens.len() as f64;
        for w in &mut weights {
            *w /= total;
        }
    }
    for (tid, w) in weights.iter_mut().enumerate() {
        *w *= index.idf_at(tid, config.log_base);
    }
    weights
}

/// Sparse TF-IDF map over the text's vocabulary terms. Terms the index does
/// not know are skipped (their weight is 0 wherever looked up); empty text
/// yields an empty map.
pub fn sparse_vector(text: &str, index: &Index, config: &VectorizationConfig) -> HashMap<String, f64> {
    let tokens = tokenize_stemmed(text);
    let total = tokens.len() as f64;
    let mut counts: HashMap<String, f64> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }

    let mut weights = HashMap::new();
    for (term, count) in counts {
        if index.term_id(&term).is_none() {
            continue;
        }
        let tf = if config.normalize_tf { count / total } else { count };
        let idf = index.idf(&term, config.log_base);
        weights.insert(term, tf * idf);
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn indexed_corpus() -> Index {
        let mut corpus = Corpus::new();
        corpus.add("rust systems programming", None);
        corpus.add("rust memory safety", None);
        corpus.add("python scripting", None);
        Index::rebuild(&corpus)
    }

    #[test]
    fn dense_vector_aligns_to_vocabulary_slots() {
        let index = indexed_corpus();
        let config = VectorizationConfig::vector_cosine();
        let v = dense_vector("rust rust safety", &index, &config);
        assert_eq!(v.len(), index.len());
        let rust = index.term_id("rust").unwrap();
        // tf 2, df 2 of 3 docs: 2 * ln(3/3) = 0.
        assert_eq!(v[rust], 0.0);
        let safety = index.term_id("safety").unwrap();
        let expected = (3.0f64 / 2.0).ln();
        assert!((v[safety] - expected).abs() < 1e-12);
    }

    #[test]
    fn dense_vector_ignores_unseen_terms() {
        let index = indexed_corpus();
        let v = dense_vector("quantum entanglement", &index, &VectorizationConfig::vector_cosine());
        assert_eq!(v.len(), index.len());
        assert!(v.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn sparse_vector_normalizes_tf() {
        let index = indexed_corpus();
        let v = sparse_vector("python python rust", &index, &VectorizationConfig::weighted_boolean());
        // tf(python) = 2/3, idf = log10(3/2).
        let expected = (2.0 / 3.0) * (3.0f64 / 2.0).log10();
        assert!((v["python"] - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_text_degrades_to_zero() {
        let index = indexed_corpus();
        let dense = dense_vector("", &index, &VectorizationConfig::vector_cosine());
        assert!(dense.iter().all(|&w| w == 0.0));
        let sparse = sparse_vector("", &index, &VectorizationConfig::weighted_boolean());
        assert!(sparse.is_empty());
    }
}
