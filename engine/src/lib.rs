//! In-memory document search over a small corpus, with three retrieval
//! models: Boolean, weighted-Boolean (TF-IDF dot product), and vector-space
//! cosine similarity. Mutating the corpus eagerly rebuilds the vocabulary/IDF
//! index, so queries always run against a consistent snapshot.

pub mod corpus;
pub mod engine;
pub mod index;
pub mod ranking;
pub mod tokenizer;
pub mod vectorizer;

pub use corpus::{Corpus, DocId, Document};
pub use engine::{DocumentInfo, SearchEngine, SharedEngine};
pub use index::{Index, LogBase};
pub use ranking::{BooleanMatch, RankingModel, SearchOutcome, SearchResult};
pub use vectorizer::VectorizationConfig;
