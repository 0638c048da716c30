use serde::Serialize;
use std::fmt;

/// Opaque document identifier, assigned sequentially by the corpus and never
/// reused within one corpus lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DocId(u32);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub text: String,
}

/// Characters of text shown in ranked-result summaries.
const SUMMARY_LEN: usize = 100;

impl Document {
    /// Leading slice of the text used as the result summary.
    pub fn summary(&self) -> String {
        self.text.chars().take(SUMMARY_LEN).collect()
    }
}

/// Insertion-ordered document collection. A pure store: it does not own the
/// index, and any mutation obligates the caller to rebuild one.
#[derive(Debug, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    next_id: u32,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. Insertion order is the ranking tie-break order and
    /// the vector-slot assignment order. The title defaults to the id.
    pub fn add(&mut self, text: impl Into<String>, title: Option<&str>) -> DocId {
        let id = DocId(self.next_id);
        self.next_id += 1;
        let title = match title {
            Some(t) => t.to_string(),
            None => id.to_string(),
        };
        self.docs.push(Document { id, title, text: text.into() });
        id
    }

    /// Remove by id. Returns false when the id is absent.
    pub fn remove(&mut self, id: DocId) -> bool {
        match self.docs.iter().position(|d| d.id == id) {
            Some(pos) => {
                self.docs.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// Documents in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    pub fn count(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
