use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // Maximal runs of word characters; everything else is a separator.
    static ref RE: Regex = Regex::new(r"[A-Za-z0-9_]+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &["is", "and", "the", "for", "in", "on", "to", "a", "of"];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Strip a trailing "ing" (first) or "ed" from a token. No minimum stem
/// length: "red" becomes "r".
fn strip_suffix(token: &str) -> &str {
    if let Some(stem) = token.strip_suffix("ing") {
        stem
    } else if let Some(stem) = token.strip_suffix("ed") {
        stem
    } else {
        token
    }
}

fn tokenize_inner(text: &str, stem: bool) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    for mat in RE.find_iter(&lowered) {
        let token = mat.as_str();
        if is_stopword(token) {
            continue;
        }
        let token = if stem { strip_suffix(token) } else { token };
        // Stripping can empty a token ("ing" alone); tokens stay non-empty.
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Tokenize text: lowercase, split on non-word runs, remove stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_inner(text, false)
}

/// Tokenize with the naive suffix pass applied after stop-word removal.
/// Used by the weighted-Boolean and vector-cosine models.
pub fn tokenize_stemmed(text: &str) -> Vec<String> {
    tokenize_inner(text, true)
}
