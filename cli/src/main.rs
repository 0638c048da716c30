use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use engine::{RankingModel, SearchEngine, SearchOutcome};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

/// A document record in JSON/JSONL corpus files.
#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(default)]
    title: Option<String>,
    body: String,
}

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Query a small document corpus with three retrieval models", long_about = None)]
struct Cli {
    /// Corpus path: a directory of .txt files, a single .txt file, or a
    /// JSON/JSONL file of {title, body} records
    #[arg(long)]
    corpus: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against the corpus
    Search {
        /// Retrieval model
        #[arg(long, value_enum, default_value = "vector-cosine")]
        model: Model,
        /// Query text
        query: String,
        /// Emit the outcome as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the ingested documents
    List {
        /// Emit the listing as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Model {
    Boolean,
    WeightedBoolean,
    VectorCosine,
}

impl From<Model> for RankingModel {
    fn from(model: Model) -> Self {
        match model {
            Model::Boolean => RankingModel::Boolean,
            Model::WeightedBoolean => RankingModel::WeightedBoolean,
            Model::VectorCosine => RankingModel::VectorCosine,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let docs = load_documents(Path::new(&cli.corpus))?;
    let mut engine = SearchEngine::new();
    for (title, body) in &docs {
        engine.ingest(body, title.as_deref());
    }
    tracing::info!(documents = engine.document_count(), "corpus ingested");

    match cli.command {
        Commands::Search { model, query, json } => {
            let outcome = engine.query(model.into(), &query);
            print_outcome(&outcome, json)
        }
        Commands::List { json } => {
            let docs = engine.documents();
            if json {
                println!("{}", serde_json::to_string_pretty(&docs)?);
            } else {
                for doc in docs {
                    println!("{}\t{}", doc.id, doc.title);
                }
            }
            Ok(())
        }
    }
}

fn print_outcome(outcome: &SearchOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    match outcome {
        SearchOutcome::EmptyQuery => println!("No query provided."),
        SearchOutcome::NoMatches => println!("No matching documents."),
        SearchOutcome::Matches(matches) => {
            for m in matches {
                println!("{}\t{}", m.title, m.text);
            }
        }
        SearchOutcome::Ranked(results) => {
            for r in results {
                println!("{:.6}\t{}\t{}", r.score, r.title, r.summary);
            }
        }
    }
    Ok(())
}

/// Decode a corpus path into (title, body) pairs. Directories contribute one
/// document per .txt file; .json/.jsonl files contribute one per record.
fn load_documents(path: &Path) -> Result<Vec<(Option<String>, String)>> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
            .map(|e| e.path().to_path_buf())
            .collect();
        // Directory walk order is unspecified; sort so ids are reproducible.
        files.sort();
        let mut docs = Vec::new();
        for file in files {
            docs.push((title_from(&file), read_text(&file)?));
        }
        return Ok(docs);
    }
    if !path.is_file() {
        bail!("corpus path {} does not exist", path.display());
    }
    match path.extension().and_then(|s| s.to_str()) {
        Some("jsonl") => load_jsonl(path),
        Some("json") => load_json(path),
        _ => Ok(vec![(title_from(path), read_text(path)?)]),
    }
}

fn load_jsonl(path: &Path) -> Result<Vec<(Option<String>, String)>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut docs = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("parse record in {}", path.display()))?;
        docs.push((doc.title, doc.body));
    }
    Ok(docs)
}

fn load_json(path: &Path) -> Result<Vec<(Option<String>, String)>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    let mut docs = Vec::new();
    match json {
        serde_json::Value::Array(arr) => {
            for value in arr {
                let doc: InputDoc = serde_json::from_value(value)?;
                docs.push((doc.title, doc.body));
            }
        }
        value => {
            let doc: InputDoc = serde_json::from_value(value)?;
            docs.push((doc.title, doc.body));
        }
    }
    Ok(docs)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn title_from(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_txt_directory_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second document").unwrap();
        fs::write(dir.path().join("a.txt"), "first document").unwrap();
        fs::write(dir.path().join("ignored.md"), "not a corpus file").unwrap();

        let docs = load_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0], (Some("a".to_string()), "first document".to_string()));
        assert_eq!(docs[1], (Some("b".to_string()), "second document".to_string()));
    }

    #[test]
    fn loads_jsonl_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.jsonl");
        fs::write(
            &path,
            "{\"title\":\"one\",\"body\":\"AI models\"}\n\n{\"body\":\"untitled text\"}\n",
        )
        .unwrap();

        let docs = load_documents(&path).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0], (Some("one".to_string()), "AI models".to_string()));
        assert_eq!(docs[1], (None, "untitled text".to_string()));
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(load_documents(Path::new("/nonexistent/corpus")).is_err());
    }
}
