//! Render one analyzed document to a standalone HTML dashboard page.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use shared_types::LegalDocument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "render-report")]
#[command(version, about = "Render a legal document's analysis dashboard as HTML")]
struct Args {
    /// Path to a JSON-encoded document
    input: PathBuf,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout may carry the page, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (document, html) = render_file(&args.input)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                document_id = %document.document_id,
                out = %path.display(),
                "report written"
            );
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Read one JSON document from `input` and render its dashboard page.
fn render_file(input: &Path) -> anyhow::Result<(LegalDocument, String)> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let document: LegalDocument = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {} as a document", input.display()))?;

    let html = server::pages::render_dashboard_page(&document);
    Ok((document, html))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn renders_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "nda.json",
            r#"{
                "document_id": "nda-1",
                "file_name": "NDA.pdf",
                "client_name": "Acme",
                "client_email": "a@acme.com",
                "document_type": "contract"
            }"#,
        );

        let (document, html) = render_file(&path).unwrap();
        assert_eq!(document.document_id, "nda-1");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>NDA.pdf | Analysis</title>"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "broken.json", "{ \"document_id\": ");

        let err = render_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
