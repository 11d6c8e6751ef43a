use std::{io, path::Path};

use super::{entities::ResolvedModel, graph, resolver};
use crate::{config::Config, diagnostics::Diagnostics, fs::FileSystem, Error, Result};

/// Outcome of parsing a vocabulary document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    pub model: ResolvedModel,
    pub diagnostics: Diagnostics,
}

/// Parses a JSON-LD vocabulary document held in memory.
///
/// # Errors
///
/// [`Error::MalformedInput`] when `raw` is not a JSON object with a `@graph`
/// array of nodes.
pub fn parse_str(raw: &str, config: &Config) -> Result<Parsed> {
    let document: graph::RawDocument = serde_json::from_str(raw)?;
    let settings = &config.vocabulary;
    let ingested = graph::ingest(document, settings);

    let mut diagnostics = Diagnostics::new();
    let model = resolver::build_classes(
        &ingested.classes,
        &ingested.properties,
        &ingested.members,
        settings,
        &mut diagnostics,
    );
    Ok(Parsed { model, diagnostics })
}

/// Reads and parses the vocabulary document at `path`.
///
/// # Errors
///
/// [`Error::InputNotFound`] when nothing exists at `path`, [`Error::Io`] for
/// other read failures and [`Error::MalformedInput`] as for [`parse_str`].
pub async fn parse(fs: &dyn FileSystem, path: &Path, config: &Config) -> Result<Parsed> {
    let raw = fs.read_to_string(path).await.map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;
    tracing::info!(path = %path.display(), bytes = raw.len(), "parsing vocabulary");
    parse_str(&raw, config)
}
