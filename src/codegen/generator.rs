//! Parallel emission of every artifact of a resolved model.
//!
//! One task per class renders and writes that class's artifacts. Tasks share
//! the model read-only and never write the same path. The manifest is written
//! after every task has finished, whether or not some of them failed, and
//! failures are reported together once the manifest is on disk.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;
use tokio::task::JoinHandle;

use super::{ArtifactKind, TypeScriptEmitter};
use crate::{
    config::Config, diagnostics::Diagnostics, errors::ClassFailure, fs::FileSystem,
    vocabulary::entities::ResolvedModel, Error, Result,
};

/// Summary of a successful generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Concrete class artifacts written.
    pub class_count: usize,
    /// Contract artifacts written.
    pub interface_count: usize,
    /// Enumeration artifacts written.
    pub enum_count: usize,
    pub diagnostics: Diagnostics,
}

impl GenerateReport {
    fn absorb(&mut self, outcome: ClassOutcome) {
        self.class_count += outcome.class_count;
        self.interface_count += outcome.interface_count;
        self.enum_count += outcome.enum_count;
        self.diagnostics.extend(outcome.diagnostics);
    }
}

#[derive(Debug, Default)]
struct ClassOutcome {
    class_count: usize,
    interface_count: usize,
    enum_count: usize,
    diagnostics: Diagnostics,
    error: Option<Error>,
}

/// Writes TypeScript artifacts through a [`FileSystem`].
#[derive(Clone)]
pub struct SchemaGenerator {
    config: Arc<Config>,
    fs: Arc<dyn FileSystem>,
}

impl SchemaGenerator {
    #[must_use]
    pub fn new(config: Config, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config: Arc::new(config),
            fs,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emits every artifact of `model` below `output_root`.
    ///
    /// Existing files at the same paths are overwritten and nothing else is
    /// removed, so re-running on an unchanged model leaves identical output.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the output directories cannot be created, and
    /// [`Error::Generation`] listing every class whose artifacts could not be
    /// rendered or written, along with the diagnostics of the whole run.
    /// Artifacts of the other classes and the manifest are still written in
    /// that case.
    pub async fn generate(
        &self,
        model: Arc<ResolvedModel>,
        output_root: &Path,
    ) -> Result<GenerateReport> {
        for dir in [
            output_root.to_path_buf(),
            output_root.join("interfaces"),
            output_root.join("classes"),
        ] {
            self.fs.create_dir_all(&dir).await?;
        }

        tracing::info!(
            classes = model.len(),
            output = %output_root.display(),
            "generating artifacts"
        );

        let tasks: Vec<(String, JoinHandle<ClassOutcome>)> = model
            .classes()
            .map(|class| {
                let id = class.id().to_string();
                let model = Arc::clone(&model);
                let config = Arc::clone(&self.config);
                let fs = Arc::clone(&self.fs);
                let root = output_root.to_path_buf();
                let task = tokio::spawn(async move {
                    emit_class(&model, &config, fs.as_ref(), &root, &id).await
                });
                (class.name().to_string(), task)
            })
            .collect();

        let mut report = GenerateReport::default();
        let mut failures = Vec::new();
        for (class, task) in tasks {
            let message = match task.await {
                Ok(mut outcome) => {
                    let error = outcome.error.take();
                    report.absorb(outcome);
                    let Some(err) = error else {
                        continue;
                    };
                    tracing::error!(
                        class = %class,
                        err.msg = %err,
                        err.detail = ?err,
                        "class_generation_error"
                    );
                    err.to_string()
                }
                Err(err) => {
                    tracing::error!(
                        class = %class,
                        err.msg = %err,
                        err.detail = ?err,
                        "class_generation_task_error"
                    );
                    err.to_string()
                }
            };
            failures.push(ClassFailure { class, message });
        }

        let manifest = TypeScriptEmitter::new(&model, &self.config).manifest();
        let manifest_path = output_root.join(manifest.relative_path());
        if let Err(err) = self.fs.write(&manifest_path, &manifest.render()).await {
            tracing::error!(
                err.msg = %err,
                err.detail = ?err,
                path = %manifest_path.display(),
                "manifest_write_error"
            );
            failures.push(ClassFailure {
                class: manifest.name,
                message: err.to_string(),
            });
        }

        if !failures.is_empty() {
            return Err(Error::Generation {
                failures,
                diagnostics: report.diagnostics,
            });
        }

        tracing::info!(
            classes = report.class_count,
            interfaces = report.interface_count,
            enums = report.enum_count,
            diagnostics = report.diagnostics.len(),
            "generation complete"
        );
        Ok(report)
    }
}

async fn emit_class(
    model: &ResolvedModel,
    config: &Config,
    fs: &dyn FileSystem,
    root: &Path,
    id: &str,
) -> ClassOutcome {
    let mut outcome = ClassOutcome::default();
    if let Err(err) = write_class(model, config, fs, root, id, &mut outcome).await {
        outcome.error = Some(err);
    }
    outcome
}

// Diagnostics land in `outcome` as they are found, so they survive a failed write.
async fn write_class(
    model: &ResolvedModel,
    config: &Config,
    fs: &dyn FileSystem,
    root: &Path,
    id: &str,
    outcome: &mut ClassOutcome,
) -> Result<()> {
    let Some(class) = model.class(id) else {
        return Ok(());
    };

    let artifacts =
        TypeScriptEmitter::new(model, config).class_artifacts(class, &mut outcome.diagnostics)?;
    for artifact in artifacts {
        let path: PathBuf = root.join(artifact.relative_path());
        fs.write(&path, &artifact.render()).await?;
        tracing::debug!(class = class.name(), path = %path.display(), "artifact written");
        match artifact.kind {
            ArtifactKind::Contract => outcome.interface_count += 1,
            ArtifactKind::Concrete => outcome.class_count += 1,
            ArtifactKind::Enumeration => outcome.enum_count += 1,
            ArtifactKind::Manifest => {}
        }
    }
    Ok(())
}
