use futures::future::join_all;
use sectiongen_core::plan::{
    plan_component_files, plan_section_files, Layout, PlannedFile, WrittenFile,
};
use sectiongen_core::section::{Component, SectionComponent};
use sectiongen_core::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;

use crate::notify::Notifier;

/// Write a section (and its nested components) under `directory`.
///
/// Layout: `sections/<Name>.tsx`, `sections/<Name>.schema.ts` and
/// `components/<Component>.tsx`. Existing files are overwritten. Nothing is
/// rolled back on failure; files already written stay on disk.
pub async fn write_section_files(
    section: &SectionComponent,
    directory: &Path,
    notifier: &dyn Notifier,
) -> Result<Vec<WrittenFile>> {
    let layout = Layout::new(directory);
    let plan = plan_section_files(section, &layout);

    ensure_dir(&layout.sections_dir).await?;

    let mut written = Vec::with_capacity(plan.len());
    for file in &plan.section_files {
        written.push(write_file(file, notifier).await?);
    }

    if !plan.component_files.is_empty() {
        ensure_dir(&layout.components_dir).await?;
        written.extend(write_concurrently(&plan.component_files, notifier).await?);
    }

    Ok(written)
}

/// Write standalone components into `directory/components`.
pub async fn write_component_files(
    components: &[Component],
    directory: &Path,
    notifier: &dyn Notifier,
) -> Result<Vec<WrittenFile>> {
    let layout = Layout::new(directory);
    let files = plan_component_files(components, &layout);

    if files.is_empty() {
        return Ok(Vec::new());
    }

    ensure_dir(&layout.components_dir).await?;
    write_concurrently(&files, notifier).await
}

/// Create `path` (non-recursively) unless it already is a directory.
///
/// Losing a creation race to another process counts as success.
async fn ensure_dir(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => return Ok(()),
        Ok(_) => {
            return Err(Error::filesystem(
                path,
                std::io::Error::new(ErrorKind::AlreadyExists, "exists and is not a directory"),
            ))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::filesystem(path, e)),
    }

    log::debug!("Creating directory {}", path.display());

    match tokio::fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::filesystem(path, e)),
    }
}

async fn write_file(file: &PlannedFile, notifier: &dyn Notifier) -> Result<WrittenFile> {
    tokio::fs::write(&file.path, &file.content)
        .await
        .map_err(|e| Error::filesystem(&file.path, e))?;

    notifier.file_written(file);

    Ok(WrittenFile::from(file))
}

/// Write every file concurrently and wait for all of them to settle.
///
/// Every failure is logged; the first one in plan order is returned.
async fn write_concurrently(
    files: &[PlannedFile],
    notifier: &dyn Notifier,
) -> Result<Vec<WrittenFile>> {
    let results = join_all(files.iter().map(|file| write_file(file, notifier))).await;

    let mut written = Vec::with_capacity(results.len());
    let mut first_error = None;

    for result in results {
        match result {
            Ok(file) => written.push(file),
            Err(e) => {
                log::error!("{e}");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(written),
    }
}
