use sectiongen_core::naming::normalize_section_name;
use sectiongen_core::plan::GenerateOutput;
use sectiongen_core::registry::AssetKind;
use sectiongen_core::Result;
use std::path::Path;

use crate::materialize::{write_component_files, write_section_files};
use crate::notify::Notifier;
use crate::registry::RegistryClient;

/// Fetch a section by name and write its files under `directory`.
///
/// The name is normalized first (`hero` → `Hero`). The output reports the
/// payload's own name, which is the one the files are written under. The
/// first failure from either stage is returned as-is.
pub async fn generate_section(
    client: &RegistryClient,
    section_name: &str,
    directory: &Path,
    notifier: &dyn Notifier,
) -> Result<GenerateOutput> {
    let name = normalize_section_name(section_name);

    let section = client.fetch_section(&name, notifier).await?;
    let files = write_section_files(&section, directory, notifier).await?;

    Ok(GenerateOutput {
        kind: AssetKind::Section,
        name: section.name().to_string(),
        directory: directory.to_path_buf(),
        files,
    })
}

/// Fetch a single component by name and write it to `directory/components`.
pub async fn generate_component(
    client: &RegistryClient,
    component_name: &str,
    directory: &Path,
    notifier: &dyn Notifier,
) -> Result<GenerateOutput> {
    let name = component_name.trim().to_string();

    let component = client.fetch_component(&name, notifier).await?;
    let files =
        write_component_files(std::slice::from_ref(&component), directory, notifier).await?;

    Ok(GenerateOutput {
        kind: AssetKind::Component,
        name: component.name().to_string(),
        directory: directory.to_path_buf(),
        files,
    })
}
