//! Write planning
//!
//! Turns a validated section into the list of files it produces, without
//! touching the filesystem. The shell crate executes the plan.

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::registry::AssetKind;
use crate::section::{Component, SectionComponent};

pub const SOURCE_EXTENSION: &str = "tsx";
pub const SCHEMA_EXTENSION: &str = "schema.ts";

/// Which notification group a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileGroup {
    SectionSource,
    SectionSchema,
    Component,
}

impl FileGroup {
    pub fn label(&self) -> &'static str {
        match self {
            FileGroup::SectionSource => "section",
            FileGroup::SectionSchema => "schema",
            FileGroup::Component => "component",
        }
    }
}

/// Destination directories under a project source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub sections_dir: PathBuf,
    pub components_dir: PathBuf,
}

impl Layout {
    pub fn new(directory: &Path) -> Self {
        Self {
            sections_dir: directory.join(AssetKind::Section.path_segment()),
            components_dir: directory.join(AssetKind::Component.path_segment()),
        }
    }

    pub fn section_source_path(&self, name: &str) -> PathBuf {
        self.sections_dir
            .join(format!("{name}.{SOURCE_EXTENSION}"))
    }

    pub fn section_schema_path(&self, name: &str) -> PathBuf {
        self.sections_dir
            .join(format!("{name}.{SCHEMA_EXTENSION}"))
    }

    pub fn component_path(&self, name: &str) -> PathBuf {
        self.components_dir
            .join(format!("{name}.{SOURCE_EXTENSION}"))
    }
}

/// A single file to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub group: FileGroup,
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// What a section generation will write, split by phase.
///
/// `section_files` are written in order; `component_files` may be written
/// concurrently since every path is distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPlan {
    pub section_files: Vec<PlannedFile>,
    pub component_files: Vec<PlannedFile>,
}

impl SectionPlan {
    pub fn len(&self) -> usize {
        self.section_files.len() + self.component_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A file that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub group: FileGroup,
    pub name: String,
    pub path: PathBuf,
    pub bytes: usize,
}

impl From<&PlannedFile> for WrittenFile {
    fn from(file: &PlannedFile) -> Self {
        Self {
            group: file.group,
            name: file.name.clone(),
            path: file.path.clone(),
            bytes: file.content.len(),
        }
    }
}

/// Result of a generation run, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutput {
    pub kind: AssetKind,
    pub name: String,
    pub directory: PathBuf,
    pub files: Vec<WrittenFile>,
}

/// Plan the files for a section.
///
/// Empty `source` or `schema` bodies produce no file. Components are
/// de-duplicated by name, ignoring case (first occurrence wins), so no two
/// planned writes share a path on case-insensitive filesystems either.
pub fn plan_section_files(section: &SectionComponent, layout: &Layout) -> SectionPlan {
    let mut plan = SectionPlan::default();

    if !section.source().is_empty() {
        plan.section_files.push(PlannedFile {
            group: FileGroup::SectionSource,
            name: section.name().to_string(),
            path: layout.section_source_path(section.name()),
            content: section.source().to_string(),
        });
    }

    if !section.schema.is_empty() {
        plan.section_files.push(PlannedFile {
            group: FileGroup::SectionSchema,
            name: section.name().to_string(),
            path: layout.section_schema_path(section.name()),
            content: section.schema.clone(),
        });
    }

    plan.component_files = plan_component_files(section.components(), layout);

    plan
}

/// Plan the files for a list of standalone or nested components.
pub fn plan_component_files(components: &[Component], layout: &Layout) -> Vec<PlannedFile> {
    let mut seen = HashSet::new();

    components
        .iter()
        .filter(|component| !component.source().is_empty())
        .filter(|component| seen.insert(component.name().to_lowercase()))
        .map(|component| PlannedFile {
            group: FileGroup::Component,
            name: component.name().to_string(),
            path: layout.component_path(component.name()),
            content: component.source().to_string(),
        })
        .collect()
}
