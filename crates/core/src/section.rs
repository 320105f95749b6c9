//! Registry payload models
//!
//! Sections and components are only ever built from a registry response.
//! [`parse_section`] and [`parse_component`] take the raw JSON value and
//! either return a fully valid model or a [`Error::Validation`] naming the
//! offending kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::naming::validate_name;
use crate::registry::AssetKind;

/// Fields shared by every generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFile {
    /// File stem, without extension.
    pub name: String,
    /// File body, written verbatim.
    pub source: String,
    #[serde(default)]
    pub description: String,
}

/// A reusable UI fragment with no further nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(flatten)]
    pub file: BaseFile,
}

/// A top-level UI unit: source, schema and its component dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionComponent {
    #[serde(flatten)]
    pub file: BaseFile,
    /// Body of the companion `.schema.ts` file.
    pub schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
}

impl Component {
    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn source(&self) -> &str {
        &self.file.source
    }
}

impl SectionComponent {
    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn source(&self) -> &str {
        &self.file.source
    }

    /// Nested dependencies, empty when the payload had none.
    pub fn components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or_default()
    }
}

/// Validate and convert a registry response into a [`SectionComponent`].
pub fn parse_section(value: Value) -> Result<SectionComponent> {
    let kind = AssetKind::Section;
    ensure_object(kind, &value)?;
    check_type_tag(kind, &value)?;

    if let Some(Value::Array(components)) = value.get("components") {
        for component in components {
            ensure_object(AssetKind::Component, component)?;
            check_type_tag(AssetKind::Component, component)?;
        }
    }

    let section: SectionComponent =
        serde_json::from_value(value).map_err(|e| Error::validation(kind, e.to_string()))?;

    validate_name(kind, section.name())?;
    for component in section.components() {
        validate_name(AssetKind::Component, component.name())?;
    }

    Ok(section)
}

/// Validate and convert a registry response into a [`Component`].
pub fn parse_component(value: Value) -> Result<Component> {
    let kind = AssetKind::Component;
    ensure_object(kind, &value)?;
    check_type_tag(kind, &value)?;

    let component: Component =
        serde_json::from_value(value).map_err(|e| Error::validation(kind, e.to_string()))?;

    validate_name(kind, component.name())?;

    Ok(component)
}

fn ensure_object(kind: AssetKind, value: &Value) -> Result<()> {
    if value.is_object() {
        return Ok(());
    }

    Err(Error::validation(
        kind,
        format!("expected a JSON object, found {}", json_type_name(value)),
    ))
}

/// The `type` tag is optional, but when present it must match.
fn check_type_tag(kind: AssetKind, value: &Value) -> Result<()> {
    match value.get("type") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(tag)) if tag == kind.as_str() => Ok(()),
        Some(other) => Err(Error::validation(
            kind,
            format!("expected type '{}', found {}", kind.as_str(), other),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
