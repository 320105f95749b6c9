//! Core library for sectiongen
//!
//! This crate implements the **Functional Core** of the sectiongen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The sectiongen project uses a two-crate architecture:
//!
//! - **`sectiongen_core`** (this crate): models, validation and planning with zero I/O
//! - **`sectiongen`**: HTTP retrieval, file writes and the CLI (the Imperative Shell)
//!
//! Every function here is deterministic and can be tested with fixture data;
//! nothing reads the environment, the network or the filesystem.
//!
//! # Module Organization
//!
//! - [`registry`]: asset kinds, registry configuration and URL construction
//! - [`section`]: section/component models and payload validation
//! - [`naming`]: section name normalization and file-stem safety checks
//! - [`plan`]: destination layout and the list of files a section produces
//! - [`error`]: the error taxonomy shared with the shell crate
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use sectiongen_core::plan::{plan_section_files, Layout};
//! use sectiongen_core::section::parse_section;
//!
//! let section = parse_section(serde_json::json!({
//!     "name": "Hero",
//!     "source": "<div/>",
//!     "schema": "export default {}"
//! }))?;
//!
//! let plan = plan_section_files(&section, &Layout::new("src".as_ref()));
//! assert_eq!(plan.len(), 2);
//! ```

pub mod error;
pub mod naming;
pub mod plan;
pub mod registry;
pub mod section;

pub use error::{Error, Result};
